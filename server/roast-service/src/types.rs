//! Request/response types for the roast service.

use roast_engine::AggregateStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RoastQuery {
  #[serde(default)]
  pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
  pub username: String,
  pub name: Option<String>,
  pub avatar_url: Option<String>,
  pub roasts: Vec<String>,
  pub stats: AggregateStats,
}
