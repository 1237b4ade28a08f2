//! Shared, read-only service state.

use roast_engine::{GeminiClient, RoastEngine};

use crate::github::GithubClient;

pub struct AppState {
  pub github: GithubClient,
  pub engine: RoastEngine<GeminiClient>,
}
