//! PushLog Roast Service
//!
//! HTTP service that resolves a GitHub login, runs the roast engine and returns
//! roasts + stats. Bind to 127.0.0.1 by default (internal only).

mod error;
mod github;
mod handlers;
mod state;
mod types;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ServiceError;
pub use github::{GithubClient, GithubConfig};
pub use handlers::{health, roast};
pub use state::AppState;
pub use types::{RoastQuery, RoastResponse};

/// Build the router (for testing without binding to a port).
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/roast", get(roast))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
