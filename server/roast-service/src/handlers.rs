//! HTTP handlers for the roast service.

use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use roast_engine::normalize;

use crate::error::ServiceError;
use crate::state::AppState;
use crate::types::{RoastQuery, RoastResponse};

pub async fn health() -> &'static str {
  "ok"
}

/// GitHub logins: 1-39 ASCII alphanumerics or hyphens.
fn valid_login(login: &str) -> bool {
  (1..=39).contains(&login.len()) && login.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub async fn roast(
  State(state): State<Arc<AppState>>,
  Query(query): Query<RoastQuery>,
) -> Result<Json<RoastResponse>, ServiceError> {
  let login = query
    .username
    .as_deref()
    .map(str::trim)
    .filter(|u| !u.is_empty())
    .ok_or(ServiceError::MissingUsername)?;
  if !valid_login(login) {
    return Err(ServiceError::NotFound);
  }

  let payload = state.github.fetch_account(login).await.map_err(|e| {
    tracing::warn!(login, error = %e, "github lookup failed");
    e
  })?;
  let input = normalize::normalize(&payload).map_err(ServiceError::upstream)?;

  let bundle = state.engine.roast(&input, chrono::Utc::now()).await;

  Ok(Json(RoastResponse {
    username: payload.user.login,
    name: payload.user.name,
    avatar_url: payload.user.avatar_url,
    roasts: bundle.roasts,
    stats: bundle.stats,
  }))
}
