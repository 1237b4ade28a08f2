//! Service errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("Username is required")]
  MissingUsername,

  #[error("GitHub user not found. Check the username and try again.")]
  NotFound,

  #[error("Failed to analyze GitHub profile. The user might have limited public activity.")]
  Upstream,
}

impl ServiceError {
  /// The detail is logged here and never reaches the client.
  pub fn upstream(detail: impl std::fmt::Display) -> Self {
    tracing::warn!(detail = %detail, "upstream failure");
    Self::Upstream
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::MissingUsername => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Upstream => StatusCode::BAD_GATEWAY,
    }
  }
}

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    let body = serde_json::json!({ "error": self.to_string() });
    (self.status(), Json(body)).into_response()
  }
}
