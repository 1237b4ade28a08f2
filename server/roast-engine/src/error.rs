//! Structured error types for the roast engine.
//!
//! The analysis path itself never fails; these only surface from input
//! decoding (stdin binary) and from the Gemini adapter before it folds them
//! into `Enrichment::Unavailable`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("parse: {0}")]
  Parse(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn parse(msg: impl Into<String>) -> Self {
    Self::Parse(msg.into())
  }
}

/// Failures inside the enrichment adapter. Never leaves the adapter.
#[derive(Debug, Error)]
pub enum EnrichError {
  #[error("no Gemini API key configured")]
  MissingApiKey,

  #[error("request failed: {0}")]
  Request(reqwest::Error),

  #[error("api error: {status} - {message}")]
  Api { status: u16, message: String },

  #[error("no usable roasts in response")]
  EmptyResponse,
}

impl From<reqwest::Error> for EnrichError {
  /// The request URL is stripped so endpoints and query strings stay out of logs.
  fn from(e: reqwest::Error) -> Self {
    Self::Request(e.without_url())
  }
}
