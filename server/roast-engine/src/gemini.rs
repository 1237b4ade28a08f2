//! Gemini `generateContent` adapter.
//!
//! Async HTTP via reqwest. Every failure is logged and reported as
//! `Enrichment::Unavailable`.

use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::enrichment::{self, Enricher, Enrichment, RoastContext};
use crate::error::EnrichError;
use crate::prompt;

/// The key travels in a header so it never appears in request URLs or errors.
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
  config: GeminiConfig,
  http: reqwest::Client,
}

impl GeminiClient {
  /// Fails only when the HTTP client cannot be built; the timeout is never dropped.
  pub fn new(config: GeminiConfig) -> Result<Self, EnrichError> {
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { config, http })
  }

  pub fn model(&self) -> &str {
    &self.config.model
  }

  fn url(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.config.endpoint.trim_end_matches('/'),
      self.config.model
    )
  }

  /// Send one prompt and return the concatenated text of the first candidate.
  pub async fn generate(&self, prompt: &str) -> Result<String, EnrichError> {
    let api_key = self
      .config
      .api_key
      .as_deref()
      .ok_or(EnrichError::MissingApiKey)?;

    let body = GenerateRequest {
      contents: vec![Content {
        parts: vec![Part {
          text: prompt.to_string(),
        }],
      }],
    };

    let response = self
      .http
      .post(self.url())
      .header(API_KEY_HEADER, api_key)
      .json(&body)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let message = response.text().await.unwrap_or_default();
      return Err(EnrichError::Api {
        status: status.as_u16(),
        message,
      });
    }

    let resp: GenerateResponse = response.json().await?;
    let text: String = resp
      .candidates
      .into_iter()
      .next()
      .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
      .unwrap_or_default();
    if text.trim().is_empty() {
      return Err(EnrichError::EmptyResponse);
    }
    Ok(text)
  }
}

impl Enricher for GeminiClient {
  fn is_configured(&self) -> bool {
    self.config.is_configured()
  }

  async fn enrich(&self, ctx: RoastContext<'_>) -> Enrichment {
    let prompt = prompt::build(&ctx);
    match self.generate(&prompt).await {
      Ok(text) => {
        let parsed = enrichment::parse_response(&text);
        if parsed == Enrichment::Unavailable {
          tracing::warn!(model = %self.config.model, "gemini response had no usable roasts");
        }
        parsed
      }
      Err(e) => {
        tracing::warn!(model = %self.config.model, error = %e, "gemini generation failed");
        Enrichment::Unavailable
      }
    }
  }
}

#[derive(Serialize)]
struct GenerateRequest {
  contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
  #[serde(default)]
  parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
  #[serde(default)]
  text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
  content: Content,
}
