//! Binary entrypoint: read one JSON object from stdin, write one RoastBundle to stdout.
//!
//! Input shape: `{ "user": {...}, "repos": [...], "commits": [...], "events": [...] }`
//! using GitHub REST field names. Invalid input produces an ErrorOutput line.
//! Set GEMINI_API_KEY (and optionally GEMINI_MODEL) to enable enrichment.

use roast_engine::types::ErrorOutput;
use roast_engine::{normalize, Config, EngineError, GeminiClient, GeminiConfig, InboundPayload, RoastEngine};
use std::io::{self, Read, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  if let Err(e) = run_binary().await {
    let _ = writeln!(io::stderr(), "roast-engine error: {}", e);
    std::process::exit(1);
  }
}

async fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let input = match decode(&raw) {
    Ok(input) => input,
    Err(e) => {
      let err = match &e {
        EngineError::Validation { field, reason } => {
          ErrorOutput::new(reason.clone()).with_field(field.clone())
        }
        _ => ErrorOutput::new(e.to_string()),
      };
      io::stdout().write_all(&serde_json::to_vec(&err)?)?;
      return Ok(());
    }
  };

  let mut gemini = GeminiConfig::with_api_key(std::env::var("GEMINI_API_KEY").ok());
  if let Ok(model) = std::env::var("GEMINI_MODEL") {
    gemini.model = model;
  }
  let engine = RoastEngine::new(Config::default(), GeminiClient::new(gemini)?);

  let bundle = engine.roast(&input, chrono::Utc::now()).await;
  io::stdout().write_all(&serde_json::to_vec(&bundle)?)?;
  Ok(())
}

fn decode(raw: &str) -> Result<roast_engine::RoastInput, EngineError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(EngineError::parse("empty input"));
  }
  let payload: InboundPayload = serde_json::from_str(trimmed)?;
  normalize::normalize(&payload)
}
