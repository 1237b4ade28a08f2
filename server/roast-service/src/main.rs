//! Binary entrypoint for the roast service.

use std::net::SocketAddr;
use std::sync::Arc;

use roast_engine::{Config, GeminiClient, GeminiConfig, RoastEngine};
use roast_service::{AppState, GithubClient, GithubConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let port: u16 = match std::env::var("PORT") {
    Ok(p) => p.parse().map_err(|_| format!("PORT must be a valid u16, got {:?}", p))?,
    Err(_) => 5005,
  };

  let mut gemini = GeminiConfig::with_api_key(std::env::var("GEMINI_API_KEY").ok());
  if let Ok(model) = std::env::var("GEMINI_MODEL") {
    gemini.model = model;
  }
  let github = GithubConfig {
    token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
    ..GithubConfig::default()
  };
  let enrichment = gemini.is_configured();
  let gemini = GeminiClient::new(gemini)?;
  tracing::info!(enrichment, model = gemini.model(), "roast engine configured");

  let state = Arc::new(AppState {
    github: GithubClient::new(github)?,
    engine: RoastEngine::new(Config::default(), gemini),
  });
  let app = roast_service::router(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("roast-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
