//! GitHub REST ingestion: resolves a login into an engine payload.

use std::time::Duration;

use reqwest::StatusCode;
use roast_engine::types::{InboundCommit, InboundEvent, InboundPayload, InboundRepo, InboundUser};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = "pushlog-roast-service";

const REPO_LIMIT: usize = 10;
/// Commits are pulled from this many of the most recently updated repos.
const COMMIT_REPOS: usize = 3;
const COMMITS_PER_REPO: usize = 5;
const EVENT_LIMIT: usize = 30;

#[derive(Debug, Clone)]
pub struct GithubConfig {
  pub base_url: String,
  pub token: Option<String>,
  pub timeout: Duration,
}

impl Default for GithubConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_GITHUB_API.to_string(),
      token: None,
      timeout: Duration::from_secs(15),
    }
  }
}

/// Outcome of one GET against the API.
#[derive(Debug)]
enum FetchError {
  NotFound,
  Failed(String),
}

impl From<reqwest::Error> for FetchError {
  fn from(e: reqwest::Error) -> Self {
    Self::Failed(e.to_string())
  }
}

pub struct GithubClient {
  config: GithubConfig,
  http: reqwest::Client,
}

impl GithubClient {
  /// Fails only when the HTTP client cannot be built; the timeout is never dropped.
  pub fn new(config: GithubConfig) -> reqwest::Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .user_agent(USER_AGENT)
      .build()?;
    Ok(Self { config, http })
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
    let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
    let mut req = self
      .http
      .get(&url)
      .header(reqwest::header::ACCEPT, "application/vnd.github+json");
    if let Some(token) = &self.config.token {
      req = req.bearer_auth(token);
    }

    let response = req.send().await?;
    match response.status() {
      StatusCode::NOT_FOUND => Err(FetchError::NotFound),
      s if !s.is_success() => Err(FetchError::Failed(format!("GET {} returned {}", path, s))),
      _ => Ok(response.json().await?),
    }
  }

  pub async fn fetch_account(&self, login: &str) -> Result<InboundPayload, ServiceError> {
    let user: InboundUser = match self.get(&format!("/users/{}", login)).await {
      Ok(user) => user,
      Err(FetchError::NotFound) => return Err(ServiceError::NotFound),
      Err(FetchError::Failed(e)) => return Err(ServiceError::upstream(e)),
    };

    let repos: Vec<InboundRepo> = self
      .get(&format!("/users/{}/repos?sort=updated&per_page={}", login, REPO_LIMIT))
      .await
      .map_err(|e| match e {
        FetchError::NotFound => ServiceError::NotFound,
        FetchError::Failed(msg) => ServiceError::upstream(msg),
      })?;

    let mut commits: Vec<InboundCommit> = Vec::new();
    for repo in repos.iter().take(COMMIT_REPOS) {
      let path = format!(
        "/repos/{}/{}/commits?per_page={}",
        login, repo.name, COMMITS_PER_REPO
      );
      match self.get::<Vec<InboundCommit>>(&path).await {
        Ok(batch) => commits.extend(batch),
        Err(e) => tracing::debug!(repo = %repo.name, error = ?e, "skipping commits"),
      }
    }

    let events: Vec<InboundEvent> = match self
      .get(&format!("/users/{}/events/public?per_page={}", login, EVENT_LIMIT))
      .await
    {
      Ok(events) => events,
      Err(e) => {
        tracing::debug!(login, error = ?e, "no public events");
        Vec::new()
      }
    };

    Ok(InboundPayload {
      user,
      repos,
      commits,
      events,
    })
  }
}
