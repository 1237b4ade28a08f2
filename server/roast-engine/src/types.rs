//! Core types for the roast engine (JSON contracts + internal records).

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: GitHub REST shapes). Unknown fields are ignored.
// ---------------------------------------------------------------------------

/// Everything the engine needs for one account, as the caller sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundPayload {
  pub user: InboundUser,
  #[serde(default)]
  pub repos: Vec<InboundRepo>,
  #[serde(default)]
  pub commits: Vec<InboundCommit>,
  #[serde(default)]
  pub events: Vec<InboundEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundUser {
  pub login: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub avatar_url: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub public_repos: u64,
  #[serde(default)]
  pub followers: u64,
  #[serde(default)]
  pub following: u64,
  #[serde(default)]
  pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundRepo {
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub fork: bool,
  #[serde(default)]
  pub size: u64,
  #[serde(default)]
  pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  pub commit: InboundCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommitDetail {
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub author: Option<InboundAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundAuthor {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundEvent {
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Event kind (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
  Push,
  Create,
  Issues,
  PullRequest,
  Other(String),
}

impl EventKind {
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "pushevent" | "push" => Self::Push,
      "createevent" | "create" => Self::Create,
      "issuesevent" | "issues" | "issue" => Self::Issues,
      "pullrequestevent" | "pull_request" | "pull-request" => Self::PullRequest,
      _ => Self::Other(s.to_string()),
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized records (immutable inputs to the analyzers)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Profile {
  pub login: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub public_repos: u64,
  pub followers: u64,
  pub following: u64,
  /// `None` when missing or unparsable.
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Repository {
  pub name: String,
  pub description: Option<String>,
  pub is_fork: bool,
  pub size_kb: u64,
  pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Commit {
  pub message: String,
  pub author: Option<String>,
  pub timestamp: Option<DateTime<Utc>>,
}

/// Public event. The timestamp keeps the offset it was supplied with.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
  pub kind: EventKind,
  pub created_at: Option<DateTime<FixedOffset>>,
}

/// The four record sets for one analysis call.
#[derive(Debug, Clone)]
pub struct RoastInput {
  pub profile: Profile,
  pub repositories: Vec<Repository>,
  pub commits: Vec<Commit>,
  pub events: Vec<ActivityEvent>,
}

// ---------------------------------------------------------------------------
// Detector output
// ---------------------------------------------------------------------------

pub const GENERIC_COUNT: &str = "genericCount";
pub const EMOJI_COUNT: &str = "emojiCount";
pub const ABANDONED_COUNT: &str = "abandonedCount";
pub const MISSING_DESCRIPTIONS: &str = "missingDescriptions";

/// Roasts in detection order plus named counters for the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorResult {
  pub roasts: Vec<String>,
  pub counters: BTreeMap<&'static str, u64>,
}

impl DetectorResult {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn roast(&mut self, text: impl Into<String>) {
    self.roasts.push(text.into());
  }

  pub fn set_counter(&mut self, name: &'static str, value: usize) {
    self.counters.insert(name, value as u64);
  }

  /// Counter value, 0 when the analyzer did not report it.
  pub fn counter(&self, name: &str) -> u64 {
    self.counters.get(name).copied().unwrap_or(0)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
  pub generic_commits: u64,
  pub emoji_crimes: u64,
  pub abandoned_repos: u64,
  pub generic_repo_names: u64,
  pub missing_descriptions: u64,
  pub commits_analyzed: u64,
  pub public_repos: u64,
  pub followers: u64,
  pub using_generative: bool,
}

/// Final output: 1..=5 non-empty roasts plus stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastBundle {
  pub roasts: Vec<String>,
  pub stats: AggregateStats,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
