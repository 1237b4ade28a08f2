//! Normalize inbound GitHub records into engine records.
//!
//! Only the account login is required. Any other missing or unparsable field
//! degrades to an absent value so one bad record cannot abort the analysis.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::EngineError;
use crate::types::*;

/// Parse and normalize an InboundPayload into a RoastInput.
pub fn normalize(raw: &InboundPayload) -> Result<RoastInput, EngineError> {
  Ok(RoastInput {
    profile: normalize_profile(&raw.user)?,
    repositories: raw.repos.iter().map(normalize_repo).collect(),
    commits: raw.commits.iter().map(normalize_commit).collect(),
    events: raw.events.iter().map(normalize_event).collect(),
  })
}

pub fn normalize_profile(raw: &InboundUser) -> Result<Profile, EngineError> {
  let login = raw.login.trim();
  if login.is_empty() {
    return Err(EngineError::validation("user.login", "must not be empty"));
  }
  Ok(Profile {
    login: login.to_string(),
    name: non_blank(&raw.name),
    bio: non_blank(&raw.bio),
    public_repos: raw.public_repos,
    followers: raw.followers,
    following: raw.following,
    created_at: parse_utc(raw.created_at.as_deref(), "user.created_at"),
  })
}

pub fn normalize_repo(raw: &InboundRepo) -> Repository {
  Repository {
    name: raw.name.clone(),
    description: non_blank(&raw.description),
    is_fork: raw.fork,
    size_kb: raw.size,
    updated_at: parse_utc(raw.updated_at.as_deref(), "repo.updated_at"),
  }
}

pub fn normalize_commit(raw: &InboundCommit) -> Commit {
  let author = raw.commit.author.as_ref();
  Commit {
    message: raw.commit.message.clone(),
    author: author.and_then(|a| non_blank(&a.name)),
    timestamp: parse_utc(author.and_then(|a| a.date.as_deref()), "commit.author.date"),
  }
}

pub fn normalize_event(raw: &InboundEvent) -> ActivityEvent {
  ActivityEvent {
    kind: EventKind::from_str_loose(&raw.kind),
    created_at: parse_fixed(raw.created_at.as_deref(), "event.created_at"),
  }
}

fn non_blank(s: &Option<String>) -> Option<String> {
  s.as_ref()
    .filter(|v| !v.trim().is_empty())
    .map(|v| v.to_string())
}

fn parse_fixed(s: Option<&str>, field: &str) -> Option<DateTime<FixedOffset>> {
  let s = s?;
  match DateTime::parse_from_rfc3339(s) {
    Ok(dt) => Some(dt),
    Err(e) => {
      tracing::debug!(field, value = s, error = %e, "ignoring unparsable timestamp");
      None
    }
  }
}

fn parse_utc(s: Option<&str>, field: &str) -> Option<DateTime<Utc>> {
  parse_fixed(s, field).map(|dt| dt.with_timezone(&Utc))
}
