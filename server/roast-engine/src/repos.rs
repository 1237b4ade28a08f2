//! Repository detectors: staleness, generic names, missing descriptions,
//! fork ratio and tiny repos.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::config::Config;
use crate::types::{DetectorResult, Repository, ABANDONED_COUNT, GENERIC_COUNT, MISSING_DESCRIPTIONS};

static GENERIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^(?:test|demo|sample|project|app|website|portfolio|temp)\d*$").unwrap()
});

const SECONDS_PER_MONTH: f64 = 60.0 * 60.0 * 24.0 * 30.0;

/// Months (30-day) between the last update and `now`. `None` when unknown.
pub fn months_since_update(repo: &Repository, now: DateTime<Utc>) -> Option<f64> {
  repo
    .updated_at
    .map(|ts| (now - ts).num_seconds() as f64 / SECONDS_PER_MONTH)
}

pub fn is_generic_name(name: &str) -> bool {
  GENERIC_NAME.is_match(name)
}

/// Run every repository detector. Fraction-based detectors never fire on an
/// empty list.
pub fn analyze(repos: &[Repository], now: DateTime<Utc>, config: &Config) -> DetectorResult {
  let mut out = DetectorResult::new();
  let total = repos.len() as f64;

  let stale = repos
    .iter()
    .filter(|r| months_since_update(r, now).is_some_and(|m| m > config.stale_repo_months))
    .count();
  if stale > config.stale_repo_limit {
    out.roast(format!(
      "{} repos gathering dust? You create projects faster than you abandon them! 🏚️💨",
      stale
    ));
  }
  out.set_counter(ABANDONED_COUNT, stale);

  let generic = repos.iter().filter(|r| is_generic_name(&r.name)).count();
  if generic > config.generic_repo_name_limit {
    out.roast("\"test\", \"demo\", \"project\"... Your creativity in naming repos is as impressive as a Windows temp folder! 📁😴");
  }
  out.set_counter(GENERIC_COUNT, generic);

  let undescribed = repos.iter().filter(|r| r.description.is_none()).count();
  if undescribed as f64 > total * config.missing_description_ratio {
    out.roast("Half your repos have no description. Do you expect people to play guessing games? 🎲❓");
  }
  out.set_counter(MISSING_DESCRIPTIONS, undescribed);

  let forks = repos.iter().filter(|r| r.is_fork).count();
  if forks as f64 > total * config.fork_ratio {
    out.roast("Mostly forks? You're like the friend who only shares memes but never creates original content! 🍴📋");
  }

  let tiny = repos.iter().filter(|r| r.size_kb < config.tiny_repo_kb).count();
  if tiny > config.tiny_repo_limit {
    out.roast("So many tiny repos! Quality over quantity, or are you just practicing git init? 🤏📦");
  }

  out
}
