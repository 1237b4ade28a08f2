//! Generative enrichment contract and response parsing.
//!
//! An `Enricher` never fails: every problem becomes `Enrichment::Unavailable`
//! and the engine falls back to the deterministic roasts.

use std::future::Future;

use crate::types::{AggregateStats, RoastInput};

pub const MAX_GENERATED_ROASTS: usize = 5;
/// Fallback line parsing ignores lines this short (trimmed chars).
const MIN_LINE_CHARS: usize = 10;

/// Everything an enricher may use to build its prompt.
#[derive(Debug, Clone, Copy)]
pub struct RoastContext<'a> {
  pub input: &'a RoastInput,
  pub stats: &'a AggregateStats,
  /// Account age in whole years, when known.
  pub account_age_years: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
  /// 1..=5 trimmed, non-empty roasts.
  Produced(Vec<String>),
  Unavailable,
}

impl Enrichment {
  /// Clean a list of candidate strings; empty after cleaning is unavailable.
  pub fn from_candidates<I, S>(candidates: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let roasts: Vec<String> = candidates
      .into_iter()
      .map(|s| s.as_ref().trim().to_string())
      .filter(|s| !s.is_empty())
      .take(MAX_GENERATED_ROASTS)
      .collect();
    if roasts.is_empty() {
      Self::Unavailable
    } else {
      Self::Produced(roasts)
    }
  }
}

pub trait Enricher {
  /// Whether a credential is present. Unconfigured enrichers are never called.
  fn is_configured(&self) -> bool;

  fn enrich(&self, ctx: RoastContext<'_>) -> impl Future<Output = Enrichment> + Send;
}

/// Deterministic-only mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnricher;

impl Enricher for NoEnricher {
  fn is_configured(&self) -> bool {
    false
  }

  async fn enrich(&self, _ctx: RoastContext<'_>) -> Enrichment {
    Enrichment::Unavailable
  }
}

/// Parse free text from a generative model into roasts.
///
/// Stage 1: the first well-formed JSON array of strings in the text.
/// Stage 2: non-trivial lines with bullet and quote markers removed.
pub fn parse_response(text: &str) -> Enrichment {
  if let Some(roasts) = parse_json_array(text) {
    if let Enrichment::Produced(r) = Enrichment::from_candidates(roasts) {
      return Enrichment::Produced(r);
    }
  }
  Enrichment::from_candidates(
    text
      .lines()
      .filter(|line| line.trim().chars().count() > MIN_LINE_CHARS)
      .map(clean_line),
  )
}

/// The first `[` that opens a well-formed JSON array with at least one
/// non-blank string. Trailing prose, including later brackets, is ignored.
fn parse_json_array(text: &str) -> Option<Vec<String>> {
  text.match_indices('[').find_map(|(i, _)| {
    let values = serde_json::Deserializer::from_str(&text[i..])
      .into_iter::<Vec<serde_json::Value>>()
      .next()?
      .ok()?;
    let strings: Vec<String> = values
      .into_iter()
      .filter_map(|v| match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
      })
      .collect();
    strings
      .iter()
      .any(|s| !s.trim().is_empty())
      .then_some(strings)
  })
}

fn clean_line(line: &str) -> String {
  let line = line.trim();
  let line = line
    .strip_prefix(['-', '*'])
    .unwrap_or(line)
    .trim_start();
  line.trim_matches('"').trim().to_string()
}
