//! Engine configuration with sane defaults.

use std::time::Duration;

/// Detector thresholds. Every comparison against a count is strict (`>`).
#[derive(Debug, Clone)]
pub struct Config {
  /// Generic commit messages needed (strictly more than) to roast.
  pub generic_commit_limit: usize,
  /// Emoji-bearing commit messages needed (strictly more than) to roast.
  pub emoji_commit_limit: usize,
  /// A commit message longer than this many characters is "long".
  pub long_message_chars: usize,
  pub long_message_limit: usize,
  /// Shouted messages must be longer than this many characters.
  pub shouting_min_chars: usize,
  /// Months (30-day) without an update before a repo counts as stale.
  pub stale_repo_months: f64,
  pub stale_repo_limit: usize,
  pub generic_repo_name_limit: usize,
  /// Fraction of repos without a description that triggers a roast.
  pub missing_description_ratio: f64,
  pub fork_ratio: f64,
  /// Repos smaller than this (KB) are "tiny".
  pub tiny_repo_kb: u64,
  pub tiny_repo_limit: usize,
  /// Following > factor * followers triggers the skew roast.
  pub follow_skew_factor: u64,
  pub stale_account_years: f64,
  /// Stale-account roast requires fewer public repos than this.
  pub stale_account_max_repos: u64,
  pub zero_audience_repo_limit: u64,
  /// Number of most recent events inspected by the activity detectors.
  pub recent_window: usize,
  pub weekend_ratio: f64,
  pub late_night_limit: usize,
  /// Burst detection only runs when the window holds more events than this.
  pub burst_window_min: usize,
  pub burst_push_limit: usize,
  /// Upper bound on roasts in a bundle.
  pub max_roasts: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      generic_commit_limit: 2,
      emoji_commit_limit: 3,
      long_message_chars: 100,
      long_message_limit: 2,
      shouting_min_chars: 5,
      stale_repo_months: 6.0,
      stale_repo_limit: 3,
      generic_repo_name_limit: 2,
      missing_description_ratio: 0.5,
      fork_ratio: 0.7,
      tiny_repo_kb: 10,
      tiny_repo_limit: 3,
      follow_skew_factor: 2,
      stale_account_years: 2.0,
      stale_account_max_repos: 5,
      zero_audience_repo_limit: 10,
      recent_window: 20,
      weekend_ratio: 0.6,
      late_night_limit: 5,
      burst_window_min: 15,
      burst_push_limit: 8,
      max_roasts: 5,
    }
  }
}

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Settings for the Gemini enrichment adapter.
///
/// `api_key: None` selects deterministic mode; it is not an error.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
  pub api_key: Option<String>,
  pub model: String,
  pub endpoint: String,
  pub timeout: Duration,
}

impl Default for GeminiConfig {
  fn default() -> Self {
    Self {
      api_key: None,
      model: DEFAULT_GEMINI_MODEL.to_string(),
      endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
      timeout: Duration::from_secs(20),
    }
  }
}

impl GeminiConfig {
  /// Config with the given key; blank keys count as absent.
  pub fn with_api_key(api_key: Option<String>) -> Self {
    Self {
      api_key: api_key.filter(|k| !k.trim().is_empty()),
      ..Self::default()
    }
  }

  pub fn is_configured(&self) -> bool {
    self.api_key.is_some()
  }
}
