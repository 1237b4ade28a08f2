//! Profile detectors: follow skew, missing bio, stale account, zero audience.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::types::{DetectorResult, Profile};

const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.0;

/// Fractional account age in years. `None` when the creation time is unknown.
pub fn account_age_years(profile: &Profile, now: DateTime<Utc>) -> Option<f64> {
  profile
    .created_at
    .map(|created| (now - created).num_seconds() as f64 / SECONDS_PER_YEAR)
}

pub fn analyze(profile: &Profile, now: DateTime<Utc>, config: &Config) -> DetectorResult {
  let mut out = DetectorResult::new();

  if profile.followers > 0
    && profile.following > profile.followers.saturating_mul(config.follow_skew_factor)
  {
    out.roast("Following more people than you have followers? Someone's a little desperate for connections! 👥💔");
  }

  if profile.bio.is_none() {
    out.roast("No bio? Let me guess... you're also the person who doesn't fill out their LinkedIn profile! 📝🙈");
  }

  if let Some(age) = account_age_years(profile, now) {
    if age > config.stale_account_years && profile.public_repos < config.stale_account_max_repos {
      out.roast(format!(
        "{} years on GitHub and only {} public repos? You're aging slower than your commit count! ⏳👴",
        age.floor() as u64,
        profile.public_repos
      ));
    }
  }

  if profile.followers == 0 && profile.public_repos > config.zero_audience_repo_limit {
    out.roast("Zero followers but lots of repos? You're coding in a void, my friend! 🕳️👤");
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn profile() -> Profile {
    Profile {
      login: "mona".into(),
      name: Some("Mona".into()),
      bio: Some("ships things".into()),
      public_repos: 20,
      followers: 10,
      following: 10,
      created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    }
  }

  fn run(p: &Profile) -> DetectorResult {
    analyze(p, now(), &Config::default())
  }

  #[test]
  fn healthy_profile_is_quiet() {
    assert!(run(&profile()).roasts.is_empty());
  }

  #[test]
  fn follow_skew_needs_followers() {
    let mut p = profile();
    p.following = 21;
    assert!(run(&p).roasts[0].starts_with("Following more people"));
    p.following = 20;
    assert!(run(&p).roasts.is_empty());
    p.followers = 0;
    p.following = 500;
    p.public_repos = 3;
    assert!(run(&p).roasts.is_empty());
  }

  #[test]
  fn missing_bio() {
    let mut p = profile();
    p.bio = None;
    assert!(run(&p).roasts[0].starts_with("No bio?"));
  }

  #[test]
  fn stale_account_floors_age() {
    let mut p = profile();
    p.public_repos = 2;
    p.created_at = Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    let out = run(&p);
    assert_eq!(out.roasts.len(), 1);
    assert!(out.roasts[0].starts_with("4 years on GitHub and only 2 public repos"));
  }

  #[test]
  fn unknown_creation_time_skips_age_check() {
    let mut p = profile();
    p.public_repos = 1;
    p.created_at = None;
    assert!(run(&p).roasts.is_empty());
  }

  #[test]
  fn zero_audience_and_bio_both_fire() {
    let mut p = profile();
    p.followers = 0;
    p.following = 0;
    p.bio = None;
    p.public_repos = 11;
    let out = run(&p);
    assert_eq!(out.roasts.len(), 2);
    assert!(out.roasts[0].starts_with("No bio?"));
    assert!(out.roasts[1].starts_with("Zero followers"));
  }
}
