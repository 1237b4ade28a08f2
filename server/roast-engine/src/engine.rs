//! Core engine: runs the analyzers, builds stats, tries enrichment, falls back.

use chrono::{DateTime, Utc};

use crate::activity;
use crate::aggregate;
use crate::commits;
use crate::config::Config;
use crate::enrichment::{Enricher, Enrichment, NoEnricher, RoastContext};
use crate::profile;
use crate::repos;
use crate::types::*;

pub const DEFAULT_ROAST: &str =
  "Your GitHub is so clean, it's suspicious. Are you hiding your real work in private repos? 🤔";

/// Output of the four analyzers plus merged stats, before any enrichment.
#[derive(Debug, Clone)]
pub struct Analysis {
  pub commits: DetectorResult,
  pub repos: DetectorResult,
  pub profile: DetectorResult,
  pub activity: DetectorResult,
  pub stats: AggregateStats,
}

impl Analysis {
  /// Deterministic roasts in fixed order: commits, repos, profile, activity.
  pub fn deterministic_roasts(&self) -> Vec<String> {
    [&self.commits, &self.repos, &self.profile, &self.activity]
      .into_iter()
      .flat_map(|r| r.roasts.iter().cloned())
      .collect()
  }
}

/// The roast engine. Stateless across calls; safe to share between requests.
pub struct RoastEngine<E = NoEnricher> {
  config: Config,
  enricher: E,
}

impl RoastEngine<NoEnricher> {
  pub fn with_defaults() -> Self {
    Self::new(Config::default(), NoEnricher)
  }
}

impl<E: Enricher> RoastEngine<E> {
  pub fn new(config: Config, enricher: E) -> Self {
    Self { config, enricher }
  }

  /// Run the four analyzers and merge their counters. Pure; never fails.
  pub fn analyze(&self, input: &RoastInput, now: DateTime<Utc>) -> Analysis {
    let messages: Vec<&str> = input.commits.iter().map(|c| c.message.as_str()).collect();
    let commits = commits::analyze(&messages, &self.config);
    let repos = repos::analyze(&input.repositories, now, &self.config);
    let profile = profile::analyze(&input.profile, now, &self.config);
    let activity = activity::analyze(&input.events, &input.profile, &self.config);
    let stats = aggregate::build_stats(&commits, &repos, input);

    Analysis {
      commits,
      repos,
      profile,
      activity,
      stats,
    }
  }

  /// Produce the final bundle: generative roasts when the enricher is
  /// configured and produces something, deterministic roasts otherwise.
  /// Always returns 1..=max_roasts non-empty roasts.
  pub async fn roast(&self, input: &RoastInput, now: DateTime<Utc>) -> RoastBundle {
    let analysis = self.analyze(input, now);
    let mut stats = analysis.stats.clone();

    let generated = if self.enricher.is_configured() {
      let ctx = RoastContext {
        input,
        stats: &analysis.stats,
        account_age_years: profile::account_age_years(&input.profile, now)
          .map(|y| y.max(0.0).floor() as u64),
      };
      match self.enricher.enrich(ctx).await {
        Enrichment::Produced(roasts) => match Enrichment::from_candidates(roasts) {
          Enrichment::Produced(clean) => Some(clean),
          Enrichment::Unavailable => None,
        },
        Enrichment::Unavailable => None,
      }
    } else {
      None
    };

    let mut roasts = match generated {
      Some(roasts) => {
        stats.using_generative = true;
        roasts
      }
      None => {
        if self.enricher.is_configured() {
          tracing::warn!(login = %input.profile.login, "enrichment unavailable, using deterministic roasts");
        }
        let mut roasts = analysis.deterministic_roasts();
        if roasts.is_empty() {
          roasts.push(DEFAULT_ROAST.to_string());
        }
        roasts
      }
    };
    roasts.truncate(self.config.max_roasts.max(1));

    tracing::info!(
      login = %input.profile.login,
      roasts = roasts.len(),
      using_generative = stats.using_generative,
      "roast generated"
    );

    RoastBundle { roasts, stats }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  struct FixedEnricher(Enrichment);

  impl Enricher for FixedEnricher {
    fn is_configured(&self) -> bool {
      true
    }

    async fn enrich(&self, _ctx: RoastContext<'_>) -> Enrichment {
      self.0.clone()
    }
  }

  /// Would produce roasts, but reports no credentials.
  struct Unconfigured;

  impl Enricher for Unconfigured {
    fn is_configured(&self) -> bool {
      false
    }

    async fn enrich(&self, _ctx: RoastContext<'_>) -> Enrichment {
      Enrichment::Produced(vec!["should never be used".into()])
    }
  }

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn input(messages: &[&str]) -> RoastInput {
    RoastInput {
      profile: Profile {
        login: "mona".into(),
        name: Some("Mona".into()),
        bio: Some("builds things".into()),
        public_repos: 20,
        followers: 10,
        following: 10,
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
      },
      repositories: Vec::new(),
      commits: messages
        .iter()
        .map(|m| Commit {
          message: m.to_string(),
          author: None,
          timestamp: None,
        })
        .collect(),
      events: Vec::new(),
    }
  }

  #[tokio::test]
  async fn quiet_input_gets_default_roast() {
    let engine = RoastEngine::with_defaults();
    let bundle = engine.roast(&input(&[]), now()).await;
    assert_eq!(bundle.roasts, vec![DEFAULT_ROAST.to_string()]);
    assert!(!bundle.stats.using_generative);
  }

  #[tokio::test]
  async fn produced_roasts_replace_deterministic_ones() {
    let engine = RoastEngine::new(
      Config::default(),
      FixedEnricher(Enrichment::Produced(vec!["one".into(), " two ".into()])),
    );
    let bundle = engine.roast(&input(&["fix", "fix", "fix"]), now()).await;
    assert_eq!(bundle.roasts, vec!["one", "two"]);
    assert!(bundle.stats.using_generative);
    assert_eq!(bundle.stats.generic_commits, 3);
  }

  #[tokio::test]
  async fn unavailable_falls_back() {
    let engine = RoastEngine::new(Config::default(), FixedEnricher(Enrichment::Unavailable));
    let bundle = engine.roast(&input(&["fix", "fix", "fix"]), now()).await;
    assert!(!bundle.stats.using_generative);
    assert_eq!(bundle.roasts.len(), 1);
    assert!(bundle.roasts[0].contains("broken keyboard"));
  }

  #[tokio::test]
  async fn unconfigured_enricher_is_skipped() {
    let engine = RoastEngine::new(Config::default(), Unconfigured);
    let inp = input(&["fix", "fix", "fix"]);
    let bundle = engine.roast(&inp, now()).await;
    assert!(!bundle.stats.using_generative);
    assert_eq!(bundle.roasts, engine.analyze(&inp, now()).deterministic_roasts());
  }

  #[tokio::test]
  async fn blank_produced_roasts_fall_back() {
    let engine = RoastEngine::new(
      Config::default(),
      FixedEnricher(Enrichment::Produced(vec!["   ".into()])),
    );
    let bundle = engine.roast(&input(&[]), now()).await;
    assert_eq!(bundle.roasts, vec![DEFAULT_ROAST.to_string()]);
    assert!(!bundle.stats.using_generative);
  }

  #[tokio::test]
  async fn deterministic_roasts_are_capped() {
    let long = "l".repeat(120);
    let mut inp = input(&[
      "fix",
      "fix",
      "fix",
      "a 🎉",
      "b 🎉",
      "c 🎉",
      "d 🎉",
      long.as_str(),
      long.as_str(),
      long.as_str(),
      "SHOUTING LOUDLY",
      "teh end",
    ]);
    inp.profile.bio = None;
    let engine = RoastEngine::with_defaults();
    let analysis = engine.analyze(&inp, now());
    assert_eq!(analysis.deterministic_roasts().len(), 6);

    let bundle = engine.roast(&inp, now()).await;
    assert_eq!(bundle.roasts.len(), 5);
    assert_eq!(bundle.roasts, analysis.deterministic_roasts()[..5].to_vec());
    assert_eq!(bundle.stats.emoji_crimes, 4);
  }
}
