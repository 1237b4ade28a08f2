//! Merge analyzer counters into the shared stats object.

use crate::types::*;

/// Flat copy/rename of analyzer counters plus raw input counts.
/// `using_generative` starts false; the engine sets it.
pub fn build_stats(
  commits: &DetectorResult,
  repos: &DetectorResult,
  input: &RoastInput,
) -> AggregateStats {
  AggregateStats {
    generic_commits: commits.counter(GENERIC_COUNT),
    emoji_crimes: commits.counter(EMOJI_COUNT),
    abandoned_repos: repos.counter(ABANDONED_COUNT),
    generic_repo_names: repos.counter(GENERIC_COUNT),
    missing_descriptions: repos.counter(MISSING_DESCRIPTIONS),
    commits_analyzed: input.commits.len() as u64,
    public_repos: input.profile.public_repos,
    followers: input.profile.followers,
    using_generative: false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn copies_counters_by_name() {
    let mut commits = DetectorResult::new();
    commits.set_counter(GENERIC_COUNT, 5);
    commits.set_counter(EMOJI_COUNT, 4);
    let mut repos = DetectorResult::new();
    repos.set_counter(GENERIC_COUNT, 2);
    repos.set_counter(ABANDONED_COUNT, 7);
    repos.set_counter(MISSING_DESCRIPTIONS, 1);

    let input = RoastInput {
      profile: Profile {
        login: "mona".into(),
        name: None,
        bio: None,
        public_repos: 12,
        followers: 3,
        following: 1,
        created_at: None,
      },
      repositories: Vec::new(),
      commits: vec![
        Commit {
          message: "fix".into(),
          author: None,
          timestamp: None,
        };
        6
      ],
      events: Vec::new(),
    };

    let stats = build_stats(&commits, &repos, &input);
    assert_eq!(stats.generic_commits, 5);
    assert_eq!(stats.emoji_crimes, 4);
    assert_eq!(stats.generic_repo_names, 2);
    assert_eq!(stats.abandoned_repos, 7);
    assert_eq!(stats.missing_descriptions, 1);
    assert_eq!(stats.commits_analyzed, 6);
    assert_eq!(stats.public_repos, 12);
    assert_eq!(stats.followers, 3);
    assert!(!stats.using_generative);
  }
}
