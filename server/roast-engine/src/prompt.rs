//! Prompt construction for generative roasts.

use std::fmt::Write;

use crate::enrichment::RoastContext;

const MAX_PROMPT_REPOS: usize = 8;
const MAX_PROMPT_COMMITS: usize = 10;

pub fn build(ctx: &RoastContext<'_>) -> String {
  let profile = &ctx.input.profile;
  let stats = ctx.stats;

  let repo_names: Vec<&str> = ctx
    .input
    .repositories
    .iter()
    .take(MAX_PROMPT_REPOS)
    .map(|r| r.name.as_str())
    .collect();
  let messages: Vec<&str> = ctx
    .input
    .commits
    .iter()
    .take(MAX_PROMPT_COMMITS)
    .map(|c| c.message.as_str())
    .collect();
  let age = ctx
    .account_age_years
    .map_or_else(|| "unknown".to_string(), |y| y.to_string());

  let mut p = String::new();
  p.push_str("You are a witty, sarcastic GitHub roaster. Generate 3-5 creative and humorous roasts for a GitHub user based on their activity. Be playful and funny, not mean or offensive. Use emojis for fun.\n\n");

  // Writing into a String cannot fail.
  let _ = writeln!(p, "GitHub User Analysis:");
  let _ = writeln!(p, "- Username: {}", profile.login);
  let _ = writeln!(p, "- Name: {}", profile.name.as_deref().unwrap_or("No name provided"));
  let _ = writeln!(p, "- Bio: {}", profile.bio.as_deref().unwrap_or("No bio"));
  let _ = writeln!(p, "- Public Repos: {}", profile.public_repos);
  let _ = writeln!(p, "- Followers: {}", profile.followers);
  let _ = writeln!(p, "- Following: {}", profile.following);
  let _ = writeln!(p, "- Account Age: {} years\n", age);

  let _ = writeln!(p, "Recent Repository Names:\n{}\n", repo_names.join(", "));
  let _ = writeln!(p, "Recent Commit Messages:\n{}\n", messages.join("\n"));

  let _ = writeln!(p, "Analysis Summary:");
  let _ = writeln!(p, "- Has {} generic commit messages", stats.generic_commits);
  let _ = writeln!(p, "- Has {} commits with excessive emojis", stats.emoji_crimes);
  let _ = writeln!(p, "- Has {} abandoned repositories", stats.abandoned_repos);
  let _ = writeln!(p, "- Has {} generically named repositories", stats.generic_repo_names);
  let _ = writeln!(p, "- Has {} repos without descriptions\n", stats.missing_descriptions);

  p.push_str("Generate 3-5 witty roasts as a JSON array of strings. Focus on their coding patterns, repo naming, commit messages, and GitHub activity. Make them funny but not cruel. Example format:\n");
  p.push_str("[\"Roast 1 with emoji 🔥\", \"Roast 2 with emoji 😂\", \"Roast 3 with emoji 💻\"]\n\n");
  p.push_str("JSON Response:");
  p
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  #[test]
  fn prompt_carries_profile_and_counters() {
    let input = RoastInput {
      profile: Profile {
        login: "mona".into(),
        name: None,
        bio: None,
        public_repos: 4,
        followers: 2,
        following: 9,
        created_at: None,
      },
      repositories: (0..12)
        .map(|i| Repository {
          name: format!("repo{}", i),
          description: None,
          is_fork: false,
          size_kb: 1,
          updated_at: None,
        })
        .collect(),
      commits: vec![Commit {
        message: "fix".into(),
        author: None,
        timestamp: None,
      }],
      events: Vec::new(),
    };
    let stats = AggregateStats {
      generic_commits: 1,
      emoji_crimes: 0,
      ..AggregateStats::default()
    };
    let prompt = build(&RoastContext {
      input: &input,
      stats: &stats,
      account_age_years: Some(3),
    });

    assert!(prompt.contains("- Username: mona"));
    assert!(prompt.contains("- Name: No name provided"));
    assert!(prompt.contains("- Account Age: 3 years"));
    assert!(prompt.contains("repo7"));
    assert!(!prompt.contains("repo8"));
    assert!(prompt.contains("- Has 1 generic commit messages"));
    assert!(prompt.ends_with("JSON Response:"));
  }
}
