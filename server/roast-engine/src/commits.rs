//! Commit message detectors: generic wording, emoji density, length,
//! shouting and common typos.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::Config;
use crate::emoji;
use crate::types::{DetectorResult, EMOJI_COUNT, GENERIC_COUNT};

static GENERIC_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^(?:fix|update|change|add|remove|wip|work in progress)$").unwrap()
});

static TYPO_WORD: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)\b(?:teh|adn|hte|taht|waht|whith|thier|recieve)\b").unwrap()
});

pub fn is_generic(message: &str) -> bool {
  GENERIC_MESSAGE.is_match(message.trim())
}

pub fn is_shouting(message: &str, min_chars: usize) -> bool {
  message == message.to_uppercase() && message.chars().count() > min_chars
}

pub fn has_typo(message: &str) -> bool {
  TYPO_WORD.is_match(message)
}

/// Run every commit detector. Roasts come out in a fixed order:
/// generic, emoji, long, shouting, typos.
///
/// `genericCount` is always the raw count; `emojiCount` is only set when the
/// emoji roast fires.
pub fn analyze<S: AsRef<str>>(messages: &[S], config: &Config) -> DetectorResult {
  let mut out = DetectorResult::new();
  let messages: Vec<&str> = messages.iter().map(AsRef::as_ref).collect();

  let generic = messages.iter().filter(|m| is_generic(m)).count();
  if generic > config.generic_commit_limit {
    out.roast(format!(
      "{} commits with messages like \"fix\" or \"update\"? Your commit history reads like a broken keyboard! 🎹💔",
      generic
    ));
  }
  out.set_counter(GENERIC_COUNT, generic);

  let with_emoji = messages.iter().filter(|m| emoji::contains_emoji(m)).count();
  let emoji_crimes = if with_emoji > config.emoji_commit_limit {
    out.roast(format!(
      "{} commits with emojis? Your commit messages look like a teenager's text messages! 🙄📱",
      with_emoji
    ));
    with_emoji
  } else {
    0
  };
  out.set_counter(EMOJI_COUNT, emoji_crimes);

  let long = messages
    .iter()
    .filter(|m| m.chars().count() > config.long_message_chars)
    .count();
  if long > config.long_message_limit {
    out.roast("Writing novels in your commit messages? Save some characters for your actual code! 📚✍️");
  }

  if messages.iter().any(|m| is_shouting(m, config.shouting_min_chars)) {
    out.roast("CALM DOWN! Your commit messages don't need to shout. We can hear you just fine. 📢😤");
  }

  if messages.iter().any(|m| has_typo(m)) {
    out.roast("Typos in commit messages? Maybe spend less time coding and more time learning to spell! 📝🤦");
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(messages: &[&str]) -> DetectorResult {
    analyze(messages, &Config::default())
  }

  #[test]
  fn generic_vocabulary() {
    assert!(is_generic("fix"));
    assert!(is_generic("  Update "));
    assert!(is_generic("WIP"));
    assert!(is_generic("work in progress"));
    assert!(!is_generic("fix login redirect"));
    assert!(!is_generic("changes"));
  }

  #[test]
  fn three_generic_messages_trigger() {
    let out = run(&["fix", "update", "wip", "real work"]);
    assert_eq!(out.counter(GENERIC_COUNT), 3);
    assert_eq!(out.roasts.len(), 1);
    assert!(out.roasts[0].starts_with("3 commits"));
  }

  #[test]
  fn two_generic_messages_do_not_trigger_but_count() {
    let out = run(&["fix", "remove", "refactor parser"]);
    assert_eq!(out.counter(GENERIC_COUNT), 2);
    assert!(out.roasts.is_empty());
  }

  #[test]
  fn emoji_counter_only_set_on_trigger() {
    let three = run(&["a 🎉", "b 🐛", "c 🚀", "d"]);
    assert_eq!(three.counter(EMOJI_COUNT), 0);
    assert!(three.roasts.is_empty());

    let four = run(&["a 🎉", "b 🐛", "c 🚀", "d ✨"]);
    assert_eq!(four.counter(EMOJI_COUNT), 4);
    assert_eq!(four.roasts.len(), 1);
    assert!(four.roasts[0].starts_with("4 commits with emojis"));
  }

  #[test]
  fn long_messages_need_more_than_two() {
    let long = "x".repeat(101);
    let exactly = "y".repeat(100);
    assert!(run(&[long.as_str(), long.as_str(), exactly.as_str()]).roasts.is_empty());
    let out = run(&[long.as_str(), long.as_str(), long.as_str()]);
    assert_eq!(out.roasts.len(), 1);
    assert!(out.roasts[0].contains("novels"));
  }

  #[test]
  fn shouting_requires_length() {
    assert!(is_shouting("URGENT FIX!!!", 5));
    assert!(!is_shouting("FIXED", 5));
    assert!(!is_shouting("Fixed the thing", 5));
    let out = run(&["FIXED THE THING THAT WAS BROKEN"]);
    assert_eq!(out.roasts.len(), 1);
    assert!(out.roasts[0].starts_with("CALM DOWN"));
  }

  #[test]
  fn typos_match_whole_words_only() {
    assert!(has_typo("teh typo fix and adn other changes"));
    assert!(has_typo("Recieve handler"));
    assert!(!has_typo("the athens tehran trip"));
  }

  #[test]
  fn roasts_follow_fixed_order() {
    let long = "l".repeat(120);
    let out = run(&[
      "fix",
      "fix",
      "fix",
      "🎉 one",
      "🎉 two",
      "🎉 three",
      "🎉 four",
      long.as_str(),
      long.as_str(),
      long.as_str(),
      "STOP THE PRESSES",
      "teh end",
    ]);
    assert_eq!(out.roasts.len(), 5);
    assert!(out.roasts[0].contains("broken keyboard"));
    assert!(out.roasts[1].contains("emojis"));
    assert!(out.roasts[2].contains("novels"));
    assert!(out.roasts[3].starts_with("CALM DOWN"));
    assert!(out.roasts[4].starts_with("Typos"));
  }

  #[test]
  fn empty_input_is_quiet() {
    let out = run(&[]);
    assert!(out.roasts.is_empty());
    assert_eq!(out.counter(GENERIC_COUNT), 0);
    assert_eq!(out.counter(EMOJI_COUNT), 0);
  }
}
