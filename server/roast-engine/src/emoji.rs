//! Emoji detection by explicit code-point ranges.

/// Inclusive ranges: emoticons, symbols & pictographs, transport & map,
/// regional indicators, misc symbols, dingbats.
const EMOJI_RANGES: &[(u32, u32)] = &[
  (0x1F600, 0x1F64F),
  (0x1F300, 0x1F5FF),
  (0x1F680, 0x1F6FF),
  (0x1F1E0, 0x1F1FF),
  (0x2600, 0x26FF),
  (0x2700, 0x27BF),
];

pub fn is_emoji(c: char) -> bool {
  let cp = c as u32;
  EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

pub fn contains_emoji(s: &str) -> bool {
  s.chars().any(is_emoji)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn range_edges() {
    assert!(is_emoji('\u{1F600}'));
    assert!(is_emoji('\u{1F64F}'));
    assert!(is_emoji('\u{27BF}'));
    assert!(is_emoji('\u{2600}'));
    assert!(!is_emoji('\u{25FF}'));
    assert!(!is_emoji('\u{1F700}'));
  }

  #[test]
  fn detects_in_text() {
    assert!(contains_emoji("bug fix 🐛"));
    assert!(contains_emoji("ship it 🚀"));
    assert!(contains_emoji("weather ☀ today"));
    assert!(!contains_emoji("plain ascii message"));
    assert!(!contains_emoji("naïve café"));
  }
}
