//! Activity detectors over the recent window of public events.

use chrono::{Datelike, Timelike, Utc, Weekday};

use crate::config::Config;
use crate::types::{ActivityEvent, DetectorResult, EventKind, Profile};

/// Saturday or Sunday on the event's own calendar (its supplied offset).
pub fn is_weekend(event: &ActivityEvent) -> bool {
  event
    .created_at
    .is_some_and(|ts| matches!(ts.weekday(), Weekday::Sat | Weekday::Sun))
}

/// UTC hour 23 or 0..=5.
pub fn is_late_night(event: &ActivityEvent) -> bool {
  event.created_at.is_some_and(|ts| {
    let hour = ts.with_timezone(&Utc).hour();
    hour >= 23 || hour <= 5
  })
}

/// The profile is accepted for future detectors and currently unused.
pub fn analyze(events: &[ActivityEvent], _profile: &Profile, config: &Config) -> DetectorResult {
  let mut out = DetectorResult::new();
  let recent = &events[..events.len().min(config.recent_window)];

  let weekend = recent.iter().filter(|e| is_weekend(e)).count();
  if weekend as f64 > recent.len() as f64 * config.weekend_ratio {
    out.roast("Weekend warrior detected! Do you only code when normal people are having fun? 🏃‍♂️💻");
  }

  let late = recent.iter().filter(|e| is_late_night(e)).count();
  if late > config.late_night_limit {
    out.roast("3 AM commits? Either you're in a different timezone or you really need to fix your sleep schedule! 🌙💻");
  }

  if recent.len() > config.burst_window_min {
    let pushes = recent.iter().filter(|e| e.kind == EventKind::Push).count();
    if pushes > config.burst_push_limit {
      out.roast("So many commits! Do you save your work every time you fix a typo? 💾🤯");
    }
  }

  out
}
