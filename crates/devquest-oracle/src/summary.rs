//! Weekly summary narrative.
//!
//! The text is canned; the HTTP layer overrides `xp_gained` with the real
//! 7-day activity total when one exists and attaches its own counters.

use devquest_core::profile::PlayerProfile;
use serde::Serialize;

/// A weekly activity recap.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
  pub text:             String,
  pub xp_gained:        i64,
  pub quests_completed: i64,
  pub badge:            String,
}

/// Build the recap, personalised when a profile snapshot is available.
pub fn weekly_summary(profile: Option<&PlayerProfile>) -> WeeklySummary {
  let text = match profile {
    Some(p) => format!(
      "This week, level-{} {} completed 3 quests, gained 450 XP, and \
       unlocked the 'Consistent Coder' badge.",
      p.level, p.name
    ),
    None => "This week you completed 3 quests, gained 450 XP, and unlocked \
             the 'Consistent Coder' badge."
      .to_string(),
  };

  WeeklySummary {
    text,
    xp_gained: 450,
    quests_completed: 3,
    badge: "Consistent Coder".to_string(),
  }
}
