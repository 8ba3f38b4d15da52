//! Achievements and the ordered unlock-rule table.
//!
//! Unlock conditions are an explicit ordered slice, not a map: the checker
//! walks it in declaration order, and two achievements satisfied by the same
//! call appear in the result in that order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCounts;

/// A one-time unlockable badge.
///
/// Once `unlocked` is true it never reverts, and `unlock_date` is written
/// exactly once — the day (UTC) the condition first held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
  pub name:        String,
  pub description: String,
  pub icon:        String,
  pub category:    String,
  pub color:       String,
  pub unlocked:    bool,
  pub unlock_date: Option<NaiveDate>,
}

/// A named unlock condition over the current store counts.
pub struct AchievementRule {
  pub name:  &'static str,
  pub check: fn(&ActivityCounts) -> bool,
}

/// The unlock rules, evaluated in declaration order.
///
/// Rules reference achievements by name; rows already unlocked are skipped
/// entirely, which gives at-most-once unlock semantics.
pub const RULES: &[AchievementRule] = &[
  AchievementRule {
    name:  "Oracle Initiate",
    check: |c| c.user_messages >= 1,
  },
  AchievementRule {
    name:  "Oracle Sage",
    check: |c| c.user_messages >= 20,
  },
  AchievementRule {
    name:  "Scroll Keeper",
    check: |c| c.blog_posts >= 3,
  },
  AchievementRule {
    name:  "CV Master",
    check: |c| c.cv_analyses >= 1,
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rules_are_satisfiable_in_declaration_order() {
    let counts = ActivityCounts {
      user_messages: 20,
      blog_posts: 3,
      cv_analyses: 1,
      ..Default::default()
    };
    let names: Vec<_> = RULES
      .iter()
      .filter(|r| (r.check)(&counts))
      .map(|r| r.name)
      .collect();
    assert_eq!(names, [
      "Oracle Initiate",
      "Oracle Sage",
      "Scroll Keeper",
      "CV Master"
    ]);
  }

  #[test]
  fn fresh_counts_satisfy_nothing() {
    let counts = ActivityCounts::default();
    assert!(RULES.iter().all(|r| !(r.check)(&counts)));
  }
}
