//! Activity log entries, XP grants, and the aggregated counts derived
//! stats and achievement predicates run over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record of one XP-granting action. Rows are append-only —
/// the log is the audit trail stats are derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
  pub action:      String,
  pub xp_gained:   i64,
  pub description: String,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`GameStore::award_xp`](crate::store::GameStore::award_xp).
/// The log entry records the raw amount, unaffected by level rollover.
#[derive(Debug, Clone)]
pub struct XpGrant {
  pub action:      String,
  pub description: String,
  pub amount:      i64,
}

impl XpGrant {
  pub fn new(
    action: impl Into<String>,
    description: impl Into<String>,
    amount: i64,
  ) -> Self {
    Self {
      action: action.into(),
      description: description.into(),
      amount,
    }
  }

  /// One Oracle chat turn.
  pub fn chat_turn() -> Self {
    Self::new("oracle_chat", "Consulted the Oracle", 25)
  }

  /// A blog post was published.
  pub fn blog_post(title: &str) -> Self {
    Self::new("blog_post", format!("Published \"{title}\""), 75)
  }

  /// A CV was uploaded for analysis.
  pub fn cv_upload(filename: &str) -> Self {
    Self::new("cv_upload", format!("Uploaded {filename} for analysis"), 50)
  }
}

/// Aggregated store counts, gathered once per engine pass.
///
/// Both the achievement predicates and the stat formulas are pure functions
/// of these numbers, which keeps them trivially testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
  pub blog_posts:            i64,
  pub unlocked_achievements: i64,
  /// Sum of `level` over unlocked skills.
  pub skill_level_total:     i64,
  /// Distinct `action` labels in the activity log.
  pub distinct_actions:      i64,
  pub cv_analyses:           i64,
  /// Chat messages with the `user` role.
  pub user_messages:         i64,
}
