//! Pure gamification logic: level rollover and stat recalculation.
//!
//! Nothing here touches storage. The store backend gathers
//! [`ActivityCounts`], calls into this module inside its transaction, and
//! persists the mutated profile.

use serde::{Deserialize, Serialize};

use crate::{activity::ActivityCounts, profile::PlayerProfile};

/// Level `n` requires `n * XP_PER_LEVEL` XP.
pub const XP_PER_LEVEL: i64 = 1000;

/// Derived stats never exceed this ceiling.
pub const STAT_CEILING: i64 = 100;

/// The Oracle's own level is capped here.
pub const ORACLE_LEVEL_CAP: i64 = 20;

// ─── Event types ─────────────────────────────────────────────────────────────

/// An achievement that just unlocked, shaped for client display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
  pub name:        String,
  pub description: String,
  pub icon:        String,
  pub color:       String,
}

/// The structured result of one `award_xp` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpEvent {
  pub xp_gained:        i64,
  pub new_xp:           i64,
  pub new_level:        i64,
  pub xp_next_level:    i64,
  pub leveled_up:       bool,
  pub old_level:        i64,
  pub new_achievements: Vec<UnlockedAchievement>,
}

impl XpEvent {
  /// The degenerate zero-effect event returned when no profile row exists.
  /// This is a designed no-op path, not an error.
  pub fn empty(xp_gained: i64) -> Self {
    Self {
      xp_gained,
      new_xp: 0,
      new_level: 1,
      xp_next_level: XP_PER_LEVEL,
      leveled_up: false,
      old_level: 1,
      new_achievements: Vec::new(),
    }
  }
}

// ─── XP rollover ─────────────────────────────────────────────────────────────

/// Apply an XP delta and roll level-ups until `xp < xp_next_level`.
///
/// A single large grant can cross several levels in one pass; no level-up is
/// ever lost. Returns `(old_level, leveled_up)`.
pub fn apply_xp(profile: &mut PlayerProfile, amount: i64) -> (i64, bool) {
  let old_level = profile.level;
  profile.xp += amount;

  let mut leveled_up = false;
  while profile.xp >= profile.xp_next_level {
    profile.xp -= profile.xp_next_level;
    profile.level += 1;
    profile.xp_next_level = profile.level * XP_PER_LEVEL;
    leveled_up = true;
  }

  (old_level, leveled_up)
}

// ─── Stat recalculation ──────────────────────────────────────────────────────

/// Oracle level: grows one step per five user messages, capped.
pub fn oracle_level(user_messages: i64) -> i64 {
  (1 + user_messages / 5).min(ORACLE_LEVEL_CAP)
}

/// Recalculate STR/INT/DEX/WIS from the current counts.
///
/// Each stat is `min(max(current, formula), 100)` — stats only go up, never
/// down, regardless of how the underlying counts fluctuate.
pub fn recalculate_stats(profile: &mut PlayerProfile, counts: &ActivityCounts) {
  let raise =
    |current: i64, formula: i64| current.max(formula).min(STAT_CEILING);

  profile.strength = raise(
    profile.strength,
    50 + counts.blog_posts * 3 + counts.unlocked_achievements * 2,
  );
  profile.intelligence =
    raise(profile.intelligence, 50 + counts.skill_level_total * 2);
  profile.dexterity = raise(
    profile.dexterity,
    50 + counts.distinct_actions * 5 + counts.cv_analyses * 3,
  );
  profile.wisdom = raise(
    profile.wisdom,
    50 + counts.user_messages + oracle_level(counts.user_messages) * 2,
  );
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn fresh_profile() -> PlayerProfile {
    PlayerProfile {
      name:            "Renan Carvalho".into(),
      title:           "Full-Stack Mage".into(),
      dev_class:       "Full-Stack Mage".into(),
      avatar_initials: "RC".into(),
      level:           1,
      xp:              0,
      xp_next_level:   XP_PER_LEVEL,
      strength:        50,
      intelligence:    50,
      dexterity:       50,
      wisdom:          50,
    }
  }

  #[test]
  fn small_grant_does_not_level() {
    let mut p = fresh_profile();
    let (old, leveled) = apply_xp(&mut p, 300);
    assert_eq!((old, leveled), (1, false));
    assert_eq!((p.level, p.xp, p.xp_next_level), (1, 300, 1000));
  }

  #[test]
  fn exact_threshold_rolls_to_zero() {
    let mut p = fresh_profile();
    let (old, leveled) = apply_xp(&mut p, 1000);
    assert_eq!((old, leveled), (1, true));
    assert_eq!((p.level, p.xp, p.xp_next_level), (2, 0, 2000));
  }

  #[test]
  fn grant_of_1500_from_fresh_profile() {
    let mut p = fresh_profile();
    let (old, leveled) = apply_xp(&mut p, 1500);
    assert_eq!((old, leveled), (1, true));
    assert_eq!((p.level, p.xp, p.xp_next_level), (2, 500, 2000));
  }

  #[test]
  fn large_grant_crosses_two_levels_in_one_pass() {
    let mut p = fresh_profile();
    // 3500 = 1000 (level 2) + 2000 (level 3) + 500 residual.
    let (_, leveled) = apply_xp(&mut p, 3500);
    assert!(leveled);
    assert_eq!((p.level, p.xp, p.xp_next_level), (3, 500, 3000));
  }

  #[test]
  fn xp_always_below_next_level_after_grant() {
    let mut p = fresh_profile();
    for amount in [0, 1, 999, 1000, 2500, 10_000, 123_456] {
      apply_xp(&mut p, amount);
      assert!(p.xp < p.xp_next_level, "xp={} next={}", p.xp, p.xp_next_level);
    }
  }

  #[test]
  fn oracle_level_steps_and_caps() {
    assert_eq!(oracle_level(0), 1);
    assert_eq!(oracle_level(4), 1);
    assert_eq!(oracle_level(5), 2);
    assert_eq!(oracle_level(94), 19);
    assert_eq!(oracle_level(95), 20);
    assert_eq!(oracle_level(10_000), 20);
  }

  #[test]
  fn stats_follow_the_formulas_from_the_floor() {
    let mut p = fresh_profile();
    let counts = ActivityCounts {
      blog_posts:            2,
      unlocked_achievements: 3,
      skill_level_total:     10,
      distinct_actions:      4,
      cv_analyses:           1,
      user_messages:         7,
    };
    recalculate_stats(&mut p, &counts);
    assert_eq!(p.strength, 50 + 2 * 3 + 3 * 2);
    assert_eq!(p.intelligence, 50 + 10 * 2);
    assert_eq!(p.dexterity, 50 + 4 * 5 + 1 * 3);
    assert_eq!(p.wisdom, 50 + 7 + 2 * 2); // oracle level 2 at 7 messages
  }

  #[test]
  fn stats_never_decrease_when_counts_shrink() {
    let mut p = fresh_profile();
    let busy = ActivityCounts {
      distinct_actions: 6,
      cv_analyses: 2,
      ..Default::default()
    };
    recalculate_stats(&mut p, &busy);
    let dexterity_peak = p.dexterity;

    // A quieter snapshot must not pull the stat back down.
    recalculate_stats(&mut p, &ActivityCounts::default());
    assert_eq!(p.dexterity, dexterity_peak);
  }

  #[test]
  fn stats_clamp_at_the_ceiling() {
    let mut p = fresh_profile();
    let counts = ActivityCounts {
      blog_posts:            100,
      unlocked_achievements: 100,
      skill_level_total:     100,
      distinct_actions:      100,
      cv_analyses:           100,
      user_messages:         100,
    };
    recalculate_stats(&mut p, &counts);
    assert_eq!(p.strength, STAT_CEILING);
    assert_eq!(p.intelligence, STAT_CEILING);
    assert_eq!(p.dexterity, STAT_CEILING);
    assert_eq!(p.wisdom, STAT_CEILING);
  }
}
