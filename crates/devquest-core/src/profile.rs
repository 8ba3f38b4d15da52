//! The player profile — the singleton record the engine levels up.
//!
//! There is exactly one profile row per deployment. It is created at seed
//! time, mutated only by the XP engine and the stat recalculator, and never
//! deleted.

use serde::{Deserialize, Serialize};

/// The singleton player profile.
///
/// Invariant maintained by the engine: `xp < xp_next_level` after every
/// operation (level-ups are fully rolled over), and the four stats stay
/// within `[0, 100]` and never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
  pub name:            String,
  pub title:           String,
  pub dev_class:       String,
  pub avatar_initials: String,
  pub level:           i64,
  pub xp:              i64,
  pub xp_next_level:   i64,
  pub strength:        i64,
  pub intelligence:    i64,
  pub dexterity:       i64,
  pub wisdom:          i64,
}
