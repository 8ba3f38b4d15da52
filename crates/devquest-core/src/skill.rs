//! Skills — the static skill tree.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The fixed set of skill-tree branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
  Frontend,
  Backend,
  Data,
}

impl SkillCategory {
  /// The string stored in the `category` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Frontend => "frontend",
      Self::Backend => "backend",
      Self::Data => "data",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "frontend" => Ok(Self::Frontend),
      "backend" => Ok(Self::Backend),
      "data" => Ok(Self::Data),
      other => Err(Error::UnknownCategory(other.to_owned())),
    }
  }
}

/// One node of the skill tree.
///
/// `level` is read by the stat recalculator but never mutated by any engine
/// path; skill progression is not driven by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
  pub skill_id:      String,
  pub name:          String,
  pub category:      SkillCategory,
  pub category_name: String,
  /// Invariant: `0 <= level <= max_level`.
  pub level:         i64,
  pub max_level:     i64,
  pub unlocked:      bool,
  pub description:   String,
  pub color:         String,
  pub projects:      Vec<String>,
}
