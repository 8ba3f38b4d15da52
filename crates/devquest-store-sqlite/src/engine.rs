//! Transaction-scoped gamification engine.
//!
//! Every helper here takes a live [`rusqlite::Transaction`] so the whole
//! pass — log insert, achievement unlocks, stat recalculation, profile save —
//! commits or vanishes as a unit. The pure math lives in
//! [`devquest_core::engine`]; this module only wires it to SQL.

use chrono::Utc;
use devquest_core::{
  activity::{ActivityCounts, XpGrant},
  engine::{self, UnlockedAchievement, XpEvent},
  profile::PlayerProfile,
};
use rusqlite::{OptionalExtension, Transaction, params};

/// Run one full engine pass for a grant.
///
/// Without a profile row this is a no-op: no log entry is written and the
/// returned event is [`XpEvent::empty`]. Otherwise the log row lands first,
/// so the counts seen by the achievement checker and the stat formulas
/// already include this action.
pub fn award_xp_tx(
  tx: &Transaction<'_>,
  grant: &XpGrant,
) -> rusqlite::Result<XpEvent> {
  let Some(mut profile) = load_profile_tx(tx)? else {
    return Ok(XpEvent::empty(grant.amount));
  };

  let (old_level, leveled_up) = engine::apply_xp(&mut profile, grant.amount);

  tx.execute(
    "INSERT INTO activity_log (action, xp_gained, description, created_at)
     VALUES (?1, ?2, ?3, ?4)",
    params![
      grant.action,
      grant.amount,
      grant.description,
      Utc::now().to_rfc3339()
    ],
  )?;

  let new_achievements = check_achievements_tx(tx)?;

  // Re-read the counts: the unlocks above feed straight into the formulas.
  let counts = activity_counts_tx(tx)?;
  engine::recalculate_stats(&mut profile, &counts);
  save_profile_tx(tx, &profile)?;

  Ok(XpEvent {
    xp_gained: grant.amount,
    new_xp: profile.xp,
    new_level: profile.level,
    xp_next_level: profile.xp_next_level,
    leveled_up,
    old_level,
    new_achievements,
  })
}

/// Walk the rule table in declaration order and unlock what now qualifies.
///
/// Rows already unlocked (and rules whose achievement row is missing) are
/// skipped, so each badge fires at most once.
pub fn check_achievements_tx(
  tx: &Transaction<'_>,
) -> rusqlite::Result<Vec<UnlockedAchievement>> {
  let counts = activity_counts_tx(tx)?;
  let today = Utc::now().date_naive().to_string();

  let mut unlocked = Vec::new();
  for rule in devquest_core::achievement::RULES {
    let row = tx
      .query_row(
        "SELECT unlocked, description, icon, color
         FROM achievements WHERE name = ?1",
        params![rule.name],
        |row| {
          Ok((
            row.get::<_, bool>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
          ))
        },
      )
      .optional()?;

    let Some((already, description, icon, color)) = row else { continue };
    if already || !(rule.check)(&counts) {
      continue;
    }

    tx.execute(
      "UPDATE achievements SET unlocked = 1, unlock_date = ?1 WHERE name = ?2",
      params![today, rule.name],
    )?;
    unlocked.push(UnlockedAchievement {
      name: rule.name.to_string(),
      description,
      icon,
      color,
    });
  }

  Ok(unlocked)
}

/// Gather the aggregate counts the predicates and formulas run over.
pub fn activity_counts_tx(
  tx: &Transaction<'_>,
) -> rusqlite::Result<ActivityCounts> {
  let scalar = |sql: &str| tx.query_row(sql, [], |row| row.get::<_, i64>(0));

  Ok(ActivityCounts {
    blog_posts:            scalar("SELECT COUNT(*) FROM blog_posts")?,
    unlocked_achievements: scalar(
      "SELECT COUNT(*) FROM achievements WHERE unlocked = 1",
    )?,
    skill_level_total:     scalar(
      "SELECT COALESCE(SUM(level), 0) FROM skills WHERE unlocked = 1",
    )?,
    distinct_actions:      scalar(
      "SELECT COUNT(DISTINCT action) FROM activity_log",
    )?,
    cv_analyses:           scalar("SELECT COUNT(*) FROM cv_analyses")?,
    user_messages:         scalar(
      "SELECT COUNT(*) FROM chat_messages WHERE role = 'user'",
    )?,
  })
}

pub fn load_profile_tx(
  tx: &Transaction<'_>,
) -> rusqlite::Result<Option<PlayerProfile>> {
  tx.query_row(
    "SELECT name, title, dev_class, avatar_initials, level, xp,
            xp_next_level, strength, intelligence, dexterity, wisdom
     FROM player_profile WHERE id = 1",
    [],
    |row| {
      Ok(PlayerProfile {
        name:            row.get(0)?,
        title:           row.get(1)?,
        dev_class:       row.get(2)?,
        avatar_initials: row.get(3)?,
        level:           row.get(4)?,
        xp:              row.get(5)?,
        xp_next_level:   row.get(6)?,
        strength:        row.get(7)?,
        intelligence:    row.get(8)?,
        dexterity:       row.get(9)?,
        wisdom:          row.get(10)?,
      })
    },
  )
  .optional()
}

pub fn save_profile_tx(
  tx: &Transaction<'_>,
  profile: &PlayerProfile,
) -> rusqlite::Result<()> {
  tx.execute(
    "UPDATE player_profile SET
       level = ?1, xp = ?2, xp_next_level = ?3,
       strength = ?4, intelligence = ?5, dexterity = ?6, wisdom = ?7
     WHERE id = 1",
    params![
      profile.level,
      profile.xp,
      profile.xp_next_level,
      profile.strength,
      profile.intelligence,
      profile.dexterity,
      profile.wisdom
    ],
  )?;
  Ok(())
}
