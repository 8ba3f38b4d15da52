//! Handlers for `/gamification` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/gamification/profile` | Profile with labelled RPG stats |
//! | `GET`  | `/gamification/skills` | Skills grouped into branches |
//! | `GET`  | `/gamification/achievements` | All badges, locked included |
//! | `GET`  | `/gamification/activity-log` | Optional `?limit=` (default 20) |
//! | `GET`  | `/gamification/timeline` | Static career timeline |
//! | `GET`  | `/gamification/weekly-summary` | Narrative over real 7-day XP |

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::Utc;
use devquest_core::{achievement::Achievement, store::GameStore};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, timeline};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// `GET /gamification/profile`
///
/// The four stats are returned under display labels the character sheet
/// renders directly.
pub async fn profile<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let profile = state
    .store
    .profile()
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound("no player profile".to_string()))?;

  Ok(Json(json!({
    "name": profile.name,
    "title": profile.title,
    "dev_class": profile.dev_class,
    "level": profile.level,
    "xp": profile.xp,
    "xp_next_level": profile.xp_next_level,
    "avatar_initials": profile.avatar_initials,
    "stats": {
      "STR": { "value": profile.strength,     "label": "Problem Solving" },
      "INT": { "value": profile.intelligence, "label": "Technical Knowledge" },
      "DEX": { "value": profile.dexterity,    "label": "Adaptability" },
      "WIS": { "value": profile.wisdom,       "label": "Soft Skills" },
    },
  })))
}

// ─── Skills ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Branch {
  pub id:     String,
  pub name:   String,
  pub color:  String,
  pub skills: Vec<BranchSkill>,
}

#[derive(Debug, Serialize)]
pub struct BranchSkill {
  pub id:          String,
  pub name:        String,
  pub level:       i64,
  #[serde(rename = "maxLevel")]
  pub max_level:   i64,
  pub unlocked:    bool,
  pub description: String,
  pub projects:    Vec<String>,
}

/// `GET /gamification/skills` — grouped into branches, in first-seen order.
pub async fn skills<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let skills = state.store.skills().await.map_err(store_err)?;

  let mut branches: Vec<Branch> = Vec::new();
  for skill in skills {
    let key = skill.category.as_str();
    let idx = match branches.iter().position(|b| b.id == key) {
      Some(i) => i,
      None => {
        branches.push(Branch {
          id:     key.to_string(),
          name:   skill.category_name.clone(),
          color:  skill.color.clone(),
          skills: Vec::new(),
        });
        branches.len() - 1
      }
    };
    branches[idx].skills.push(BranchSkill {
      id:          skill.skill_id,
      name:        skill.name,
      level:       skill.level,
      max_level:   skill.max_level,
      unlocked:    skill.unlocked,
      description: skill.description,
      projects:    skill.projects,
    });
  }

  Ok(Json(json!({ "branches": branches })))
}

// ─── Achievements ────────────────────────────────────────────────────────────

/// `GET /gamification/achievements`
pub async fn achievements<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let achievements: Vec<Achievement> =
    state.store.achievements().await.map_err(store_err)?;
  Ok(Json(json!({ "achievements": achievements })))
}

// ─── Activity log ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LogParams {
  pub limit: Option<usize>,
}

/// `GET /gamification/activity-log[?limit=<n>]`
pub async fn activity_log<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<LogParams>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let limit = params.limit.unwrap_or(20);
  let activities =
    state.store.activity_log(limit).await.map_err(store_err)?;
  Ok(Json(json!({ "activities": activities })))
}

// ─── Timeline ────────────────────────────────────────────────────────────────

/// `GET /gamification/timeline` — static career data, no store access.
pub async fn career_timeline() -> Json<Value> {
  Json(json!({ "entries": timeline::ENTRIES }))
}

// ─── Weekly summary ──────────────────────────────────────────────────────────

/// `GET /gamification/weekly-summary`
///
/// The narrative is canned but `xp_gained` is overridden with the real 7-day
/// total whenever any activity exists.
pub async fn weekly_summary<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let cutoff = Utc::now() - chrono::Duration::days(7);
  let recent =
    state.store.activity_since(cutoff).await.map_err(store_err)?;
  let profile = state.store.profile().await.map_err(store_err)?;

  let mut summary = devquest_oracle::weekly_summary(profile.as_ref());
  let total_xp: i64 = recent.iter().map(|a| a.xp_gained).sum();
  if total_xp > 0 {
    summary.xp_gained = total_xp;
  }

  Ok(Json(json!({
    "text": summary.text,
    "xp_gained": summary.xp_gained,
    "quests_completed": summary.quests_completed,
    "badge": summary.badge,
    "total_activities": recent.len(),
  })))
}
