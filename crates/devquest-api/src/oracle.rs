//! Handlers for `/oracle` endpoints — persisted chat with the keyword Oracle.
//!
//! Each chat turn writes both sides of the exchange and grants XP in the
//! same transaction, so the reply always carries the resulting
//! [`XpEvent`](devquest_core::engine::XpEvent).

use axum::{
  Json,
  extract::{Query, State},
};
use devquest_core::{
  activity::XpGrant,
  chat::{ChatPage, OracleStats},
  engine::XpEvent,
  store::GameStore,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

// ─── Chat ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatBody {
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
  pub role:  &'static str,
  pub text:  String,
  pub topic: String,
  pub event: XpEvent,
}

/// `POST /oracle/chat` — body: `{"message":"..."}`
pub async fn chat<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  if body.message.trim().is_empty() {
    return Err(ApiError::BadRequest("message must not be empty".to_string()));
  }

  // Snapshot the context first; the reply reads it, the write doesn't.
  let profile = state.store.profile().await.map_err(store_err)?;
  let skills = state.store.skills().await.map_err(store_err)?;

  let reply =
    devquest_oracle::oracle_chat(&body.message, profile.as_ref(), &skills);

  let event = state
    .store
    .record_chat_turn(body.message, reply.clone(), XpGrant::chat_turn())
    .await
    .map_err(store_err)?;

  Ok(Json(ChatResponse {
    role: "oracle",
    text: reply.text,
    topic: reply.topic,
    event,
  }))
}

// ─── History ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
  pub limit:  Option<usize>,
  pub offset: Option<usize>,
}

/// `GET /oracle/history[?limit=<n>&offset=<n>]` — chronological pages.
pub async fn history<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<HistoryParams>,
) -> Result<Json<ChatPage>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let page = state
    .store
    .chat_history(params.limit.unwrap_or(50), params.offset.unwrap_or(0))
    .await
    .map_err(store_err)?;
  Ok(Json(page))
}

// ─── Stats ───────────────────────────────────────────────────────────────────

/// `GET /oracle/stats`
pub async fn stats<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<OracleStats>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let stats = state.store.oracle_stats().await.map_err(store_err)?;
  Ok(Json(stats))
}

// ─── Weekly summary ──────────────────────────────────────────────────────────

/// `GET /oracle/weekly-summary` — the narrative plus the all-time message
/// count.
pub async fn weekly_summary<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let profile = state.store.profile().await.map_err(store_err)?;
  let summary = devquest_oracle::weekly_summary(profile.as_ref());
  let total =
    state.store.chat_history(1, 0).await.map_err(store_err)?.total;

  Ok(Json(json!({
    "text": summary.text,
    "xp_gained": summary.xp_gained,
    "quests_completed": summary.quests_completed,
    "badge": summary.badge,
    "total_messages": total,
  })))
}
