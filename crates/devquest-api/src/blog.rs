//! Handlers for `/blog/posts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/blog/posts` | Pinned first, then newest |
//! | `POST`   | `/blog/posts` | Grants XP; 201 with the resulting event |
//! | `GET`    | `/blog/posts/{id}` | 404 if unknown |
//! | `PUT`    | `/blog/posts/{id}` | Full replace; no XP |
//! | `DELETE` | `/blog/posts/{id}` | `{"success": true}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use devquest_core::{
  activity::XpGrant,
  blog::{BlogPost, NewBlogPost},
  engine::XpEvent,
  store::GameStore,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

// ─── Bodies ──────────────────────────────────────────────────────────────────

fn default_category() -> String {
  "update".to_string()
}

fn default_color() -> String {
  "#8b5cf6".to_string()
}

#[derive(Debug, Deserialize)]
pub struct BlogPostBody {
  pub title:    String,
  pub content:  String,
  #[serde(default = "default_category")]
  pub category: String,
  #[serde(default)]
  pub tags:     Vec<String>,
  #[serde(default = "default_color")]
  pub color:    String,
  #[serde(default)]
  pub pinned:   bool,
}

impl From<BlogPostBody> for NewBlogPost {
  fn from(body: BlogPostBody) -> Self {
    Self {
      title:    body.title,
      content:  body.content,
      category: body.category,
      tags:     body.tags,
      color:    body.color,
      pinned:   body.pinned,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CreatedPost {
  #[serde(flatten)]
  pub post:  BlogPost,
  pub event: XpEvent,
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /blog/posts`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let posts = state.store.list_posts().await.map_err(store_err)?;
  let total = posts.len();
  Ok(Json(json!({ "posts": posts, "total": total })))
}

/// `GET /blog/posts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<BlogPost>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let post = state
    .store
    .get_post(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("post {id} not found")))?;
  Ok(Json(post))
}

/// `POST /blog/posts` — publishing grants XP atomically with the insert.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<BlogPostBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  if body.title.trim().is_empty() {
    return Err(ApiError::BadRequest("title must not be empty".to_string()));
  }

  let grant = XpGrant::blog_post(&body.title);
  let (post, event) = state
    .store
    .create_post(body.into(), grant)
    .await
    .map_err(store_err)?;

  Ok((StatusCode::CREATED, Json(CreatedPost { post, event })))
}

/// `PUT /blog/posts/{id}` — full replacement of the editable fields.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Json(body): Json<BlogPostBody>,
) -> Result<Json<BlogPost>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let post = state
    .store
    .update_post(id, body.into())
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("post {id} not found")))?;
  Ok(Json(post))
}

/// `DELETE /blog/posts/{id}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let deleted = state.store.delete_post(id).await.map_err(store_err)?;
  if !deleted {
    return Err(ApiError::NotFound(format!("post {id} not found")));
  }
  Ok(Json(json!({ "success": true })))
}
