//! JSON REST API for DevQuest.
//!
//! Exposes an axum [`Router`] backed by any [`devquest_core::store::GameStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", devquest_api::api_router(state))
//! ```

pub mod blog;
pub mod cv;
pub mod error;
pub mod gamification;
pub mod github;
pub mod oracle;
pub mod timeline;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post},
};
use devquest_core::store::GameStore;
use serde_json::{Value, json};

pub use error::ApiError;
pub use github::GithubClient;

/// Shared handler state: the store plus the GitHub client.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub github: Arc<GithubClient>,
}

// Manual impl: `S` itself sits behind an `Arc`, so no `S: Clone` bound.
impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      github: Arc::clone(&self.github),
    }
  }
}

/// `GET /health`
async fn health() -> Json<Value> {
  Json(json!({
    "status": "alive",
    "quest": "DevQuest",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/health", get(health))
    // Gamification
    .route("/gamification/profile", get(gamification::profile::<S>))
    .route("/gamification/skills", get(gamification::skills::<S>))
    .route(
      "/gamification/achievements",
      get(gamification::achievements::<S>),
    )
    .route(
      "/gamification/activity-log",
      get(gamification::activity_log::<S>),
    )
    .route("/gamification/timeline", get(gamification::career_timeline))
    .route(
      "/gamification/weekly-summary",
      get(gamification::weekly_summary::<S>),
    )
    // Oracle
    .route("/oracle/chat", post(oracle::chat::<S>))
    .route("/oracle/history", get(oracle::history::<S>))
    .route("/oracle/stats", get(oracle::stats::<S>))
    .route("/oracle/weekly-summary", get(oracle::weekly_summary::<S>))
    // Blog
    .route("/blog/posts", get(blog::list::<S>).post(blog::create::<S>))
    .route(
      "/blog/posts/{id}",
      get(blog::get_one::<S>).put(blog::update::<S>).delete(blog::delete::<S>),
    )
    // CV
    .route("/cv/upload", post(cv::upload::<S>))
    .route("/cv/analysis", get(cv::latest::<S>))
    .route("/cv/analyses", get(cv::list::<S>))
    // GitHub
    .route("/github/repos", get(github::repos::<S>))
    .route("/github/repos/{owner}/{repo}", get(github::repo_detail::<S>))
    .route(
      "/github/repos/{owner}/{repo}/analyze",
      post(github::analyze::<S>),
    )
    .route("/github/quest-stats", get(github::quest_stats::<S>))
    .route("/github/profile", get(github::profile::<S>))
    .with_state(state)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
  };
  use devquest_store_sqlite::SqliteStore;
  use serde_json::Value;
  use tower::ServiceExt as _;

  use super::*;

  async fn router(seeded: bool) -> Router<()> {
    let store = SqliteStore::open_in_memory().await.expect("in-memory store");
    if seeded {
      store.seed_if_empty().await.expect("seed");
    }
    let state = AppState {
      store:  Arc::new(store),
      github: Arc::new(GithubClient::new("HiRenan").expect("client")),
    };
    api_router(state)
  }

  async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
  }

  fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
  }

  fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .expect("request")
  }

  #[tokio::test]
  async fn health_is_ok() {
    let response =
      router(false).await.oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "alive");
    assert_eq!(body["quest"], "DevQuest");
  }

  #[tokio::test]
  async fn profile_is_404_before_seeding() {
    let response = router(false)
      .await
      .oneshot(get("/gamification/profile"))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
  }

  #[tokio::test]
  async fn seeded_profile_carries_labelled_stats() {
    let response = router(true)
      .await
      .oneshot(get("/gamification/profile"))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Renan Carvalho");
    assert_eq!(body["level"], 15);
    assert_eq!(body["stats"]["STR"]["label"], "Problem Solving");
    assert_eq!(body["stats"]["WIS"]["value"], 70);
  }

  #[tokio::test]
  async fn skills_group_into_three_branches() {
    let response = router(true)
      .await
      .oneshot(get("/gamification/skills"))
      .await
      .expect("response");
    let body = body_json(response).await;

    let branches = body["branches"].as_array().expect("branches");
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[0]["id"], "frontend");
    assert_eq!(branches[0]["name"], "Frontend Arcana");
    assert_eq!(branches[0]["skills"].as_array().expect("skills").len(), 5);
    assert_eq!(branches[0]["skills"][0]["maxLevel"], 5);
  }

  #[tokio::test]
  async fn timeline_is_served_without_a_store() {
    let response = router(false)
      .await
      .oneshot(get("/gamification/timeline"))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 15);
    assert_eq!(entries[0]["id"], "exp-senai");
  }

  #[tokio::test]
  async fn chat_persists_both_sides_and_grants_xp() {
    let app = router(true).await;

    let response = app
      .clone()
      .oneshot(post_json("/oracle/chat", serde_json::json!({
        "message": "tell me about my skills"
      })))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["role"], "oracle");
    assert_eq!(body["topic"], "skill");
    assert_eq!(body["event"]["xp_gained"], 25);

    let response =
      app.oneshot(get("/oracle/history")).await.expect("response");
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][1]["role"], "oracle");
  }

  #[tokio::test]
  async fn empty_chat_message_is_rejected() {
    let response = router(true)
      .await
      .oneshot(post_json("/oracle/chat", serde_json::json!({
        "message": "   "
      })))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn blog_create_then_delete() {
    let app = router(true).await;

    let response = app
      .clone()
      .oneshot(post_json("/blog/posts", serde_json::json!({
        "title": "Hello",
        "content": "First post"
      })))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["category"], "update"); // default applied
    assert_eq!(body["event"]["xp_gained"], 75);
    let id = body["id"].as_i64().expect("id");

    let response = app
      .clone()
      .oneshot(
        Request::builder()
          .method("DELETE")
          .uri(format!("/blog/posts/{id}"))
          .body(Body::empty())
          .expect("request"),
      )
      .await
      .expect("response");
    assert_eq!(body_json(response).await["success"], true);

    let response = app
      .oneshot(get(&format!("/blog/posts/{id}")))
      .await
      .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn cv_analysis_is_404_before_any_upload() {
    let response =
      router(true).await.oneshot(get("/cv/analysis")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn cv_upload_round_trips_through_analysis() {
    let app = router(true).await;

    let boundary = "devquest-test-boundary";
    let body = format!(
      "--{boundary}\r\n\
       Content-Disposition: form-data; name=\"file\"; \
       filename=\"resume.pdf\"\r\n\
       Content-Type: application/pdf\r\n\r\n\
       fake pdf bytes\r\n\
       --{boundary}--\r\n"
    );
    let request = Request::builder()
      .method("POST")
      .uri("/cv/upload")
      .header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={boundary}"),
      )
      .body(Body::from(body))
      .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["filename"], "resume.pdf");
    assert!(body["score"].as_i64().expect("score") >= 72);
    assert_eq!(body["event"]["xp_gained"], 50);

    let response =
      app.oneshot(get("/cv/analysis")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["filename"], "resume.pdf");
  }

  #[tokio::test]
  async fn history_pagination_reports_has_more() {
    let app = router(true).await;

    for i in 0..3 {
      app
        .clone()
        .oneshot(post_json("/oracle/chat", serde_json::json!({
          "message": format!("hello {i}")
        })))
        .await
        .expect("response");
    }

    let response = app
      .oneshot(get("/oracle/history?limit=4&offset=0"))
      .await
      .expect("response");
    let body = body_json(response).await;
    assert_eq!(body["total"], 6);
    assert_eq!(body["messages"].as_array().expect("messages").len(), 4);
    assert_eq!(body["has_more"], true);
  }
}
