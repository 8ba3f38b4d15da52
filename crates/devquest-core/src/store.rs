//! The `GameStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g.
//! `devquest-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.
//!
//! Every XP-granting write (`award_xp`, `record_chat_turn`, `create_post`,
//! `record_cv_analysis`) runs the full engine pass — rollover, activity log,
//! achievement check, stat recalculation — atomically with the triggering
//! row, so partial application is impossible.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
  achievement::Achievement,
  activity::{ActivityEntry, XpGrant},
  blog::{BlogPost, NewBlogPost},
  chat::{ChatPage, OracleReply, OracleStats},
  cv::{CvAnalysis, CvReport},
  engine::XpEvent,
  profile::PlayerProfile,
  skill::Skill,
};

/// Abstraction over a DevQuest store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait GameStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// The singleton profile, or `None` before seeding.
  fn profile(
    &self,
  ) -> impl Future<Output = Result<Option<PlayerProfile>, Self::Error>> + Send + '_;

  fn skills(
    &self,
  ) -> impl Future<Output = Result<Vec<Skill>, Self::Error>> + Send + '_;

  fn achievements(
    &self,
  ) -> impl Future<Output = Result<Vec<Achievement>, Self::Error>> + Send + '_;

  /// Most recent `limit` activity rows, newest first.
  fn activity_log(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<ActivityEntry>, Self::Error>> + Send + '_;

  /// Activity rows recorded at or after `cutoff`, oldest first.
  fn activity_since(
    &self,
    cutoff: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<ActivityEntry>, Self::Error>> + Send + '_;

  // ── Engine ────────────────────────────────────────────────────────────

  /// Apply an XP grant: rollover, log, achievement check, stat recalc,
  /// committed as one unit. With no profile row this degrades to a
  /// zero-effect event rather than an error.
  fn award_xp(
    &self,
    grant: XpGrant,
  ) -> impl Future<Output = Result<XpEvent, Self::Error>> + Send + '_;

  // ── Oracle chat ───────────────────────────────────────────────────────

  /// Persist a user/oracle message pair and apply `grant`, atomically.
  fn record_chat_turn(
    &self,
    user_text: String,
    reply: OracleReply,
    grant: XpGrant,
  ) -> impl Future<Output = Result<XpEvent, Self::Error>> + Send + '_;

  /// Paginated chat history in chronological order.
  fn chat_history(
    &self,
    limit: usize,
    offset: usize,
  ) -> impl Future<Output = Result<ChatPage, Self::Error>> + Send + '_;

  fn oracle_stats(
    &self,
  ) -> impl Future<Output = Result<OracleStats, Self::Error>> + Send + '_;

  // ── Blog ──────────────────────────────────────────────────────────────

  /// All posts, pinned first, then newest first.
  fn list_posts(
    &self,
  ) -> impl Future<Output = Result<Vec<BlogPost>, Self::Error>> + Send + '_;

  fn get_post(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<BlogPost>, Self::Error>> + Send + '_;

  /// Insert a post and apply `grant`, atomically.
  fn create_post(
    &self,
    input: NewBlogPost,
    grant: XpGrant,
  ) -> impl Future<Output = Result<(BlogPost, XpEvent), Self::Error>> + Send + '_;

  /// Replace a post's editable fields. Returns `None` if the id is unknown.
  fn update_post(
    &self,
    id: i64,
    input: NewBlogPost,
  ) -> impl Future<Output = Result<Option<BlogPost>, Self::Error>> + Send + '_;

  /// Returns `false` if the id is unknown.
  fn delete_post(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── CV analyses ───────────────────────────────────────────────────────

  /// Persist an analysis and apply `grant`, atomically.
  fn record_cv_analysis(
    &self,
    filename: String,
    file_size: i64,
    report: CvReport,
    grant: XpGrant,
  ) -> impl Future<Output = Result<(CvAnalysis, XpEvent), Self::Error>> + Send + '_;

  fn latest_cv_analysis(
    &self,
  ) -> impl Future<Output = Result<Option<CvAnalysis>, Self::Error>> + Send + '_;

  /// All analyses, newest first.
  fn list_cv_analyses(
    &self,
  ) -> impl Future<Output = Result<Vec<CvAnalysis>, Self::Error>> + Send + '_;
}
