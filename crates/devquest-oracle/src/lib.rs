//! Mock-AI functions for DevQuest: the keyword-matched Oracle chatbot, the
//! deterministic CV analyzer, the repo review stub, and the weekly summary.
//!
//! Everything here is a pure function — same inputs, same outputs, no I/O.
//! Placeholder for a future LLM integration; the HTTP layer serialises the
//! results verbatim.

mod chat;
mod cv;
mod repo;
mod summary;

pub use chat::oracle_chat;
pub use cv::analyze_cv;
pub use repo::{RepoMetrics, RepoReview, analyze_repo};
pub use summary::{WeeklySummary, weekly_summary};
