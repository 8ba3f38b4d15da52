//! Blog post types — simple CRUD entities outside the engine core.
//!
//! Included here because the stat recalculator counts them and post creation
//! grants XP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
  pub id:         i64,
  pub title:      String,
  pub content:    String,
  pub category:   String,
  pub tags:       Vec<String>,
  pub color:      String,
  pub pinned:     bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input to create or update a post. Timestamps are set by the store.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
  pub title:    String,
  pub content:  String,
  pub category: String,
  pub tags:     Vec<String>,
  pub color:    String,
  pub pinned:   bool,
}
