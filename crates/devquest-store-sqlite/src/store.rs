//! [`SqliteStore`] — the SQLite implementation of [`GameStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use devquest_core::{
  achievement::Achievement,
  activity::{ActivityEntry, XpGrant},
  blog::{BlogPost, NewBlogPost},
  chat::{ChatPage, OracleReply, OracleStats},
  cv::{CvAnalysis, CvReport},
  engine::XpEvent,
  profile::PlayerProfile,
  skill::Skill,
  store::GameStore,
};
use rusqlite::{OptionalExtension as _, params};

use crate::{
  Error, Result,
  encode::{
    RawAchievement, RawActivity, RawBlogPost, RawChatMessage, RawCvAnalysis,
    RawSkill, encode_dt, encode_list,
  },
  engine,
  schema::SCHEMA,
  seed,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Ceiling for caller-supplied page sizes and offsets. Keeps the
/// `usize -> i64` casts in the list queries lossless and bounds result sets
/// against absurd query parameters.
const MAX_PAGE: usize = 500;

/// A DevQuest store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Seed the initial data set unless a profile row already exists.
  pub async fn seed_if_empty(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        seed::seed_tx(&tx)?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── GameStore impl ──────────────────────────────────────────────────────────

impl GameStore for SqliteStore {
  type Error = Error;

  async fn profile(&self) -> Result<Option<PlayerProfile>> {
    let profile = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        let profile = engine::load_profile_tx(&tx)?;
        tx.commit()?;
        Ok(profile)
      })
      .await?;
    Ok(profile)
  }

  async fn skills(&self) -> Result<Vec<Skill>> {
    let raw = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT skill_id, name, category, category_name, level, max_level,
                  unlocked, description, color, projects
           FROM skills ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSkill {
              skill_id:      row.get(0)?,
              name:          row.get(1)?,
              category:      row.get(2)?,
              category_name: row.get(3)?,
              level:         row.get(4)?,
              max_level:     row.get(5)?,
              unlocked:      row.get(6)?,
              description:   row.get(7)?,
              color:         row.get(8)?,
              projects:      row.get(9)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawSkill::into_skill).collect()
  }

  async fn achievements(&self) -> Result<Vec<Achievement>> {
    let raw = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT name, description, icon, category, color, unlocked,
                  unlock_date
           FROM achievements ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawAchievement {
              name:        row.get(0)?,
              description: row.get(1)?,
              icon:        row.get(2)?,
              category:    row.get(3)?,
              color:       row.get(4)?,
              unlocked:    row.get(5)?,
              unlock_date: row.get(6)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawAchievement::into_achievement).collect()
  }

  async fn activity_log(&self, limit: usize) -> Result<Vec<ActivityEntry>> {
    let limit = limit.min(MAX_PAGE);
    let raw = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT action, xp_gained, description, created_at
           FROM activity_log ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(params![limit as i64], |row| {
            Ok(RawActivity {
              action:      row.get(0)?,
              xp_gained:   row.get(1)?,
              description: row.get(2)?,
              created_at:  row.get(3)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawActivity::into_entry).collect()
  }

  async fn activity_since(
    &self,
    cutoff: DateTime<Utc>,
  ) -> Result<Vec<ActivityEntry>> {
    let cutoff = encode_dt(cutoff);
    let raw = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT action, xp_gained, description, created_at
           FROM activity_log WHERE created_at >= ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(params![cutoff], |row| {
            Ok(RawActivity {
              action:      row.get(0)?,
              xp_gained:   row.get(1)?,
              description: row.get(2)?,
              created_at:  row.get(3)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawActivity::into_entry).collect()
  }

  async fn award_xp(&self, grant: XpGrant) -> Result<XpEvent> {
    let event = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let event = engine::award_xp_tx(&tx, &grant)?;
        tx.commit()?;
        Ok(event)
      })
      .await?;
    Ok(event)
  }

  async fn record_chat_turn(
    &self,
    user_text: String,
    reply: OracleReply,
    grant: XpGrant,
  ) -> Result<XpEvent> {
    let event = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let now = Utc::now().to_rfc3339();
        tx.execute(
          "INSERT INTO chat_messages (role, text, topic, created_at)
           VALUES ('user', ?1, NULL, ?2)",
          params![user_text, now],
        )?;
        tx.execute(
          "INSERT INTO chat_messages (role, text, topic, created_at)
           VALUES ('oracle', ?1, ?2, ?3)",
          params![reply.text, reply.topic, now],
        )?;
        let event = engine::award_xp_tx(&tx, &grant)?;
        tx.commit()?;
        Ok(event)
      })
      .await?;
    Ok(event)
  }

  async fn chat_history(&self, limit: usize, offset: usize) -> Result<ChatPage> {
    let limit = limit.min(MAX_PAGE);
    // Offsets past any realistic history still page correctly; the clamp
    // only keeps the cast below lossless.
    let offset = offset.min(i64::MAX as usize);
    let (raw, total) = self
      .conn
      .call(move |conn| {
        let total: i64 =
          conn.query_row("SELECT COUNT(*) FROM chat_messages", [], |r| {
            r.get(0)
          })?;
        let mut stmt = conn.prepare(
          "SELECT id, role, text, topic, created_at
           FROM chat_messages ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt
          .query_map(params![limit as i64, offset as i64], |row| {
            Ok(RawChatMessage {
              id:         row.get(0)?,
              role:       row.get(1)?,
              text:       row.get(2)?,
              topic:      row.get(3)?,
              created_at: row.get(4)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok((rows, total))
      })
      .await?;

    let messages = raw
      .into_iter()
      .map(RawChatMessage::into_message)
      .collect::<Result<Vec<_>>>()?;

    Ok(ChatPage {
      messages,
      total,
      has_more: (offset as i64).saturating_add(limit as i64) < total,
    })
  }

  async fn oracle_stats(&self) -> Result<OracleStats> {
    let (messages_sent, topics_explored, wisdom_score) = self
      .conn
      .call(|conn| {
        let messages_sent: i64 = conn.query_row(
          "SELECT COUNT(*) FROM chat_messages WHERE role = 'user'",
          [],
          |r| r.get(0),
        )?;
        let topics_explored: i64 = conn.query_row(
          "SELECT COUNT(DISTINCT topic) FROM chat_messages
           WHERE role = 'oracle' AND topic IS NOT NULL AND topic != ''",
          [],
          |r| r.get(0),
        )?;
        let wisdom_score: Option<i64> = conn
          .query_row(
            "SELECT wisdom FROM player_profile WHERE id = 1",
            [],
            |r| r.get(0),
          )
          .optional()?;
        Ok((messages_sent, topics_explored, wisdom_score.unwrap_or(70)))
      })
      .await?;

    Ok(OracleStats {
      messages_sent,
      wisdom_score,
      topics_explored,
      oracle_level: devquest_core::engine::oracle_level(messages_sent),
    })
  }

  async fn list_posts(&self) -> Result<Vec<BlogPost>> {
    let raw = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, title, content, category, tags, color, pinned,
                  created_at, updated_at
           FROM blog_posts ORDER BY pinned DESC, created_at DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawBlogPost {
              id:         row.get(0)?,
              title:      row.get(1)?,
              content:    row.get(2)?,
              category:   row.get(3)?,
              tags:       row.get(4)?,
              color:      row.get(5)?,
              pinned:     row.get(6)?,
              created_at: row.get(7)?,
              updated_at: row.get(8)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawBlogPost::into_post).collect()
  }

  async fn get_post(&self, id: i64) -> Result<Option<BlogPost>> {
    let raw = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            "SELECT id, title, content, category, tags, color, pinned,
                    created_at, updated_at
             FROM blog_posts WHERE id = ?1",
            params![id],
            |row| {
              Ok(RawBlogPost {
                id:         row.get(0)?,
                title:      row.get(1)?,
                content:    row.get(2)?,
                category:   row.get(3)?,
                tags:       row.get(4)?,
                color:      row.get(5)?,
                pinned:     row.get(6)?,
                created_at: row.get(7)?,
                updated_at: row.get(8)?,
              })
            },
          )
          .optional()?;
        Ok(row)
      })
      .await?;

    raw.map(RawBlogPost::into_post).transpose()
  }

  async fn create_post(
    &self,
    input: NewBlogPost,
    grant: XpGrant,
  ) -> Result<(BlogPost, XpEvent)> {
    let tags = encode_list(&input.tags)?;
    let row = input.clone();
    let (id, now, event) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let now = Utc::now();
        tx.execute(
          "INSERT INTO blog_posts
             (title, content, category, tags, color, pinned,
              created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
          params![
            row.title,
            row.content,
            row.category,
            tags,
            row.color,
            row.pinned,
            encode_dt(now)
          ],
        )?;
        let id = tx.last_insert_rowid();
        let event = engine::award_xp_tx(&tx, &grant)?;
        tx.commit()?;
        Ok((id, now, event))
      })
      .await?;

    // Built from the input; the row just written is identical.
    let post = BlogPost {
      id,
      title: input.title,
      content: input.content,
      category: input.category,
      tags: input.tags,
      color: input.color,
      pinned: input.pinned,
      created_at: now,
      updated_at: now,
    };
    Ok((post, event))
  }

  async fn update_post(
    &self,
    id: i64,
    input: NewBlogPost,
  ) -> Result<Option<BlogPost>> {
    let tags = encode_list(&input.tags)?;
    let changed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE blog_posts SET
             title = ?1, content = ?2, category = ?3, tags = ?4,
             color = ?5, pinned = ?6, updated_at = ?7
           WHERE id = ?8",
          params![
            input.title,
            input.content,
            input.category,
            tags,
            input.color,
            input.pinned,
            encode_dt(Utc::now()),
            id
          ],
        )?;
        Ok(changed)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }
    self.get_post(id).await
  }

  async fn delete_post(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let deleted =
          conn.execute("DELETE FROM blog_posts WHERE id = ?1", params![id])?;
        Ok(deleted)
      })
      .await?;
    Ok(deleted > 0)
  }

  async fn record_cv_analysis(
    &self,
    filename: String,
    file_size: i64,
    report: CvReport,
    grant: XpGrant,
  ) -> Result<(CvAnalysis, XpEvent)> {
    let sections = serde_json::to_string(&report.sections)?;
    let strengths = encode_list(&report.strengths)?;
    let weaknesses = encode_list(&report.weaknesses)?;
    let tips = encode_list(&report.tips)?;
    let score = report.score;

    let row_filename = filename.clone();
    let (id, now, event) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let now = Utc::now();
        tx.execute(
          "INSERT INTO cv_analyses
             (filename, file_size, score, sections, strengths, weaknesses,
              tips, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          params![
            row_filename,
            file_size,
            score,
            sections,
            strengths,
            weaknesses,
            tips,
            encode_dt(now)
          ],
        )?;
        let id = tx.last_insert_rowid();
        let event = engine::award_xp_tx(&tx, &grant)?;
        tx.commit()?;
        Ok((id, now, event))
      })
      .await?;

    let analysis = CvAnalysis {
      id,
      filename,
      file_size,
      report,
      created_at: now,
    };
    Ok((analysis, event))
  }

  async fn latest_cv_analysis(&self) -> Result<Option<CvAnalysis>> {
    let raw = self
      .conn
      .call(|conn| {
        let row = conn
          .query_row(
            "SELECT id, filename, file_size, score, sections, strengths,
                    weaknesses, tips, created_at
             FROM cv_analyses ORDER BY id DESC LIMIT 1",
            [],
            cv_row,
          )
          .optional()?;
        Ok(row)
      })
      .await?;

    raw.map(RawCvAnalysis::into_analysis).transpose()
  }

  async fn list_cv_analyses(&self) -> Result<Vec<CvAnalysis>> {
    let raw = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, filename, file_size, score, sections, strengths,
                  weaknesses, tips, created_at
           FROM cv_analyses ORDER BY id DESC",
        )?;
        let rows = stmt
          .query_map([], cv_row)?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raw.into_iter().map(RawCvAnalysis::into_analysis).collect()
  }
}

fn cv_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawCvAnalysis> {
  Ok(RawCvAnalysis {
    id:         row.get(0)?,
    filename:   row.get(1)?,
    file_size:  row.get(2)?,
    score:      row.get(3)?,
    sections:   row.get(4)?,
    strengths:  row.get(5)?,
    weaknesses: row.get(6)?,
    tips:       row.get(7)?,
    created_at: row.get(8)?,
  })
}
