//! Row encoding/decoding helpers.
//!
//! Timestamps are stored as RFC 3339 strings and list columns as JSON text.
//! `Raw*` structs mirror table rows; they are read inside the connection
//! closure and converted into domain types outside it, where the richer
//! error type is available.

use chrono::{DateTime, NaiveDate, Utc};
use devquest_core::{
  achievement::Achievement,
  activity::ActivityEntry,
  blog::BlogPost,
  chat::{ChatMessage, ChatRole},
  cv::{CvAnalysis, CvReport, SectionScore},
  skill::{Skill, SkillCategory},
};

use crate::error::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse()
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn encode_list(items: &[String]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

pub fn decode_list(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Raw Rows ────────────────────────────────────────────────────────────────

pub struct RawSkill {
  pub skill_id:      String,
  pub name:          String,
  pub category:      String,
  pub category_name: String,
  pub level:         i64,
  pub max_level:     i64,
  pub unlocked:      bool,
  pub description:   String,
  pub color:         String,
  pub projects:      String,
}

impl RawSkill {
  pub fn into_skill(self) -> Result<Skill> {
    let category = SkillCategory::parse(&self.category)?;
    Ok(Skill {
      skill_id: self.skill_id,
      name: self.name,
      category,
      category_name: self.category_name,
      level: self.level,
      max_level: self.max_level,
      unlocked: self.unlocked,
      description: self.description,
      color: self.color,
      projects: decode_list(&self.projects)?,
    })
  }
}

pub struct RawAchievement {
  pub name:        String,
  pub description: String,
  pub icon:        String,
  pub category:    String,
  pub color:       String,
  pub unlocked:    bool,
  pub unlock_date: Option<String>,
}

impl RawAchievement {
  pub fn into_achievement(self) -> Result<Achievement> {
    let unlock_date = self.unlock_date.as_deref().map(decode_date).transpose()?;
    Ok(Achievement {
      name: self.name,
      description: self.description,
      icon: self.icon,
      category: self.category,
      color: self.color,
      unlocked: self.unlocked,
      unlock_date,
    })
  }
}

pub struct RawActivity {
  pub action:      String,
  pub xp_gained:   i64,
  pub description: String,
  pub created_at:  String,
}

impl RawActivity {
  pub fn into_entry(self) -> Result<ActivityEntry> {
    Ok(ActivityEntry {
      action:      self.action,
      xp_gained:   self.xp_gained,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawChatMessage {
  pub id:         i64,
  pub role:       String,
  pub text:       String,
  pub topic:      Option<String>,
  pub created_at: String,
}

impl RawChatMessage {
  pub fn into_message(self) -> Result<ChatMessage> {
    let role = ChatRole::parse(&self.role)?;
    Ok(ChatMessage {
      id: self.id,
      role,
      text: self.text,
      topic: self.topic,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub struct RawBlogPost {
  pub id:         i64,
  pub title:      String,
  pub content:    String,
  pub category:   String,
  pub tags:       String,
  pub color:      String,
  pub pinned:     bool,
  pub created_at: String,
  pub updated_at: String,
}

impl RawBlogPost {
  pub fn into_post(self) -> Result<BlogPost> {
    Ok(BlogPost {
      id:         self.id,
      title:      self.title,
      content:    self.content,
      category:   self.category,
      tags:       decode_list(&self.tags)?,
      color:      self.color,
      pinned:     self.pinned,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

pub struct RawCvAnalysis {
  pub id:         i64,
  pub filename:   String,
  pub file_size:  i64,
  pub score:      i64,
  pub sections:   String,
  pub strengths:  String,
  pub weaknesses: String,
  pub tips:       String,
  pub created_at: String,
}

impl RawCvAnalysis {
  pub fn into_analysis(self) -> Result<CvAnalysis> {
    let sections: Vec<SectionScore> = serde_json::from_str(&self.sections)?;
    Ok(CvAnalysis {
      id:        self.id,
      filename:  self.filename,
      file_size: self.file_size,
      report: CvReport {
        score: self.score,
        sections,
        strengths: decode_list(&self.strengths)?,
        weaknesses: decode_list(&self.weaknesses)?,
        tips: decode_list(&self.tips)?,
      },
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
