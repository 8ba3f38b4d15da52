//! Chat messages and Oracle reply types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Who authored a chat row. Two rows are written per turn, user then oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
  User,
  Oracle,
}

impl ChatRole {
  /// The string stored in the `role` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::User => "user",
      Self::Oracle => "oracle",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "user" => Ok(Self::User),
      "oracle" => Ok(Self::Oracle),
      other => Err(Error::UnknownRole(other.to_owned())),
    }
  }
}

/// One persisted chat row. Append-only; never edited after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
  pub id:         i64,
  pub role:       ChatRole,
  pub text:       String,
  /// The keyword branch that produced an oracle row; `None` on user rows.
  pub topic:      Option<String>,
  pub created_at: DateTime<Utc>,
}

/// What the Oracle said, and which keyword branch produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleReply {
  pub text:  String,
  pub topic: String,
}

/// One page of chat history, in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPage {
  pub messages: Vec<ChatMessage>,
  pub total:    i64,
  pub has_more: bool,
}

/// Counters for the Oracle stats bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleStats {
  pub messages_sent:   i64,
  pub wisdom_score:    i64,
  /// Distinct non-empty topics across oracle rows.
  pub topics_explored: i64,
  pub oracle_level:    i64,
}
