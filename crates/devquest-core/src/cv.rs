//! CV analysis types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored section of a CV report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
  pub name:     String,
  pub score:    i64,
  pub feedback: String,
}

/// The analyzer output, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvReport {
  pub score:      i64,
  pub sections:   Vec<SectionScore>,
  pub strengths:  Vec<String>,
  pub weaknesses: Vec<String>,
  pub tips:       Vec<String>,
}

/// A persisted analysis row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvAnalysis {
  pub id:         i64,
  pub filename:   String,
  #[serde(rename = "size")]
  pub file_size:  i64,
  #[serde(flatten)]
  pub report:     CvReport,
  pub created_at: DateTime<Utc>,
}
