//! Mock AI review of a GitHub repository.

use serde::Serialize;

/// Per-dimension scores for a repo review.
#[derive(Debug, Clone, Serialize)]
pub struct RepoMetrics {
  pub code_quality:  i64,
  pub documentation: i64,
  pub testing:       i64,
  pub architecture:  i64,
  pub security:      i64,
}

/// The full mock review payload.
#[derive(Debug, Clone, Serialize)]
pub struct RepoReview {
  pub repo:          String,
  pub score:         i64,
  pub strengths:     Vec<String>,
  pub improvements:  Vec<String>,
  pub summary:       String,
  pub metrics:       RepoMetrics,
  pub category_tags: Vec<String>,
}

/// Produce the fixed mock review for `full_name` (e.g. `"owner/repo"`).
pub fn analyze_repo(full_name: &str) -> RepoReview {
  RepoReview {
    repo:          full_name.to_string(),
    score:         85,
    strengths:     vec![
      "Clean code structure".to_string(),
      "Good documentation".to_string(),
      "Active development".to_string(),
    ],
    improvements:  vec![
      "Add more tests".to_string(),
      "Consider CI/CD pipeline".to_string(),
      "Add error handling".to_string(),
    ],
    summary:       format!(
      "Project '{full_name}' shows strong development practices."
    ),
    metrics:       RepoMetrics {
      code_quality:  88,
      documentation: 72,
      testing:       45,
      architecture:  82,
      security:      68,
    },
    category_tags: vec![
      "well-structured".to_string(),
      "needs-tests".to_string(),
      "active".to_string(),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn review_names_the_repo() {
    let review = analyze_repo("HiRenan/DevQuest");
    assert_eq!(review.repo, "HiRenan/DevQuest");
    assert!(review.summary.contains("HiRenan/DevQuest"));
  }
}
