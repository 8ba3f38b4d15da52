//! Error types for `devquest-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown skill category: {0:?}")]
  UnknownCategory(String),

  #[error("unknown chat role: {0:?}")]
  UnknownRole(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
