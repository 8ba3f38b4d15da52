//! SQLite backend for the DevQuest store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Every XP-granting write opens one
//! `rusqlite` transaction and runs the whole engine pass inside it.

mod encode;
mod engine;
mod schema;
mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
