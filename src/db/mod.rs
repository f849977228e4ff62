//! Storage layer for bug reports.
//!
//! - `error`: storage-agnostic error types
//! - `models`: the `Bug` entity, validation, and the recency check
//! - `repository`: trait definitions for data access
//! - `sqlite`: sqlx-backed SQLite implementation

mod error;
mod models;
mod repository;
mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteBugRepository, SqliteDatabase};
