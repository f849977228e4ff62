//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the web layer. Methods
//! return `impl Future + Send` so handlers generic over [`Database`]
//! satisfy axum's bounds.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Bug, NewBug},
};

/// Repository for Bug operations.
pub trait BugRepository {
    /// Validate and insert a new bug, returning the persisted record with
    /// its assigned id.
    fn create(&self, bug: &NewBug) -> impl Future<Output = DbResult<Bug>> + Send;

    /// Get a bug by id. A missing id yields `DbError::NotFound`.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Bug>> + Send;

    /// The most recently reported bugs, newest first, truncated to `limit`.
    fn list_recent(&self, limit: u32) -> impl Future<Output = DbResult<Vec<Bug>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    /// Concrete repository type handed out by [`Database::bugs`].
    type Bugs<'a>: BugRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the bug repository.
    fn bugs(&self) -> Self::Bugs<'_>;
}
