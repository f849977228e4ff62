//! SQLite implementation of the database traits.

mod bug;
mod connection;

#[cfg(test)]
mod connection_test;

pub use bug::SqliteBugRepository;
pub use connection::SqliteDatabase;
