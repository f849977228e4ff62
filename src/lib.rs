//! A minimal bug tracker: list, detail, and registration views over a
//! single SQLite-backed table.

pub mod db;
pub mod web;
