//! Tests for SQLite connection and migration management.

use chrono::Utc;

use crate::db::{BugRepository, Database, NewBug, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn in_memory_database_migrates() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.expect("Migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db.migrate().await.expect("Re-running migrations should be a no-op");
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bugtrack.db");

    let created_id = {
        let db = SqliteDatabase::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        db.bugs()
            .create(&NewBug {
                description: "Persists across reopen".to_string(),
                bug_type: "storage".to_string(),
                report_date: Utc::now(),
                status: "Not Done".to_string(),
            })
            .await
            .unwrap()
            .id
    };

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();
    let bug = db.bugs().get(created_id).await.unwrap();
    assert_eq!(bug.description, "Persists across reopen");
}
