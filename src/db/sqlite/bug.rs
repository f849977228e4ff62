//! SQLite BugRepository implementation.

use chrono::{NaiveDateTime, SubsecRound};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{Bug, BugRepository, DbError, DbResult, NewBug};

/// Storage format for the report_date column. Lexicographic order on the
/// stored text matches chronological order.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQLx-backed bug repository.
pub struct SqliteBugRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn bug_from_row(row: &SqliteRow) -> DbResult<Bug> {
    let raw_date: String = row.get("report_date");
    let report_date = NaiveDateTime::parse_from_str(&raw_date, DATE_FORMAT)
        .map_err(|e| DbError::Database {
            message: format!("invalid report_date '{}' in row: {}", raw_date, e),
        })?
        .and_utc();

    Ok(Bug {
        id: row.get("id"),
        description: row.get("description"),
        bug_type: row.get("bug_type"),
        report_date,
        status: row.get("status"),
    })
}

impl<'a> BugRepository for SqliteBugRepository<'a> {
    async fn create(&self, bug: &NewBug) -> DbResult<Bug> {
        // Fixed policy: no invalid record is ever persisted.
        bug.validate()?;

        // Truncate to whole seconds so the returned record matches the
        // stored column.
        let report_date = bug.report_date.trunc_subsecs(0);

        let result = sqlx::query(
            "INSERT INTO bug (description, bug_type, report_date, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&bug.description)
        .bind(&bug.bug_type)
        .bind(report_date.format(DATE_FORMAT).to_string())
        .bind(&bug.status)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(Bug {
            id: result.last_insert_rowid(),
            description: bug.description.clone(),
            bug_type: bug.bug_type.clone(),
            report_date,
            status: bug.status.clone(),
        })
    }

    async fn get(&self, id: i64) -> DbResult<Bug> {
        let row = sqlx::query(
            "SELECT id, description, bug_type, report_date, status FROM bug WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Bug".to_string(),
            id: id.to_string(),
        })?;

        bug_from_row(&row)
    }

    async fn list_recent(&self, limit: u32) -> DbResult<Vec<Bug>> {
        let rows = sqlx::query(
            "SELECT id, description, bug_type, report_date, status FROM bug \
             ORDER BY report_date DESC, id DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        rows.iter().map(bug_from_row).collect()
    }
}
