//! Domain models for the bug store.
//!
//! `Bug` is the persisted record; `NewBug` carries the fields of a report
//! that has not been inserted yet and owns the validation rules.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// Maximum length for the free-form text fields.
pub const MAX_FIELD_LEN: usize = 200;

/// Textual formats accepted for a report date, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// A reported bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,
    /// What is broken.
    pub description: String,
    /// Free-form category label.
    pub bug_type: String,
    /// When the bug was reported. Drives recency ordering.
    pub report_date: DateTime<Utc>,
    /// Free-form workflow label, e.g. "In Progress".
    pub status: String,
}

impl Bug {
    /// Whether the report date falls within the last day, inclusive on both
    /// ends. A report date in the future is never recent.
    pub fn was_published_recently(&self) -> bool {
        let now = Utc::now();
        self.report_date <= now && self.report_date >= now - Duration::days(1)
    }
}

/// Fields for a bug that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBug {
    pub description: String,
    pub bug_type: String,
    pub report_date: DateTime<Utc>,
    pub status: String,
}

impl NewBug {
    /// Check all field constraints.
    ///
    /// The store runs this before every insert, so an invalid report is
    /// never persisted. It is public so callers can validate without
    /// touching the database.
    pub fn validate(&self) -> DbResult<()> {
        if self.description.trim().is_empty() {
            return Err(DbError::Validation {
                message: "description must not be empty".to_string(),
            });
        }

        for (field, value) in [
            ("description", &self.description),
            ("bug_type", &self.bug_type),
            ("status", &self.status),
        ] {
            if value.chars().count() > MAX_FIELD_LEN {
                return Err(DbError::Validation {
                    message: format!("{} exceeds {} characters", field, MAX_FIELD_LEN),
                });
            }
        }

        Ok(())
    }
}

/// Parse a report date from user input.
///
/// Accepts `%Y-%m-%d %H:%M:%S`, the HTML `datetime-local` variants with a
/// `T` separator, and a bare date (interpreted as midnight UTC). Anything
/// else is a validation error.
pub fn parse_report_date(raw: &str) -> DbResult<DateTime<Utc>> {
    let raw = raw.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(dt.and_utc());
    }

    Err(DbError::Validation {
        message: format!("invalid report date: '{}'", raw),
    })
}
