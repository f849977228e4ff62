//! Bug view handlers.
//!
//! One explicit handler per route: list, detail, and the two halves of the
//! registration flow. Each talks to the store through the injected
//! [`Database`] and renders through [`pages`].

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::db::{BugRepository, Database, DbError, NewBug, parse_report_date};
use crate::web::pages;
use crate::web::state::AppState;

/// How many bugs the front page shows.
pub const RECENT_BUGS_LIMIT: u32 = 5;

type PageError = (StatusCode, Html<String>);

fn internal_error(err: DbError) -> PageError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(pages::error_page("Internal server error", &err.to_string())),
    )
}

fn validation_error(err: DbError) -> PageError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(pages::error_page("Invalid bug report", &err.to_string())),
    )
}

/// List the most recent bugs, newest first.
#[instrument(skip(state))]
pub async fn list_bugs<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Html<String>, PageError> {
    let bugs = state
        .db()
        .bugs()
        .list_recent(RECENT_BUGS_LIMIT)
        .await
        .map_err(internal_error)?;

    Ok(Html(pages::bug_list(&bugs)))
}

/// Show one bug; unknown ids get a 404 page.
#[instrument(skip(state))]
pub async fn bug_detail<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let bug = state.db().bugs().get(id).await.map_err(|err| match err {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Html(pages::error_page(
                "Bug not found",
                &format!("No bug with id {}", id),
            )),
        ),
        other => internal_error(other),
    })?;

    Ok(Html(pages::bug_detail(&bug)))
}

/// Render the empty registration form.
#[instrument]
pub async fn register_form() -> Html<String> {
    Html(pages::register_form())
}

/// Form body for bug registration. Absent fields fall back to defaults.
#[derive(Debug, Deserialize)]
pub struct RegisterBugForm {
    pub description: Option<String>,
    pub bug_type: Option<String>,
    pub report_date: Option<String>,
    pub status: Option<String>,
}

/// Persist a new bug and redirect to the list.
///
/// A missing or blank report date defaults to now; a missing description is
/// a validation failure. Validation runs before the insert, so a rejected
/// report never reaches the table.
#[instrument(skip(state))]
pub async fn register_submit<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<RegisterBugForm>,
) -> Result<Redirect, PageError> {
    let report_date = match form.report_date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => parse_report_date(raw).map_err(validation_error)?,
        None => Utc::now(),
    };

    let new_bug = NewBug {
        description: form.description.unwrap_or_default(),
        bug_type: form.bug_type.unwrap_or_default(),
        report_date,
        status: form.status.unwrap_or_default(),
    };

    state
        .db()
        .bugs()
        .create(&new_bug)
        .await
        .map_err(|err| match err {
            DbError::Validation { .. } => validation_error(err),
            other => internal_error(other),
        })?;

    Ok(Redirect::to("/"))
}
