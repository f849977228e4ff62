//! Web route configuration.
//!
//! Static segments take priority over the `/{id}` capture, so
//! `/register-bug` and `/health` never collide with detail lookups.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::state::AppState;
use crate::db::Database;

/// Create the router for the bug tracker.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(handlers::list_bugs::<D>))
        .route("/health", get(handlers::health))
        .route(
            "/register-bug",
            get(handlers::register_form).post(handlers::register_submit::<D>),
        )
        .route("/{id}", get(handlers::bug_detail::<D>))
        .with_state(state)
}
