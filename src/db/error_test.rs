//! Tests for database error types.

use crate::db::DbError;

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Bug".to_string(),
        id: "1800".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Bug with id '1800'");
}

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "description exceeds 200 characters".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Validation error: description exceeds 200 characters"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "constraint violation".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: constraint violation");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 0001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 0001"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}
