use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Create the `visitors` and `log` tables if they do not exist yet.
/// Safe to call on every startup.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS visitors (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name       TEXT NOT NULL DEFAULT '',
            last_name        TEXT NOT NULL DEFAULT '',
            location         TEXT NOT NULL DEFAULT '',
            email            TEXT NOT NULL DEFAULT '',
            date_time        TEXT NOT NULL DEFAULT '',
            duration_hours   TEXT NOT NULL DEFAULT '',
            duration_minutes TEXT NOT NULL DEFAULT '',
            notes            TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
    .map_err(|e| AppError::StorageUnavailable(format!("cannot create schema: {e}")))?;
    Ok(())
}
