//! SQLite connection holder. One connection is opened at startup and kept
//! for the process lifetime.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating missing parent folders.
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::StorageUnavailable(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let conn = Connection::open(p)
            .map_err(|e| AppError::StorageUnavailable(format!("cannot open {path}: {e}")))?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Ok(Self { conn })
    }
}
