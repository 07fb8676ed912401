//! The Record Store: sole owner of the `visitors` table.

use crate::db::initialize::ensure_schema;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::visitor::{VisitorDraft, VisitorRecord};
use crate::utils::time::now_localized;
use std::cell::RefCell;

pub struct RecordStore {
    pool: DbPool,
    audit_failure: RefCell<Option<String>>,
}

impl RecordStore {
    /// Open the database at `path` and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let store = Self {
            pool: DbPool::new(path)?,
            audit_failure: RefCell::new(None),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let store = Self {
            pool: DbPool::in_memory()?,
            audit_failure: RefCell::new(None),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Idempotent: existing tables and rows are left untouched.
    pub fn ensure_schema(&self) -> AppResult<()> {
        ensure_schema(&self.pool.conn)
    }

    /// Store the draft with the current localized timestamp.
    pub fn insert(&self, draft: &VisitorDraft) -> AppResult<VisitorRecord> {
        self.insert_at(draft, &now_localized())
    }

    /// Store the draft with a caller-supplied timestamp.
    pub fn insert_at(&self, draft: &VisitorDraft, visited_at: &str) -> AppResult<VisitorRecord> {
        let id = queries::insert_visitor(&self.pool.conn, draft, visited_at)
            .map_err(|e| AppError::Write(format!("cannot save visitor: {e}")))?;

        self.audit("add", &format!("visitor #{id}"), "Visitor saved");
        Ok(VisitorRecord::from_draft(id, draft.clone(), visited_at.to_string()))
    }

    /// All records, oldest first.
    pub fn list_all(&self) -> AppResult<Vec<VisitorRecord>> {
        queries::load_visitors(&self.pool.conn)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<VisitorRecord>> {
        queries::load_visitor(&self.pool.conn, id)
    }

    pub fn count(&self) -> AppResult<usize> {
        queries::count_visitors(&self.pool.conn)
    }

    /// Irreversibly remove every record. Confirmation is the caller's job.
    pub fn delete_all(&self) -> AppResult<usize> {
        let n = queries::delete_all_visitors(&self.pool.conn)
            .map_err(|e| AppError::Write(format!("cannot delete visitors: {e}")))?;

        self.audit("reset", "visitors", &format!("Deleted {n} visitor(s)"));
        Ok(n)
    }

    /// Entry in the internal `log` table. A failure never fails the calling
    /// operation; it is kept as a warning for [`take_audit_failure`](Self::take_audit_failure).
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            *self.audit_failure.borrow_mut() = Some(format!("Failed to write internal log: {e}"));
        }
    }

    /// Pending audit warning, cleared by this call.
    pub fn take_audit_failure(&self) -> Option<String> {
        self.audit_failure.borrow_mut().take()
    }

    /// Print a pending audit warning on the terminal.
    pub fn warn_audit_failure(&self) {
        if let Some(msg) = self.take_audit_failure() {
            crate::ui::messages::warning(msg);
        }
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}
