//! Form State Controller: draft values, the reset confirmation gate, the
//! saved acknowledgment and the snapshot shown in the list and exported.

use crate::core::ack::Acknowledgment;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ExportReport, ExportSettings};
use crate::models::field::Field;
use crate::models::visitor::{VisitorDraft, VisitorRecord};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Reset confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetState {
    Idle,
    ConfirmPending,
}

/// Immutable picture of the controller handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub draft: VisitorDraft,
    pub records: Vec<VisitorRecord>,
    pub reset: ResetState,
    pub saved_ack: bool,
    pub last_error: Option<String>,
}

pub struct FormController {
    store: RecordStore,
    draft: VisitorDraft,
    snapshot: Vec<VisitorRecord>,
    reset: ResetState,
    ack: Acknowledgment,
    last_error: Option<String>,
}

impl FormController {
    /// Make sure the schema exists and load the initial snapshot.
    pub fn new(store: RecordStore, ack_delay: Duration) -> AppResult<Self> {
        store.ensure_schema()?;
        let mut ctl = Self {
            store,
            draft: VisitorDraft::default(),
            snapshot: Vec::new(),
            reset: ResetState::Idle,
            ack: Acknowledgment::new(ack_delay),
            last_error: None,
        };
        ctl.refresh()?;
        Ok(ctl)
    }

    // ============ Draft ============

    pub fn draft(&self) -> &VisitorDraft {
        &self.draft
    }

    pub fn field(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.draft.get_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.draft.get_mut(field).pop();
    }

    // ============ Save ============

    /// Insert the draft, clear it and show the acknowledgment.
    ///
    /// On a failed insert the draft is kept for a retry and the current
    /// snapshot stays as it is.
    pub fn save(&mut self, now: Instant) -> AppResult<VisitorRecord> {
        let record = match self.store.insert(&self.draft) {
            Ok(r) => r,
            Err(e) => return Err(self.fail(e)),
        };

        self.draft.clear();
        self.ack.start(now);
        self.last_error = self.store.take_audit_failure();

        if let Err(e) = self.refresh() {
            // the row is stored; show it even though the reload failed
            self.snapshot.push(record.clone());
            return Err(self.fail(e));
        }
        Ok(record)
    }

    pub fn ack_visible(&self, now: Instant) -> bool {
        self.ack.is_visible(now)
    }

    pub fn ack_time_left(&self, now: Instant) -> Option<Duration> {
        self.ack.time_left(now)
    }

    /// Advance timers. Returns true when something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.ack.expire(now)
    }

    // ============ Reset ============

    pub fn reset_state(&self) -> ResetState {
        self.reset
    }

    pub fn request_reset(&mut self) {
        self.reset = ResetState::ConfirmPending;
    }

    pub fn cancel_reset(&mut self) {
        self.reset = ResetState::Idle;
    }

    /// Delete every record, but only after [`request_reset`](Self::request_reset).
    /// Returns the number of deleted rows, or `None` when no reset was pending.
    pub fn confirm_reset(&mut self) -> AppResult<Option<usize>> {
        if self.reset != ResetState::ConfirmPending {
            return Ok(None);
        }
        self.reset = ResetState::Idle;

        let n = match self.store.delete_all() {
            Ok(n) => n,
            Err(e) => return Err(self.fail(e)),
        };
        self.last_error = self.store.take_audit_failure();

        if let Err(e) = self.refresh() {
            self.snapshot.clear();
            return Err(self.fail(e));
        }
        Ok(Some(n))
    }

    // ============ Snapshot ============

    /// Reload all records from the store.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.snapshot = self.store.list_all()?;
        Ok(())
    }

    pub fn records(&self) -> &[VisitorRecord] {
        &self.snapshot
    }

    // ============ Export ============

    /// Export the current snapshot.
    pub fn export(&mut self, settings: &ExportSettings) -> AppResult<ExportReport> {
        match ExportLogic::export_and_share(&self.snapshot, settings) {
            Ok(report) => {
                self.store.audit(
                    "export",
                    &report.path.to_string_lossy(),
                    &format!("Exported {} visitor(s)", report.records),
                );
                self.last_error = self.store.take_audit_failure();
                Ok(report)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ============ Errors / view ============

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, e: AppError) -> AppError {
        self.last_error = Some(e.to_string());
        e
    }

    pub fn view(&self, now: Instant) -> FormView {
        FormView {
            draft: self.draft.clone(),
            records: self.snapshot.clone(),
            reset: self.reset,
            saved_ack: self.ack.is_visible(now),
            last_error: self.last_error.clone(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
