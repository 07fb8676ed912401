//! Kiosk state (Model)

use crate::core::form::{FormController, ResetState};
use crate::export::ExportSettings;
use crate::models::field::Field;

/// Which surface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KioskMode {
    Form,
    ConfirmReset,
}

pub struct KioskApp {
    pub form: FormController,
    pub focus: Field,
    pub export: ExportSettings,
    pub greeting: String,
    /// Status line: last export result or error.
    pub message: Option<String>,
}

impl KioskApp {
    pub fn new(form: FormController, export: ExportSettings, greeting: String) -> Self {
        Self {
            form,
            focus: Field::FirstName,
            export,
            greeting,
            message: None,
        }
    }

    pub fn mode(&self) -> KioskMode {
        match self.form.reset_state() {
            ResetState::Idle => KioskMode::Form,
            ResetState::ConfirmPending => KioskMode::ConfirmReset,
        }
    }
}
