use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::FormController;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use std::time::Duration;

/// Delete every visitor, behind the same two-step gate as the kiosk.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let mut form = FormController::new(store, Duration::from_secs(cfg.ack_seconds))?;

        form.request_reset();
        let prompt = format!(
            "Delete ALL {} visitor(s)? This action is irreversible.",
            form.records().len()
        );

        if !*yes && !confirm(prompt) {
            form.cancel_reset();
            info("Operation cancelled.");
            return Ok(());
        }

        if let Some(n) = form.confirm_reset()? {
            success(format!("{n} visitor(s) deleted."));
        }
        if let Some(w) = form.last_error() {
            warning(w);
        }
    }
    Ok(())
}
