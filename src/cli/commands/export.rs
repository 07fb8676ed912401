use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::FormController;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::{ExportSettings, ShareMode, notify_export};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { dir, no_share } = cmd {
        let mut settings = ExportSettings::from_config(cfg);
        if let Some(d) = dir {
            settings.dir = expand_tilde(d);
        }
        if *no_share {
            settings.share = ShareMode::Disabled;
        }

        let store = RecordStore::open(&cfg.database)?;
        let mut form = FormController::new(store, Duration::from_secs(cfg.ack_seconds))?;
        let report = form.export(&settings)?;
        notify_export(&report);
        if let Some(w) = form.last_error() {
            warning(w);
        }
    }
    Ok(())
}
