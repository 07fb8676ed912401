use crate::config::Config;
use crate::core::form::FormController;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportSettings;
use crate::ui::kiosk::{self, KioskApp};
use std::time::Duration;

/// Open the store and hand the terminal to the kiosk screen.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(&cfg.database)?;
    let form = FormController::new(store, Duration::from_secs(cfg.ack_seconds))?;
    let mut app = KioskApp::new(form, ExportSettings::from_config(cfg), cfg.greeting.clone());

    kiosk::run(&mut app)
}
