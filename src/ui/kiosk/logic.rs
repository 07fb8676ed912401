//! Dispatch (Update)

use std::time::Instant;

use super::actions::Action;
use super::state::KioskApp;
use crate::export::ShareStatus;
use crate::models::field::Field;

impl KioskApp {
    /// Apply an action. Returns true when the kiosk should close.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextField => self.focus = self.focus.next(),
            Action::PrevField => self.focus = self.focus.prev(),

            Action::Input(c) => self.form.push_char(self.focus, c),
            Action::DeleteChar => self.form.pop_char(self.focus),

            Action::Save => self.save(now),
            Action::Export => self.export(),

            Action::RequestReset => self.form.request_reset(),
            Action::CancelReset => self.form.cancel_reset(),
            Action::ConfirmReset => self.confirm_reset(),
        }
        false
    }

    fn save(&mut self, now: Instant) {
        match self.form.save(now) {
            Ok(_) => {
                self.focus = Field::FirstName;
                self.message = self.form.last_error().map(|w| format!("⚠️ {w}"));
            }
            Err(e) => self.message = Some(format!("❌ {e}")),
        }
    }

    fn export(&mut self) {
        self.message = Some(match self.form.export(&self.export) {
            Ok(report) => self.with_warning(match report.share {
                ShareStatus::Failed(e) => format!(
                    "⚠️ {} gespeichert, Teilen fehlgeschlagen: {e}",
                    report.path.display()
                ),
                _ => format!(
                    "✅ {} Einträge exportiert: {}",
                    report.records,
                    report.path.display()
                ),
            }),
            Err(e) => format!("❌ {e}"),
        });
    }

    fn confirm_reset(&mut self) {
        self.message = match self.form.confirm_reset() {
            Ok(Some(n)) => Some(self.with_warning(format!("🚮 {n} Einträge gelöscht"))),
            Ok(None) => None,
            Err(e) => Some(format!("❌ {e}")),
        };
    }

    /// Append a warning left behind by a successful operation.
    fn with_warning(&self, msg: String) -> String {
        match self.form.last_error() {
            Some(w) => format!("{msg} (⚠️ {w})"),
            None => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormController;
    use crate::db::store::RecordStore;
    use crate::export::{ExportSettings, ShareMode};
    use crate::ui::kiosk::state::KioskMode;
    use std::time::Duration;

    fn app() -> KioskApp {
        let store = RecordStore::open_in_memory().unwrap();
        let form = FormController::new(store, Duration::from_secs(10)).unwrap();
        let export = ExportSettings {
            dir: std::env::temp_dir().join("visitor_kiosk_logic_test"),
            file_name: "Besucher_DEW.csv".into(),
            share: ShareMode::Disabled,
        };
        KioskApp::new(form, export, String::new())
    }

    #[test]
    fn typing_fills_focused_field_and_save_resets_focus() {
        let mut app = app();
        let now = Instant::now();
        for c in "Anna".chars() {
            app.dispatch(Action::Input(c), now);
        }
        app.dispatch(Action::NextField, now);
        app.dispatch(Action::Input('M'), now);
        assert_eq!(app.form.field(Field::FirstName), "Anna");
        assert_eq!(app.form.field(Field::LastName), "M");

        app.dispatch(Action::Save, now);
        assert_eq!(app.focus, Field::FirstName);
        assert_eq!(app.form.records().len(), 1);
        assert!(app.form.draft().is_empty());
    }

    #[test]
    fn reset_dialog_switches_mode() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::Save, now);
        app.dispatch(Action::RequestReset, now);
        assert_eq!(app.mode(), KioskMode::ConfirmReset);

        app.dispatch(Action::CancelReset, now);
        assert_eq!(app.mode(), KioskMode::Form);
        assert_eq!(app.form.records().len(), 1);

        app.dispatch(Action::RequestReset, now);
        app.dispatch(Action::ConfirmReset, now);
        assert_eq!(app.mode(), KioskMode::Form);
        assert!(app.form.records().is_empty());
    }

    #[test]
    fn audit_failure_shows_as_warning_after_save() {
        let mut app = app();
        app.form
            .store()
            .conn()
            .execute("DROP TABLE log", [])
            .unwrap();

        app.dispatch(Action::Input('A'), Instant::now());
        app.dispatch(Action::Save, Instant::now());

        assert_eq!(app.form.records().len(), 1);
        let msg = app.message.as_deref().unwrap_or_default();
        assert!(msg.contains("internal log"), "{msg}");
    }

    #[test]
    fn quit_closes() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit, Instant::now()));
    }
}
