use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::visitor::VisitorDraft;
use crate::ui::messages::success;

/// Register one visitor from command-line values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        first_name,
        last_name,
        location,
        email,
        hours,
        minutes,
        notes,
        at,
    } = cmd
    {
        let draft = VisitorDraft {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            location: location.clone(),
            email: email.clone(),
            duration_hours: hours.clone(),
            duration_minutes: minutes.clone(),
            notes: notes.clone(),
        };

        let store = RecordStore::open(&cfg.database)?;
        let record = match at {
            Some(ts) => store.insert_at(&draft, ts)?,
            None => store.insert(&draft)?,
        };
        store.warn_audit_failure();

        success(format!(
            "Visitor #{} saved ({}, {})",
            record.id,
            record.display_name(),
            record.visited_at
        ));
    }

    Ok(())
}
