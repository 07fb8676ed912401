use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = RecordStore::open(&cfg.database)?;
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("Date", 25),
            Column::new("Operation", 40),
            Column::new("Message", 60),
        ]);

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            table.add_row(vec![e.id.to_string(), e.date, op_target, e.message]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
