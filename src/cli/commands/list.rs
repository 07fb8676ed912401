use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::visitor::VisitorRecord;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let visitors = store.list_all()?;

        if *json {
            let out = serde_json::to_string_pretty(&visitors)?;
            println!("{out}");
            return Ok(());
        }

        if visitors.is_empty() {
            info("No visitors registered yet.");
            return Ok(());
        }

        print!("{}", render_table(&visitors));
        println!("\n{} visitor(s)", visitors.len());
    }
    Ok(())
}

fn render_table(visitors: &[VisitorRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Date/Time", 20),
        Column::new("Name", 28),
        Column::new("Location", 20),
        Column::new("Email", 28),
        Column::new("Duration", 10),
        Column::new("Notes", 30),
    ]);

    for v in visitors {
        table.add_row(vec![
            v.id.to_string(),
            v.visited_at.clone(),
            v.display_name(),
            v.location.clone(),
            v.email.clone(),
            v.display_duration(),
            v.notes.replace('\n', " "),
        ]);
    }

    table.render()
}
