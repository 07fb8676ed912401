use crate::errors::AppResult;
use crate::models::visitor::{VisitorDraft, VisitorRecord};
use rusqlite::{Connection, Row, params};

const SELECT_VISITORS: &str = "SELECT id, first_name, last_name, location, email, date_time, \
     duration_hours, duration_minutes, notes FROM visitors";

/// Mapping DB → VisitorRecord (reused by every visitor query).
pub fn map_row(row: &Row<'_>) -> rusqlite::Result<VisitorRecord> {
    Ok(VisitorRecord {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        location: row.get("location")?,
        email: row.get("email")?,
        visited_at: row.get("date_time")?,
        duration_hours: row.get("duration_hours")?,
        duration_minutes: row.get("duration_minutes")?,
        notes: row.get("notes")?,
    })
}

/// Insert one visitor and return the id SQLite assigned to it.
pub fn insert_visitor(conn: &Connection, draft: &VisitorDraft, visited_at: &str) -> rusqlite::Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO visitors (first_name, last_name, location, email, date_time, duration_hours, duration_minutes, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    stmt.execute(params![
        draft.first_name,
        draft.last_name,
        draft.location,
        draft.email,
        visited_at,
        draft.duration_hours,
        draft.duration_minutes,
        draft.notes,
    ])?;
    Ok(conn.last_insert_rowid())
}

/// All visitors in insertion order.
pub fn load_visitors(conn: &Connection) -> AppResult<Vec<VisitorRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_VISITORS} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_visitor(conn: &Connection, id: i64) -> AppResult<Option<VisitorRecord>> {
    use rusqlite::OptionalExtension;

    let mut stmt = conn.prepare_cached(&format!("{SELECT_VISITORS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn count_visitors(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM visitors", [], |row| row.get(0))?;
    Ok(n as usize)
}

/// Remove every visitor. Returns the number of deleted rows.
pub fn delete_all_visitors(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM visitors", [])
}
