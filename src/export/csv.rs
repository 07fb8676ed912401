use crate::errors::{AppError, AppResult};
use crate::models::visitor::VisitorRecord;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

/// Serialize visitors as headerless CSV, one line per record.
///
/// Column order: first name, last name, location, email, visit time, hours,
/// minutes, notes. Fields are written verbatim: embedded commas, quotes or
/// newlines are not escaped, and there is no trailing newline.
pub fn to_csv(records: &[VisitorRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for v in records {
        wtr.write_record([
            &v.first_name,
            &v.last_name,
            &v.location,
            &v.email,
            &v.visited_at,
            &v.duration_hours,
            &v.duration_minutes,
            &v.notes,
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    let mut out = String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))?;

    // records are joined by newlines, not terminated by them
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> VisitorRecord {
        VisitorRecord {
            id: 1,
            first_name: "Anna".into(),
            last_name: "Muller".into(),
            location: "Wildeshausen".into(),
            email: "a@b.de".into(),
            visited_at: "01.01.2024, 10:00:00".into(),
            duration_hours: "1".into(),
            duration_minutes: "30".into(),
            notes: "Schulklasse".into(),
        }
    }

    #[test]
    fn writes_fields_in_fixed_order() {
        let out = to_csv(&[anna()]).unwrap();
        assert_eq!(
            out,
            "Anna,Muller,Wildeshausen,a@b.de,01.01.2024, 10:00:00,1,30,Schulklasse"
        );
    }

    #[test]
    fn joins_lines_without_trailing_newline() {
        let mut second = anna();
        second.id = 2;
        second.first_name = "Ben".into();
        let out = to_csv(&[anna(), second]).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Ben,"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn empty_input_gives_empty_text() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn empty_fields_keep_their_columns() {
        let mut r = anna();
        r.first_name.clear();
        r.email.clear();
        r.notes.clear();
        let out = to_csv(&[r]).unwrap();
        assert_eq!(out, ",Muller,Wildeshausen,,01.01.2024, 10:00:00,1,30,");
    }

    #[test]
    fn embedded_commas_are_not_escaped() {
        let mut r = anna();
        r.notes = "Klasse 5a, Lehrerin \"Meyer\"".into();
        let out = to_csv(&[r]).unwrap();
        assert!(out.ends_with(",30,Klasse 5a, Lehrerin \"Meyer\""));
    }

    #[test]
    fn output_is_deterministic() {
        let records = vec![anna(), anna()];
        assert_eq!(to_csv(&records).unwrap(), to_csv(&records).unwrap());
    }
}
