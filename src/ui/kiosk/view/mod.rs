//! View layer: pure rendering of the kiosk state.

pub mod components;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::state::{KioskApp, KioskMode};
use crate::models::field::Field;
use components::{centered_rect, render_dialog_framework, render_input_widget};

pub const SAVED_TEXT: &str = "Daten wurden gespeichert. Vielen Dank!";
pub const CONFIRM_TEXT: &str = "Sicher, dass die Datenbank gelöscht werden soll?";

pub fn render(frame: &mut Frame, app: &KioskApp, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(12),   // body
            Constraint::Length(3), // acknowledgment / status
            Constraint::Length(3), // help
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(body[0]);

    render_greeting(frame, app, left[0]);
    render_visitors(frame, app, left[1]);
    render_form(frame, app, body[1]);
    render_status(frame, app, now, chunks[2]);
    render_help(frame, app, chunks[3]);

    if app.mode() == KioskMode::ConfirmReset {
        render_confirm_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        "🏛  Besucherregistrierung  ·  Version {}",
        env!("CARGO_PKG_VERSION")
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_greeting(frame: &mut Frame, app: &KioskApp, area: Rect) {
    let greeting = Paragraph::new(app.greeting.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(greeting, area);
}

fn render_visitors(frame: &mut Frame, app: &KioskApp, area: Rect) {
    let records = app.form.records();

    // newest first; the list is a running log, not a report
    let items: Vec<ListItem> = records
        .iter()
        .rev()
        .map(|v| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>4} ", v.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(v.visited_at.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    v.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if !v.location.is_empty() {
                spans.push(Span::raw(format!(" ({})", v.location)));
            }
            let duration = v.display_duration();
            if !duration.is_empty() {
                spans.push(Span::styled(
                    format!("  {duration}"),
                    Style::default().fg(Color::Green),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("Besucher ({})", records.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_form(frame: &mut Frame, app: &KioskApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // first name
            Constraint::Length(3), // last name
            Constraint::Length(3), // hours | minutes
            Constraint::Length(3), // location
            Constraint::Length(3), // email
            Constraint::Length(3), // notes
            Constraint::Min(0),
        ])
        .split(area);

    let duration = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let slots = [
        (Field::FirstName, rows[0]),
        (Field::LastName, rows[1]),
        (Field::DurationHours, duration[0]),
        (Field::DurationMinutes, duration[1]),
        (Field::Location, rows[3]),
        (Field::Email, rows[4]),
        (Field::Notes, rows[5]),
    ];

    let editing = app.mode() == KioskMode::Form;
    for (field, slot) in slots {
        render_input_widget(
            frame,
            slot,
            field.label(),
            app.form.field(field),
            editing && app.focus == field,
        );
    }
}

fn render_status(frame: &mut Frame, app: &KioskApp, now: Instant, area: Rect) {
    let (text, style) = if app.form.ack_visible(now) {
        (SAVED_TEXT.to_string(), Style::default().fg(Color::Green))
    } else if let Some(msg) = &app.message {
        (msg.clone(), Style::default().fg(Color::Yellow))
    } else {
        (String::new(), Style::default())
    };

    let status = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_help(frame: &mut Frame, app: &KioskApp, area: Rect) {
    let help_text = match app.mode() {
        KioskMode::Form => {
            "[Tab/↓] weiter  [⇧Tab/↑] zurück  [Enter auf Sonstiges | Ctrl+S] speichern  [Ctrl+E] exportieren  [Ctrl+R] Datenbank löschen  [Esc] beenden"
        }
        KioskMode::ConfirmReset => "[j/y] löschen  [n/Esc] abbrechen",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_confirm_dialog(frame: &mut Frame) {
    let area = centered_rect(50, 25, frame.area());
    let inner = render_dialog_framework(frame, area, "⚠️ Datenbank löschen", Color::Red);

    let dialog = Paragraph::new(format!("{CONFIRM_TEXT}\n\n[n] Abbrechen    [j] Löschen"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(dialog, inner);
}
