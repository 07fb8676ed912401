//! Reusable widgets: dialog frame, input box, centered popup area.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [component] popup frame; returns the inner area.
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [component] single-line input box. Empty values show the label greyed out.
pub fn render_input_widget(frame: &mut Frame, area: Rect, label: &str, value: &str, is_focused: bool) {
    let border = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let (text, text_style) = if value.is_empty() && !is_focused {
        (label, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);

    if is_focused {
        let x = area.x + 1 + unicode_width::UnicodeWidthStr::width(value) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), area.y + 1));
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
