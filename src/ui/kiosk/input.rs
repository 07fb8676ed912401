//! Key mapping (Input -> Action)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{KioskApp, KioskMode};
use crate::models::field::Field;

/// Map a key press to an action for the current mode and focused field.
pub fn get_action(mode: KioskMode, focus: Field, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match mode {
        KioskMode::Form => match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Save),
            KeyCode::Char('e') if ctrl => Some(Action::Export),
            KeyCode::Char('r') if ctrl => Some(Action::RequestReset),
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter if focus.is_last() => Some(Action::Save),
            KeyCode::Enter => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if !ctrl => Some(Action::Input(c)),
            _ => None,
        },
        KioskMode::ConfirmReset => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(Action::ConfirmReset)
            }
            KeyCode::Enter => Some(Action::ConfirmReset),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelReset),
            _ => None,
        },
    }
}

/// Handle a key event. Returns true when the kiosk should close.
pub fn handle_key_event(app: &mut KioskApp, key: KeyEvent, now: std::time::Instant) -> bool {
    match get_action(app.mode(), app.focus, key) {
        Some(action) => app.dispatch(action, now),
        None => false,
    }
}
