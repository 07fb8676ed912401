//! Terminal kiosk screen.
//!
//! Model-View-Intent:
//! - Model (state.rs): KioskApp wrapping the form controller
//! - View (view/): pure rendering of the model
//! - Intent (actions.rs, input.rs): key presses turned into actions

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::KioskApp;
pub use view::render;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::errors::AppResult;

/// Longest wait for input before the screen is redrawn anyway.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Raw mode and alternate screen, undone on drop on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        Self::enter_with(|| execute!(io::stdout(), EnterAlternateScreen))
    }

    /// Enable raw mode, then run `setup`. Raw mode is left again if `setup`
    /// fails.
    fn enter_with(setup: impl FnOnce() -> io::Result<()>) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        setup()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
    }
}

/// Take over the terminal, run the kiosk until quit, then restore it.
pub fn run(app: &mut KioskApp) -> AppResult<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_loop(&mut terminal, app)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut KioskApp) -> AppResult<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| render(f, app, now))?;

        // wake up in time to hide the acknowledgment
        let timeout = app
            .form
            .ack_time_left(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key_event(app, key, Instant::now())
        {
            break;
        }

        app.form.tick(Instant::now());
    }
    Ok(())
}
