//! Presentation: CLI messages and the terminal kiosk screen.

pub mod kiosk;
pub mod messages;
