pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod reset;
