// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;
pub mod share;

pub use logic::{ExportLogic, ExportReport, ExportSettings, ShareMode, ShareStatus};

use crate::ui::messages::{success, warning};

/// Shared completion message for CLI and kiosk exports.
pub(crate) fn notify_export(report: &ExportReport) {
    success(format!(
        "CSV export completed ({} visitor(s)): {}",
        report.records,
        report.path.display()
    ));
    match &report.share {
        ShareStatus::Shared => success("File handed to the share program."),
        ShareStatus::Skipped => {}
        ShareStatus::Failed(e) => warning(format!("{e} (the file was still written)")),
    }
}
