// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::csv::to_csv;
use crate::export::fs_utils::write_replacing;
use crate::export::share::share_file;
use crate::models::visitor::VisitorRecord;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// What to do with the file once it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareMode {
    Disabled,
    Platform,
    Command(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareStatus {
    Shared,
    Skipped,
    /// The file was written but the hand-off failed.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub dir: PathBuf,
    pub file_name: String,
    pub share: ShareMode,
}

impl ExportSettings {
    pub fn from_config(cfg: &Config) -> Self {
        let share = match &cfg.share_command {
            Some(cmd) if !cmd.trim().is_empty() => ShareMode::Command(cmd.clone()),
            _ => ShareMode::Platform,
        };
        Self {
            dir: expand_tilde(&cfg.export_dir),
            file_name: cfg.export_file_name.clone(),
            share,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub records: usize,
    pub share: ShareStatus,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the visitors to the export file, then hand it to the share
    /// program. Only a failed write is an error; a failed share is reported
    /// in the returned [`ExportReport`] and the file stays in place.
    pub fn export_and_share(
        records: &[VisitorRecord],
        settings: &ExportSettings,
    ) -> AppResult<ExportReport> {
        let csv = to_csv(records)?;
        let path = settings.path();
        write_replacing(&path, &csv)?;

        let share = match &settings.share {
            ShareMode::Disabled => ShareStatus::Skipped,
            ShareMode::Platform => Self::share_status(share_file(&path, None)),
            ShareMode::Command(cmd) => Self::share_status(share_file(&path, Some(cmd.as_str()))),
        };

        Ok(ExportReport {
            path,
            records: records.len(),
            share,
        })
    }

    fn share_status(result: AppResult<()>) -> ShareStatus {
        match result {
            Ok(()) => ShareStatus::Shared,
            Err(e) => ShareStatus::Failed(e.to_string()),
        }
    }
}
