//! Hand-off of the exported file to an external "share" program.

use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::{Command, Stdio};

/// Platform opener used when no share command is configured.
pub fn platform_opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Run `command` (program plus optional arguments) with `path` appended as
/// last argument and wait for it. Its output is discarded so it cannot
/// scribble over the kiosk screen.
pub fn share_file(path: &Path, command: Option<&str>) -> AppResult<()> {
    let command = command.unwrap_or(platform_opener());
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| AppError::Share("empty share command".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| AppError::Share(format!("cannot run '{program}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Share(format!("'{program}' exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let err = share_file(Path::new("/tmp/x.csv"), Some("   ")).unwrap_err();
        assert!(matches!(err, AppError::Share(_)));
    }

    #[test]
    fn missing_program_is_share_error() {
        let err = share_file(
            Path::new("/tmp/x.csv"),
            Some("visitor-kiosk-no-such-share-program"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Share(_)));
    }
}
