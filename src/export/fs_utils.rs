// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, replacing any previous file of that name.
///
/// The text goes to a sibling `.tmp` file first and is renamed into place,
/// so an interrupted export never leaves a half-written `path`.
pub(crate) fn write_replacing(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Export(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    fs::write(tmp, content)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", tmp.display())))?;
    fs::rename(tmp, path)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))?;
    Ok(())
}
