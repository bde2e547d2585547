//! Timestamped backups of the config file, taken before it is replaced.
//!
//! A backup sits next to the original and embeds the local time at minute
//! resolution: `dalamudConfig.json` becomes
//! `dalamudConfig.backup-07-03-2024--09-05.json`. Backups are never read back
//! by this tool; they exist so a human can restore by hand.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::PatchError;

/// `DD-MM-YYYY--HH-MM`, zero padded.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y--%H-%M";

/// Pure function: compute the sibling backup path for `path` at `now`.
///
/// The extension is kept, so the backup still opens as JSON.
pub fn backup_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}.backup-{}", now.format(TIMESTAMP_FORMAT));
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// I/O wrapper: write `original` to the backup path for `path` at `now`.
///
/// The bytes go to a temp file beside the config first and are only linked
/// under the backup name once fully written and synced, so a failed write
/// never leaves a truncated backup behind. The final step refuses to
/// clobber: if a file already sits at that path (two runs within the same
/// minute) the write fails and the earlier backup is kept.
pub fn write_backup(
    path: &Path,
    original: &[u8],
    now: NaiveDateTime,
) -> Result<PathBuf, PatchError> {
    copy_to_backup(path, original, now)
}

fn copy_to_backup<R: Read>(
    path: &Path,
    mut original: R,
    now: NaiveDateTime,
) -> Result<PathBuf, PatchError> {
    let target = backup_path(path, now);
    let failed = |source| PatchError::BackupWriteFailed {
        path: target.clone(),
        source,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".dalamud-backup.")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(failed)?;

    let bytes = io::copy(&mut original, &mut file).map_err(failed)?;
    file.as_file().sync_all().map_err(failed)?;
    file.persist_noclobber(&target).map_err(|e| failed(e.error))?;

    tracing::info!(backup = %target.display(), bytes, "wrote backup");
    Ok(target)
}
