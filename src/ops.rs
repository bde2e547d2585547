//! The patch pipeline: load, merge, then either preview or back up and commit.
//!
//! Everything here takes the config path and the clock reading as arguments,
//! so the whole pipeline runs against a temp directory in tests.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::backup::write_backup;
use crate::document::{load, render};
use crate::error::PatchError;
use crate::merge::apply_beta;
use crate::persist::{StagedCommit, stage};
use crate::types::Options;

/// Result of a patch run. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// Dry run: the document that would have been written.
    Preview { rendered: String },
    /// The config was replaced, optionally after taking a backup.
    Committed {
        path: PathBuf,
        backup: Option<PathBuf>,
    },
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Preview { rendered } => write!(f, "{rendered}"),
            PatchOutcome::Committed { path, backup } => {
                write!(f, "Updated {}", path.display())?;
                if let Some(backup) = backup {
                    write!(f, " (backup at {})", backup.display())?;
                }
                Ok(())
            }
        }
    }
}

/// Patch the config at `path` using the current local time for backups.
pub fn run(path: &Path, options: &Options) -> Result<PatchOutcome, PatchError> {
    run_at(path, options, Local::now().naive_local())
}

/// Patch the config at `path`, stamping any backup with `now`.
///
/// Steps, each aborting the run on error:
///
/// 1. Load and parse the file
/// 2. Overwrite `betaKind` and `betaKey`
/// 3. Dry run: render and return without touching disk
/// 4. Back up the original bytes (unless opted out)
/// 5. Atomically replace the file
pub fn run_at(
    path: &Path,
    options: &Options,
    now: NaiveDateTime,
) -> Result<PatchOutcome, PatchError> {
    run_with(path, options, now, StagedCommit::finish)
}

/// [`run_at`] with the final rename supplied by the caller.
fn run_with<F>(
    path: &Path,
    options: &Options,
    now: NaiveDateTime,
    finish: F,
) -> Result<PatchOutcome, PatchError>
where
    F: FnOnce(StagedCommit) -> Result<PathBuf, PatchError>,
{
    let loaded = load(path)?;
    let updated = apply_beta(loaded.document, options.beta());
    tracing::debug!(
        beta_kind = %options.beta_kind,
        beta_key_set = !options.beta_key.is_empty(),
        "merged beta settings"
    );

    if options.dry_run {
        return Ok(PatchOutcome::Preview {
            rendered: render(&updated)?,
        });
    }

    let backup = if options.no_backup {
        tracing::debug!("backup skipped");
        None
    } else {
        Some(write_backup(path, &loaded.raw, now)?)
    };

    let path = finish(stage(path, &updated)?)?;
    tracing::info!(path = %path.display(), beta_kind = %options.beta_kind, "config updated");

    Ok(PatchOutcome::Committed { path, backup })
}
