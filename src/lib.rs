//! Switch the Dalamud beta track in XIVLauncher's config file, without ever
//! leaving that file half-written.
//!
//! XIVLauncher stores Dalamud's settings in
//! `<roaming app data>/XIVLauncher/dalamudConfig.json`. Opting into a beta
//! means setting two keys, `betaKind` and `betaKey`. This crate does exactly
//! that and nothing else:
//!
//! ```text
//! Locate   paths::config_path()           <app data>/XIVLauncher/dalamudConfig.json
//!    ↓
//! Load     document::load()               raw bytes + parsed JSON object
//!    ↓
//! Merge    merge::apply_beta()            overwrite betaKind / betaKey
//!    ↓
//! Commit   backup::write_backup()         dalamudConfig.backup-DD-MM-YYYY--HH-MM.json
//!          persist::commit()              temp file beside target, then rename
//! ```
//!
//! [`run`] drives the whole sequence. In dry-run mode it stops after Merge
//! and hands back the rendered document instead.
//!
//! # Unknown keys
//!
//! The launcher owns the schema. The document is a generic JSON object
//! ([`ConfigDocument`]) with key order preserved, so every key other than the
//! two beta fields comes back out exactly as it went in.
//!
//! # Overwrite, not merge
//!
//! Both fields are always written. Running with no flags resets the config to
//! `betaKind = "release"` and `betaKey = ""`, which is how a user leaves a
//! beta track. There is no mode that updates one field and keeps the other.
//!
//! # Atomicity
//!
//! The new contents are written to a temp file in the config's own directory,
//! synced, and renamed over the config. A crash at any point leaves either the
//! old file or the new one. See [`persist`] for the staged form used to test
//! the interruption point.
//!
//! # Error handling
//!
//! All fallible operations return [`PatchError`]. Errors name the file they
//! concern and are meant to be printed as-is.

pub mod backup;
pub mod cli;
pub mod document;
pub mod error;
pub mod logging;
pub mod merge;
pub mod ops;
pub mod paths;
pub mod persist;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use cli::Cli;
pub use document::{ConfigDocument, LoadedConfig};
pub use error::PatchError;
pub use ops::{PatchOutcome, run, run_at};
pub use paths::config_path;
pub use types::{BetaSettings, Options};
