//! Location of the launcher config file.
//!
//! XIVLauncher keeps its Dalamud settings under the roaming application data
//! directory (`%APPDATA%` on Windows). The root comes from
//! [`directories::BaseDirs::config_dir`], which maps to the same place on
//! Windows and to the XDG / `~/Library/Application Support` equivalent
//! elsewhere.

use std::path::{Path, PathBuf};

use crate::error::PatchError;

/// Launcher directory under the roaming app-data root.
pub const LAUNCHER_DIR: &str = "XIVLauncher";

/// Dalamud's config file inside [`LAUNCHER_DIR`].
pub const CONFIG_FILE_NAME: &str = "dalamudConfig.json";

/// Resolve the config path for the current user.
///
/// Fails only when the platform reports no home directory at all; whether the
/// file exists is checked by [`load`](crate::document::load).
pub fn config_path() -> Result<PathBuf, PatchError> {
    let base = directories::BaseDirs::new().ok_or(PatchError::AppDataUnavailable)?;
    Ok(config_path_in(base.config_dir()))
}

/// Join the launcher directory and file name onto an app-data root.
pub fn config_path_in(app_data: &Path) -> PathBuf {
    app_data.join(LAUNCHER_DIR).join(CONFIG_FILE_NAME)
}
