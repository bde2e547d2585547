use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Could not locate the per-user application data directory")]
    AppDataUnavailable,

    #[error("The config file doesn't exist at the path {}. Exiting.", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config in {}: {reason}", .path.display())]
    MalformedConfig { path: PathBuf, reason: String },

    #[error("Failed to write backup {}: {source}", .path.display())]
    BackupWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize updated config: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("Failed to stage new contents for {}: {source}", .path.display())]
    CommitWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to replace {} with new contents: {source}", .path.display())]
    CommitRenameFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
