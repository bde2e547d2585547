//! Atomic replacement of the config file.
//!
//! New contents are written to a temporary file in the *same directory* as the
//! target, flushed to disk, and then renamed over the target. A rename within
//! one directory is atomic on every platform we run on, so a reader sees
//! either the old file or the new one. A temp file in the system temp dir
//! could live on another volume, where the "rename" silently becomes a copy.
//!
//! The write is split into [`stage`] and [`StagedCommit::finish`]. Dropping a
//! staged commit deletes its temp file and leaves the target untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::{ConfigDocument, render};
use crate::error::PatchError;

/// New contents written next to the target, not yet visible under its name.
#[derive(Debug)]
pub struct StagedCommit {
    target: PathBuf,
    file: NamedTempFile,
}

impl StagedCommit {
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn temp_path(&self) -> &Path {
        self.file.path()
    }

    /// Rename the staged file onto the target.
    ///
    /// On failure the temp file is removed. Whether the target survived
    /// intact then depends on the filesystem, so the error is reported
    /// rather than retried.
    pub fn finish(self) -> Result<PathBuf, PatchError> {
        self.file
            .persist(&self.target)
            .map_err(|e| PatchError::CommitRenameFailed {
                path: self.target.clone(),
                source: e.error,
            })?;
        tracing::debug!(path = %self.target.display(), "replaced config");
        Ok(self.target)
    }
}

/// Serialize `document` and write it to a temp file beside `target`.
///
/// The temp file takes the target's permissions so the rename does not
/// change them.
pub fn stage(target: &Path, document: &ConfigDocument) -> Result<StagedCommit, PatchError> {
    let mut contents = render(document)?;
    contents.push('\n');

    let write_failed = |source| PatchError::CommitWriteFailed {
        path: target.to_path_buf(),
        source,
    };

    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut file = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(staging_dir(target))
        .map_err(write_failed)?;

    file.write_all(contents.as_bytes()).map_err(write_failed)?;
    if let Ok(meta) = std::fs::metadata(target) {
        file.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_failed)?;
    }
    file.as_file().sync_all().map_err(write_failed)?;

    tracing::debug!(
        config = %target.display(),
        temp = %file.path().display(),
        bytes = contents.len(),
        "staged new config"
    );

    Ok(StagedCommit {
        target: target.to_path_buf(),
        file,
    })
}

/// Stage and immediately finish.
pub fn commit(target: &Path, document: &ConfigDocument) -> Result<PathBuf, PatchError> {
    stage(target, document)?.finish()
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::fixtures::test::{SAMPLE_CONFIG, dir_entries, write_config};
    use crate::paths::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn doc(json: &str) -> ConfigDocument {
        parse_document(json.as_bytes()).unwrap()
    }

    #[test]
    fn commit_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE_CONFIG);
        let new_doc = doc(r#"{"betaKind":"release","betaKey":""}"#);

        commit(&path, &new_doc).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{}\n", render(&new_doc).unwrap()));
        assert_eq!(dir_entries(&dir), [CONFIG_FILE_NAME]);
    }

    #[test]
    fn staged_file_lives_beside_target() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE_CONFIG);

        let staged = stage(&path, &doc("{}")).unwrap();
        assert_eq!(staged.temp_path().parent(), path.parent());
        assert_eq!(staged.target(), path);
        assert_eq!(fs::read_to_string(staged.temp_path()).unwrap(), "{}\n");
    }

    #[test]
    fn interrupted_commit_leaves_original() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE_CONFIG);

        let staged = stage(&path, &doc(r#"{"betaKind":"stg"}"#)).unwrap();
        let temp = staged.temp_path().to_path_buf();
        assert!(temp.exists());
        // Stop between write and rename.
        drop(staged);

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONFIG);
        assert_eq!(dir_entries(&dir), [CONFIG_FILE_NAME]);
    }

    #[test]
    fn missing_directory_is_write_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(CONFIG_FILE_NAME);

        let err = commit(&path, &doc("{}")).unwrap_err();
        assert!(matches!(err, PatchError::CommitWriteFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn rename_failure_cleans_up_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&path).unwrap();

        let err = commit(&path, &doc("{}")).unwrap_err();
        assert!(matches!(err, PatchError::CommitRenameFailed { .. }));
        assert!(path.is_dir());
        assert_eq!(dir_entries(&dir), [CONFIG_FILE_NAME]);
    }

    #[cfg(unix)]
    #[test]
    fn commit_keeps_target_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE_CONFIG);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        commit(&path, &doc("{}")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn relative_target_stages_in_current_dir() {
        assert_eq!(staging_dir(Path::new(CONFIG_FILE_NAME)), Path::new("."));
        assert_eq!(
            staging_dir(Path::new("/a/b/dalamudConfig.json")),
            Path::new("/a/b")
        );
    }
}
