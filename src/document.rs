//! Loading and rendering the launcher config document.
//!
//! The document is kept as a generic JSON object rather than a typed struct:
//! the launcher owns the schema and we only touch two of its keys, so every
//! other key must pass through untouched. serde_json's `preserve_order`
//! feature keeps keys in file order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::PatchError;

/// An open-ended, insertion-ordered JSON object.
pub type ConfigDocument = Map<String, Value>;

/// A parsed config file together with the bytes it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    /// The file exactly as read. Backups are written from these bytes.
    pub raw: Vec<u8>,
    pub document: ConfigDocument,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Pure function: parse file bytes into a [`ConfigDocument`].
///
/// A leading UTF-8 byte order mark is tolerated. Anything that is not a JSON
/// object is rejected with a human-readable reason.
pub fn parse_document(content: &[u8]) -> Result<ConfigDocument, String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    match serde_json::from_slice::<Value>(content).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "expected a JSON object, found {}",
            json_type_name(&other)
        )),
    }
}

/// I/O wrapper: read the file at `path` and parse it.
pub fn load(path: &Path) -> Result<LoadedConfig, PatchError> {
    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PatchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(PatchError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let document = parse_document(&raw).map_err(|reason| PatchError::MalformedConfig {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::debug!(path = %path.display(), keys = document.len(), "loaded config");

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        raw,
        document,
    })
}

/// Render a document as indented JSON, the form used both on disk and for
/// dry-run previews.
pub fn render(document: &ConfigDocument) -> Result<String, PatchError> {
    serde_json::to_string_pretty(document).map_err(PatchError::SerializeFailed)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
