use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ScanError;

/// Read a whole UTF-8 document into memory.
///
/// `\r\n` is folded to `\n` so callers only ever split on `\n`.
pub fn read_document(path: &Path) -> Result<String, ScanError> {
    let raw = fs::read_to_string(path).map_err(|source| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = ?path, bytes = raw.len(), "read document");
    Ok(normalize_newlines(&raw))
}

pub fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n")
}
