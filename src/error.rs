use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The document could not be opened, read or decoded as UTF-8.
    #[error("failed to read {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
