//! Error handling types and utilities.

use std::io;
use std::path::PathBuf;

/// A specialized Result type for the command-line layer.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the call sites. Library operations return [`IndexError`].
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a document or configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The document could not be opened.
    #[error("Failed to open document at {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading failed after the document was opened. `line` is 1-based.
    #[error("Failed to read line {line} of document: {source}")]
    Scan { line: usize, source: io::Error },

    /// The configuration file exists but could not be read.
    #[error("Failed to read config at {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    /// The configuration file is not valid TOML for [`Config`](crate::Config).
    #[error("Invalid config at {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}
