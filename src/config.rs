//! User configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::IndexError;
use crate::search::ScanPolicy;

/// Context words on each side when neither the config nor the CLI sets one.
pub const DEFAULT_CONTEXT: usize = 10;

/// Settings shared by every command. All fields are optional in the file.
///
/// ```toml
/// context = 5
/// scan_policy = "best-effort"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tokens of context on each side of a match
    pub context: usize,
    /// Handling of read errors after the document was opened
    pub scan_policy: ScanPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            scan_policy: ScanPolicy::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/concord/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("concord").join("config.toml"))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file there means [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self, IndexError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags, which win over file values.
    pub fn with_overrides(mut self, context: Option<usize>, best_effort: bool) -> Self {
        if let Some(context) = context {
            self.context = context;
        }
        if best_effort {
            self.scan_policy = ScanPolicy::BestEffort;
        }
        self
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| IndexError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
