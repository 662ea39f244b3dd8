//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_index`: the index built from `tests/fixtures/sample.txt`
//!
//! [`TempWorkspace`] provides a scratch directory for tests that need to
//! write their own documents.

use concord::{ScanPolicy, TextIndex};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the bundled sample document.
pub fn sample_path() -> PathBuf {
    project_root().join("tests/fixtures/sample.txt")
}

/// The sample document, indexed with the strict scan policy.
#[fixture]
pub fn sample_index() -> TextIndex {
    concord::tracing::init_test();
    TextIndex::open(sample_path(), ScanPolicy::Strict).expect("Failed to index sample document")
}

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `relative_path` and returns the full path.
    pub fn create_file(&self, relative_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}
