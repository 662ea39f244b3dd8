pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tracing;

pub use config::Config;
pub use error::IndexError;
pub use search::{Concordance, IndexBuilder, ScanPolicy, TextIndex, is_indexable, normalize};
