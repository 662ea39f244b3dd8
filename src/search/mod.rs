//! Concordance search over a single in-memory document.
//!
//! This module provides token normalization, index construction from a
//! line-oriented source, and context-window queries.

// Module declarations
pub(crate) mod index;
pub(crate) mod normalize;
pub(crate) mod query;
pub(crate) mod source;

// Public re-exports (used via lib.rs)
pub use index::{IndexBuilder, TextIndex};
pub use normalize::{is_indexable, normalize};
pub use query::Concordance;
pub use source::ScanPolicy;
