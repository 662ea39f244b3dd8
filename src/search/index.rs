//! In-memory token index over a single document.

use ahash::AHashMap;
use std::io::BufRead;
use std::path::Path;

use super::normalize::normalize;
use super::source::{self, ScanPolicy};
use crate::error::IndexError;

/// Accumulates document lines before freezing them into a [`TextIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    /// Surface-form tokens, indexed by position
    tokens: Vec<String>,
    /// Canonical token to ascending positions in `tokens`
    positions: AHashMap<String, Vec<usize>>,
    /// Pieces dropped because they normalized to nothing
    skipped: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `line` on single spaces and records every indexable piece.
    ///
    /// Only `' '` separates tokens. Tabs and runs of spaces stay attached to
    /// neighbouring pieces (or become empty pieces), so `"a\tb"` is one token.
    pub fn push_line(&mut self, line: &str) {
        for piece in line.split(' ') {
            let key = normalize(piece);
            if key.is_empty() {
                if !piece.is_empty() {
                    self.skipped += 1;
                }
                continue;
            }

            self.positions.entry(key).or_default().push(self.tokens.len());
            self.tokens.push(piece.to_string());
        }
    }

    /// Freezes the accumulated tokens into a read-only index.
    pub fn finish(self) -> TextIndex {
        tracing::info!(
            "Built text index: {} tokens, {} distinct terms, {} unindexable pieces skipped",
            self.tokens.len(),
            self.positions.len(),
            self.skipped
        );

        TextIndex {
            tokens: self.tokens,
            positions: self.positions,
        }
    }
}

/// A read-only concordance index over one document.
///
/// Holds every indexable token in document order alongside a map from each
/// token's canonical form to the positions where it occurs. Nothing mutates
/// an index after construction, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    pub(super) tokens: Vec<String>,
    pub(super) positions: AHashMap<String, Vec<usize>>,
}

impl TextIndex {
    /// Builds an index from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        for line in lines {
            builder.push_line(line.as_ref());
        }
        builder.finish()
    }

    /// Builds an index by reading `reader` line by line.
    ///
    /// Read failures are handled according to `policy`: `Strict` returns the
    /// error and drops the partial index, `BestEffort` keeps what was read.
    pub fn from_reader<R: BufRead>(reader: R, policy: ScanPolicy) -> Result<Self, IndexError> {
        let mut builder = IndexBuilder::new();
        let lines = source::scan_lines(reader, policy, |line| builder.push_line(line))?;
        tracing::debug!("Scanned {} lines", lines);
        Ok(builder.finish())
    }

    /// Opens the document at `path` and indexes it.
    ///
    /// The file handle is released before this returns, on success or failure.
    pub fn open(path: impl AsRef<Path>, policy: ScanPolicy) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let start = std::time::Instant::now();
        tracing::debug!("Indexing document {}", path.display());

        let index = Self::from_reader(source::open(path)?, policy)?;

        tracing::debug!("Indexed {} in {:?}", path.display(), start.elapsed());
        Ok(index)
    }

    /// Surface-form tokens in document order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of indexed tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of distinct canonical terms.
    pub fn term_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Positions of `word` in ascending order, or an empty slice if absent.
    ///
    /// `word` is normalized first, so `"The,"` and `"the"` find the same positions.
    pub fn positions(&self, word: &str) -> &[usize] {
        self.positions_of_key(&normalize(word))
    }

    /// Number of occurrences of `word`.
    pub fn frequency(&self, word: &str) -> usize {
        self.positions(word).len()
    }

    /// Iterates over `(term, occurrences)` pairs in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions
            .iter()
            .map(|(term, positions)| (term.as_str(), positions.len()))
    }

    /// The `n` most frequent terms, most frequent first; ties ordered by term.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<_> = self.terms().collect();
        terms.sort_unstable_by(|(a_term, a), (b_term, b)| {
            b.cmp(a).then_with(|| a_term.cmp(b_term))
        });
        terms.truncate(n);
        terms
    }

    pub(super) fn positions_of_key(&self, key: &str) -> &[usize] {
        self.positions
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
