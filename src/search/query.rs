//! Context-window queries over a [`TextIndex`].

use serde::Serialize;
use std::ops::Range;

use super::index::TextIndex;
use super::normalize::normalize;

/// One occurrence of a query word with its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concordance {
    /// Token position of the matched word
    pub position: usize,
    /// First token of the window (inclusive)
    pub start: usize,
    /// One past the last token of the window
    pub end: usize,
    /// Surface tokens of the window joined by single spaces
    pub text: String,
}

impl TextIndex {
    /// Finds every occurrence of `word`, each with `context` tokens on either side.
    ///
    /// Results follow document order. Windows are clamped at the document
    /// edges, and a word that is absent (or normalizes to nothing) yields an
    /// empty vector.
    pub fn search(&self, word: &str, context: usize) -> Vec<String> {
        self.concordance(word, context)
            .into_iter()
            .map(|hit| hit.text)
            .collect()
    }

    /// Structured form of [`search`](Self::search).
    pub fn concordance(&self, word: &str, context: usize) -> Vec<Concordance> {
        let key = normalize(word);
        let positions = self.positions_of_key(&key);
        tracing::debug!(
            "Query {:?} (key {:?}, context {}): {} occurrences",
            word,
            key,
            context,
            positions.len()
        );

        positions
            .iter()
            .map(|&position| {
                let window = self.window(position, context);
                Concordance {
                    position,
                    start: window.start,
                    end: window.end,
                    text: self.tokens[window].join(" "),
                }
            })
            .collect()
    }

    /// Token range covering `context` tokens either side of `position`,
    /// clamped to the document.
    pub fn window(&self, position: usize, context: usize) -> Range<usize> {
        let len = self.tokens.len();
        let start = position.saturating_sub(context).min(len);
        let end = position
            .saturating_add(context)
            .saturating_add(1)
            .min(len);
        start..end
    }
}
