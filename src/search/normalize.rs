//! Token canonicalization shared by index construction and queries.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Returns true if `c` survives normalization once lowercased.
///
/// Letters must be in general category Ll. `char::is_lowercase` is wider: it
/// also accepts modifier letters, ordinal indicators and circled letters.
#[inline]
fn is_kept(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
        || c.is_numeric()
        || c == '-'
        || c == '\''
}

/// Canonicalizes a raw token into its lookup key.
///
/// Letters are lowercased (Unicode-aware), then everything except lowercase
/// letters (category Ll), numerics (categories Nd, Nl, No), `-` and `'` is
/// removed. The result may be empty, which callers treat as "no token".
///
/// ```
/// use concord::normalize;
///
/// assert_eq!(normalize("one--the,"), "one--the");
/// assert_eq!(normalize("Don't"), "don't");
/// assert_eq!(normalize("***"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    out.extend(raw.chars().flat_map(char::to_lowercase).filter(|&c| is_kept(c)));
    out
}

/// Returns true if `raw` normalizes to a non-empty key, without allocating.
pub fn is_indexable(raw: &str) -> bool {
    raw.chars().flat_map(char::to_lowercase).any(is_kept)
}
