//! String folding used before fuzzy comparison.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold a string for comparison: strip diacritics, lowercase, and collapse
/// runs of whitespace to a single space.
///
/// - "Café" → "cafe"
/// - "  Naïve   Art " → "naive art"
///
/// Without the `unicode-normalization` feature diacritics are kept and only
/// case and whitespace are folded.
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&strip_marks(value).to_lowercase())
}

/// NFD-decompose and drop the combining marks left behind.
#[cfg(feature = "unicode-normalization")]
fn strip_marks(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_marks(value: &str) -> String {
    value.to_string()
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
