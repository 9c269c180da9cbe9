//! Accent and punctuation folding.
//!
//! The matcher never calls this itself. Apply it to both the text and the
//! query when accented spellings should match plain ones.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, removed after decomposition.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold text for comparison.
///
/// Lower-cases, decomposes (NFD), strips Latin diacritics, turns every
/// non-word character into a space, and collapses runs of whitespace.
/// Combining marks outside the diacritics block are kept, so vowel signs of
/// Indic scripts survive.
///
/// # Example
/// ```
/// use shiksha_search::normalize_text;
///
/// assert_eq!(normalize_text("  Café—Résumé (Draft) "), "cafe resume draft");
/// ```
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || unicode_normalization::char::is_combining_mark(c)
}
