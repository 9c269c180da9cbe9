//! Query highlighting for display.
//!
//! Occurrences of every query word are collected as byte ranges of the
//! original text, then overlapping or touching ranges are merged before any
//! marker is written. The output therefore never nests markers, and a query
//! word can never match inside a marker inserted for an earlier word.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::warn;

/// Markup placed around each highlighted range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightMarker {
    /// Inserted before a match
    pub open: String,
    /// Inserted after a match
    pub close: String,
}

impl HighlightMarker {
    /// Creates a marker from its opening and closing markup.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::new(r#"<mark class="search-highlight">"#, "</mark>")
    }
}

/// Wrap every case-insensitive occurrence of each query word in `<mark>` tags.
///
/// The matched text keeps its original casing. Query words are matched
/// literally, so `"C++"` or `"(draft)"` are safe.
///
/// # Example
/// ```
/// use shiksha_search::highlight_match;
///
/// assert_eq!(
///     highlight_match("Fractions and Decimals", "fraction"),
///     r#"<mark class="search-highlight">Fraction</mark>s and Decimals"#
/// );
/// assert_eq!(highlight_match("Fractions", ""), "Fractions");
/// ```
pub fn highlight_match(text: &str, query: &str) -> String {
    highlight_match_with(text, query, &HighlightMarker::default())
}

/// [`highlight_match`] with custom markup.
pub fn highlight_match_with(text: &str, query: &str, marker: &HighlightMarker) -> String {
    let ranges = highlight_ranges(text, query);
    if ranges.is_empty() {
        return text.to_string();
    }

    let extra = ranges.len() * (marker.open.len() + marker.close.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut last = 0;

    for range in ranges {
        out.push_str(&text[last..range.start]);
        out.push_str(&marker.open);
        out.push_str(&text[range.clone()]);
        out.push_str(&marker.close);
        last = range.end;
    }
    out.push_str(&text[last..]);

    out
}

/// Byte ranges of `text` to highlight for `query`, sorted and disjoint.
///
/// Ranges that overlap or touch are merged into one, so `"class room"` on
/// `"classroom"` yields a single range covering the whole word.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    if text.is_empty() || query.trim().is_empty() {
        return Vec::new();
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();

    for word in query.to_lowercase().split_whitespace() {
        let pattern = match RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(word = word, error = %e, "skipping unhighlightable query word");
                continue;
            }
        };

        ranges.extend(pattern.find_iter(text).map(|m| m.range()));
    }

    merge_ranges(ranges)
}

fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> HighlightMarker {
        HighlightMarker::new("[", "]")
    }

    #[test]
    fn test_preserves_original_case() {
        assert_eq!(
            highlight_match_with("Fractions and Decimals", "fraction", &brackets()),
            "[Fraction]s and Decimals"
        );
    }

    #[test]
    fn test_default_marker() {
        assert_eq!(
            highlight_match("Pune", "pune"),
            r#"<mark class="search-highlight">Pune</mark>"#
        );
    }

    #[test]
    fn test_empty_inputs_return_text() {
        assert_eq!(highlight_match("Fractions", ""), "Fractions");
        assert_eq!(highlight_match("Fractions", "   "), "Fractions");
        assert_eq!(highlight_match("", "fraction"), "");
    }

    #[test]
    fn test_no_occurrence_returns_text() {
        assert_eq!(highlight_match("Decimals", "fraction"), "Decimals");
    }

    #[test]
    fn test_every_occurrence_of_every_word() {
        assert_eq!(
            highlight_match_with("Pune school, pune district", "PUNE district", &brackets()),
            "[Pune] school, [pune] [district]"
        );
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let marker = brackets();
        assert_eq!(highlight_match_with("Intro to C++ and C", "c++", &marker), "Intro to [C++] and C");
        assert_eq!(
            highlight_match_with("Lesson plan (draft)", "(draft)", &marker),
            "Lesson plan [(draft)]"
        );
        assert_eq!(highlight_match_with("v1.2 vs v102", "1.2", &marker), "v[1.2] vs v102");
        assert_eq!(highlight_match_with("a*b a+b", "a*b", &marker), "[a*b] a+b");
        assert_eq!(highlight_match_with("cost $5 [x] ^y|z \\", "$5 [x] ^y|z \\", &marker), "cost [$5] [[x]] [^y|z] [\\]");
    }

    #[test]
    fn test_overlapping_words_merge_into_one_marker() {
        // "class" and "assroom" overlap inside "classroom"
        assert_eq!(
            highlight_match_with("Classroom management", "class assroom", &brackets()),
            "[Classroom] management"
        );
    }

    #[test]
    fn test_touching_words_merge() {
        assert_eq!(highlight_match_with("classroom", "class room", &brackets()), "[classroom]");
    }

    #[test]
    fn test_word_order_does_not_matter() {
        let marker = brackets();
        let a = highlight_match_with("Classroom management", "class assroom man", &marker);
        let b = highlight_match_with("Classroom management", "man assroom class", &marker);
        assert_eq!(a, b);
    }

    #[test]
    fn test_later_word_never_matches_inside_marker() {
        assert_eq!(
            highlight_match("mark the register", "register mark"),
            r#"<mark class="search-highlight">mark</mark> the <mark class="search-highlight">register</mark>"#
        );
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(highlight_match_with("Gadchiroli ग्राम", "ग्राम", &brackets()), "Gadchiroli [ग्राम]");
    }

    #[test]
    fn test_ranges_are_sorted_and_disjoint() {
        let ranges = highlight_ranges("ab ab abab", "ab b");
        assert_eq!(ranges, vec![0..2, 3..5, 6..10]);
    }
}
