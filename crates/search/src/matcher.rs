//! Single text / single query fuzzy matching.
//!
//! A query is scored against a text by taking the strongest of several
//! signals rather than blending them:
//!
//! 1. Substring containment (score 1, checked first)
//! 2. Word prefixes in either direction ([`PREFIX_MATCH_SCORE`])
//! 3. Word-to-word edit similarity
//! 4. Edit similarity of every contiguous text phrase as long as the query
//!
//! Each comparison is case-insensitive.

use crate::similarity;
use serde::{Deserialize, Serialize};

/// Default threshold for [`fuzzy_match`].
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Score given to a word that is a prefix of another ("sci" / "science").
pub const PREFIX_MATCH_SCORE: f64 = 0.85;

/// Outcome of matching one text against one query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether `score` reached the threshold
    pub matches: bool,
    /// Confidence in `[0, 1]`
    pub score: f64,
}

impl MatchResult {
    /// Result for inputs that cannot match at all.
    pub const NONE: MatchResult = MatchResult { matches: false, score: 0.0 };

    fn scored(score: f64, threshold: f64) -> Self {
        Self {
            matches: score >= threshold,
            score,
        }
    }
}

/// Match `query` against `text` with fuzzy logic.
///
/// Empty (or whitespace-only) text or query never match.
///
/// # Arguments
/// * `text` - Text to search in
/// * `query` - Search query
/// * `threshold` - Minimum score for `matches` to be true
///
/// # Example
/// ```
/// use shiksha_search::fuzzy_match;
///
/// let exact = fuzzy_match("Tribal Belt Schools", "belt", 0.6);
/// assert!(exact.matches);
/// assert_eq!(exact.score, 1.0);
///
/// let typo = fuzzy_match("Photosynthesis", "Photosintesis", 0.6);
/// assert!(typo.matches);
/// ```
pub fn fuzzy_match(text: &str, query: &str, threshold: f64) -> MatchResult {
    let text = text.trim().to_lowercase();
    let query = query.trim().to_lowercase();

    if text.is_empty() || query.is_empty() {
        return MatchResult::NONE;
    }

    if text.contains(&query) {
        return MatchResult { matches: true, score: 1.0 };
    }

    let text_words: Vec<&str> = text.split_whitespace().collect();
    let query_words: Vec<&str> = query.split_whitespace().collect();

    let score = word_score(&text_words, &query_words).max(phrase_score(&text_words, &query_words));
    MatchResult::scored(score, threshold)
}

/// Best score over every (query word, text word) pair.
fn word_score(text_words: &[&str], query_words: &[&str]) -> f64 {
    let mut best: f64 = 0.0;

    for query_word in query_words {
        for text_word in text_words {
            if text_word.starts_with(query_word) || query_word.starts_with(text_word) {
                best = best.max(PREFIX_MATCH_SCORE);
            }
            best = best.max(similarity(text_word, query_word));
        }
    }

    best
}

/// Best score of the query phrase against each same-length window of text words.
fn phrase_score(text_words: &[&str], query_words: &[&str]) -> f64 {
    if query_words.is_empty() || query_words.len() > text_words.len() {
        return 0.0;
    }

    let query_phrase = query_words.join(" ");
    text_words
        .windows(query_words.len())
        .map(|window| similarity(&window.join(" "), &query_phrase))
        .fold(0.0, f64::max)
}
