//! Typo-tolerant search for Shiksha content lists.
//!
//! This crate provides:
//! - Case-insensitive Levenshtein similarity
//! - Single text / query fuzzy matching with prefix and phrase signals
//! - Ranked multi-field search over JSON records or any [`FieldSource`]
//! - Query highlighting with literal, merge-safe markers
//! - Accent and punctuation folding
//! - WASM bindings for browser usage
//!
//! Every function is pure and synchronous. Search cost grows with
//! items × fields × words² × word length², which suits UI-sized lists of
//! clusters, manuals and modules, not large corpora.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use shiksha_search::{fuzzy_search, highlight_match};
//!
//! let manuals = vec![
//!     json!({"title": "Photosynthesis for Grade 7"}),
//!     json!({"title": "Fractions and Decimals"}),
//! ];
//!
//! let found = fuzzy_search(&manuals, "photosintesis", &["title"], 0.5);
//! assert_eq!(found, vec![&manuals[0]]);
//!
//! let marked = highlight_match("Fractions and Decimals", "decimal");
//! assert!(marked.contains("<mark class=\"search-highlight\">Decimal</mark>"));
//! ```

mod collection;
mod config;
mod error;
mod field;
mod highlight;
mod matcher;
mod normalize;
mod similarity;

#[cfg(feature = "wasm")]
mod wasm;


pub use collection::{fuzzy_search, parse_items, search_ranked, DEFAULT_SEARCH_THRESHOLD};
pub use config::{CollectionConfig, MatchingConfig, SearchConfig};
pub use error::{Result, SearchError, SearchErrorCode};
pub use field::{get_path, FieldSource};
pub use highlight::{highlight_match, highlight_match_with, highlight_ranges, HighlightMarker};
pub use matcher::{fuzzy_match, MatchResult, DEFAULT_MATCH_THRESHOLD, PREFIX_MATCH_SCORE};
pub use normalize::normalize_text;
pub use similarity::{levenshtein_distance, similarity};

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Best matching field score in `[0, 1]`
    pub score: f64,
    /// Field paths whose score reached the threshold, in request order
    pub matched_fields: Vec<String>,
}
