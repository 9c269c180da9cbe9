//! Ranked multi-field search over a collection.
//!
//! Every item is scored by running [`fuzzy_match`] on each requested field and
//! keeping the best matching field. Cost is `O(n·f·w²·L²)` for `n` items, `f`
//! fields, `w` words per field and `L` characters per word. That is fine for the
//! lists a UI filters as the user types (tens to hundreds of records) and is
//! not meant for large corpora, which need an index instead.

use crate::error::{Result, SearchError};
use crate::{fuzzy_match, FieldSource, SearchResult};
use serde_json::Value;
use tracing::{debug, trace};

/// Default threshold for [`fuzzy_search`].
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.5;

/// Filter `items` to those matching `query` in any of `fields`, best first.
///
/// An empty or whitespace-only query is not a filter: every item is returned
/// in its original order. Items scoring equally keep their relative order.
///
/// # Arguments
/// * `items` - Records to search
/// * `query` - Search query
/// * `fields` - Dot-notation field paths to search in
/// * `threshold` - Minimum per-field score for a field to count as matched
///
/// # Example
/// ```
/// use serde_json::json;
/// use shiksha_search::fuzzy_search;
///
/// let clusters = vec![
///     json!({"name": "Tribal Belt Schools - Gadchiroli"}),
///     json!({"name": "Urban High School - Pune"}),
///     json!({"name": "Coastal Primary - Ratnagiri"}),
/// ];
///
/// let found = fuzzy_search(&clusters, "gadchiro", &["name"], 0.5);
/// assert_eq!(found, vec![&clusters[0]]);
/// ```
pub fn fuzzy_search<'a, T, F>(items: &'a [T], query: &str, fields: &[F], threshold: f64) -> Vec<&'a T>
where
    T: FieldSource,
    F: AsRef<str>,
{
    if query.trim().is_empty() {
        return items.iter().collect();
    }

    search_ranked(items, query, fields, threshold)
        .into_iter()
        .map(|hit| hit.item)
        .collect()
}

/// Like [`fuzzy_search`] but keeps each item's score and matched fields.
///
/// An empty query yields no hits here, since there is nothing to score.
pub fn search_ranked<'a, T, F>(
    items: &'a [T],
    query: &str,
    fields: &[F],
    threshold: f64,
) -> Vec<SearchResult<&'a T>>
where
    T: FieldSource,
    F: AsRef<str>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchResult<&'a T>> = items
        .iter()
        .filter_map(|item| score_item(item, query, fields, threshold))
        .collect();

    // Vec::sort_by is stable, so ties keep input order
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        query = query,
        items = items.len(),
        fields = fields.len(),
        hits = hits.len(),
        "fuzzy search complete"
    );

    hits
}

/// Decode a JSON array of records to search.
///
/// # Example
/// ```
/// use shiksha_search::parse_items;
///
/// let items = parse_items(r#"[{"name": "Pune"}, {"name": "Nagpur"}]"#).unwrap();
/// assert_eq!(items.len(), 2);
/// assert!(parse_items(r#"{"name": "Pune"}"#).is_err());
/// ```
pub fn parse_items(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Ok(items),
        other => Err(SearchError::InvalidItems(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn score_item<'a, T, F>(item: &'a T, query: &str, fields: &[F], threshold: f64) -> Option<SearchResult<&'a T>>
where
    T: FieldSource,
    F: AsRef<str>,
{
    let mut best: f64 = 0.0;
    let mut matched_fields = Vec::new();

    for field in fields {
        let path = field.as_ref();
        let Some(value) = item.field(path) else {
            continue;
        };

        let result = fuzzy_match(&value, query, threshold);
        trace!(field = path, score = result.score, matches = result.matches, "field scored");
        if result.matches {
            matched_fields.push(path.to_string());
            best = best.max(result.score);
        }
    }

    (best > 0.0).then_some(SearchResult {
        item,
        score: best,
        matched_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clusters() -> Vec<Value> {
        vec![
            json!({"name": "Tribal Belt Schools - Gadchiroli", "geographic_type": "tribal"}),
            json!({"name": "Urban High School - Pune", "geographic_type": "urban"}),
            json!({"name": "Coastal Primary - Ratnagiri", "geographic_type": "coastal"}),
        ]
    }

    #[test]
    fn test_gadchiroli_scenario() {
        let items = clusters();
        let found = fuzzy_search(&items, "gadchiro", &["name"], 0.5);
        assert_eq!(found, vec![&items[0]]);
    }

    #[test]
    fn test_empty_query_passes_everything_through() {
        let items = clusters();
        let found = fuzzy_search(&items, "", &["name"], 0.5);
        assert_eq!(found, items.iter().collect::<Vec<_>>());

        let found = fuzzy_search(&items, "   ", &["name"], 0.5);
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_empty_query_has_no_ranked_hits() {
        assert!(search_ranked(&clusters(), " ", &["name"], 0.5).is_empty());
    }

    #[test]
    fn test_no_fields_matches_nothing() {
        let fields: [&str; 0] = [];
        assert!(fuzzy_search(&clusters(), "pune", &fields, 0.5).is_empty());
    }

    #[test]
    fn test_best_field_wins_and_is_recorded() {
        let items = clusters();
        // "tribal" vs "urban" scores exactly 0.5, so stay above it
        let hits = search_ranked(&items, "urban", &["name", "geographic_type", "missing.path"], 0.6);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 1.0);
        assert_eq!(hits[0].matched_fields, vec!["name", "geographic_type"]);
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let items = vec![
            json!({"title": "Science lab safety"}),
            json!({"title": "Fractions"}),
            json!({"title": "Sci fair"}),
        ];
        // "Science lab safety" contains it (1.0), "Sci fair" prefix-matches (0.85)
        let hits = search_ranked(&items, "science", &["title"], 0.5);
        let titles: Vec<_> = hits.iter().map(|h| h.item["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["Science lab safety", "Sci fair"]);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            json!({"id": 1, "title": "Module: Pune cluster"}),
            json!({"id": 2, "title": "Pune onboarding"}),
            json!({"id": 3, "title": "Nagpur"}),
            json!({"id": 4, "title": "pune"}),
        ];
        let ids: Vec<_> = fuzzy_search(&items, "pune", &["title"], 0.5)
            .into_iter()
            .map(|item| item["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_sub_threshold_fields_are_ignored() {
        let items = vec![json!({"name": "Coastal Primary"})];
        // "coastel" is close enough at 0.5 but not at 0.95
        assert_eq!(fuzzy_search(&items, "coastel", &["name"], 0.5).len(), 1);
        assert!(fuzzy_search(&items, "coastel", &["name"], 0.95).is_empty());
    }

    #[test]
    fn test_nested_fields_and_numbers() {
        let items = vec![
            json!({"cluster": {"name": "Gadchiroli"}, "pages": 120}),
            json!({"cluster": null, "pages": 64}),
        ];
        assert_eq!(fuzzy_search(&items, "gadchiroli", &["cluster.name"], 0.5), vec![&items[0]]);
        assert_eq!(fuzzy_search(&items, "64", &["pages"], 0.5), vec![&items[1]]);
    }

    #[test]
    fn test_owned_field_names() {
        let fields = vec!["name".to_string()];
        assert_eq!(fuzzy_search(&clusters(), "ratnagiri", &fields, 0.5).len(), 1);
    }

    #[test]
    fn test_parse_items_rejects_non_arrays() {
        let err = parse_items("42").unwrap_err();
        assert_eq!(err.to_string(), "Invalid items: expected a JSON array, got a number");
        assert!(matches!(parse_items("[1,"), Err(SearchError::JsonError(_))));
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let items = clusters();
        let first = fuzzy_search(&items, "school", &["name", "geographic_type"], 0.3);
        let second = fuzzy_search(&items, "school", &["name", "geographic_type"], 0.3);
        assert_eq!(first, second);
    }
}
