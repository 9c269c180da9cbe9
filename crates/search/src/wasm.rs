//! WASM bindings for search utilities.
//!
//! Exposed under the camelCase names the browser UI already calls, so the
//! module is a drop-in replacement for a JavaScript search helper.

use wasm_bindgen::prelude::*;

/// Similarity of two strings in `[0, 1]`.
#[wasm_bindgen(js_name = similarity)]
pub fn similarity_score(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Fuzzy match one text against a query.
///
/// # Arguments
/// * `text` - Text to search in
/// * `query` - Search query
/// * `threshold` - Minimum score, defaults to 0.6
///
/// # Returns
/// JSON object with `matches` and `score` fields
#[wasm_bindgen(js_name = fuzzyMatch)]
pub fn match_text(text: &str, query: &str, threshold: Option<f64>) -> String {
    let result = crate::fuzzy_match(text, query, threshold.unwrap_or(crate::DEFAULT_MATCH_THRESHOLD));
    serde_json::to_string(&result).unwrap_or_else(|_| r#"{"matches":false,"score":0}"#.to_string())
}

/// Search items and return the matching ones, best first.
///
/// # Arguments
/// * `items_json` - JSON array of records
/// * `query` - Search query
/// * `fields_json` - JSON array of dot-notation field paths
/// * `threshold` - Minimum per-field score, defaults to 0.5
///
/// # Returns
/// JSON array of the matching records
#[wasm_bindgen(js_name = fuzzySearch)]
pub fn search_items(
    items_json: &str,
    query: &str,
    fields_json: &str,
    threshold: Option<f64>,
) -> Result<String, JsValue> {
    let items = crate::parse_items(items_json)
        .map_err(|e| JsValue::from_str(&format!("Items parse error: {}", e)))?;
    let fields: Vec<String> = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("Fields parse error: {}", e)))?;

    let threshold = threshold.unwrap_or(crate::DEFAULT_SEARCH_THRESHOLD);
    let results = crate::fuzzy_search(&items, query, &fields, threshold);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Wrap query words found in `text` in `<mark>` tags.
#[wasm_bindgen(js_name = highlightMatch)]
pub fn highlight(text: &str, query: &str) -> String {
    crate::highlight_match(text, query)
}

/// Fold accents and punctuation out of `text`.
#[wasm_bindgen(js_name = normalizeText)]
pub fn normalize(text: &str) -> String {
    crate::normalize_text(text)
}
