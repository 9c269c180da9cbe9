//! Subcommand implementations
//!
//! Each command returns `Ok(true)` when it found something, `Ok(false)` when
//! it ran fine but nothing matched.

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use shiksha_cli::output::{format_count, format_score, render_highlighted, Status};
use shiksha_search::{
    fuzzy_match, highlight_match_with, normalize_text, parse_items, search_ranked, FieldSource,
    HighlightMarker, SearchResult,
};
use shiksha_telemetry::Timer;
use std::borrow::Cow;
use std::io::Read;

/// Search options after merging flags over configuration
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub threshold: f64,
    pub limit: Option<usize>,
    pub normalize: bool,
}

/// Record view whose fields are folded with [`normalize_text`]
struct Normalized<'a>(&'a Value);

impl FieldSource for Normalized<'_> {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        self.0.field(path).map(|text| Cow::Owned(normalize_text(&text)))
    }
}

/// Search records from a file or stdin
pub fn search(source: &str, query: &str, fields: &[String], options: &SearchOptions, json: bool) -> Result<bool> {
    check_threshold(options.threshold)?;

    let content = read_source(source)?;
    let items = parse_items(&content).with_context(|| format!("Failed to load records from {}", source))?;

    let timer = Timer::start("search");
    let mut hits = rank(&items, query, fields, options);
    timer.stop();

    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }

    if json {
        let output: Vec<Value> = hits
            .iter()
            .map(|hit| {
                json!({
                    "item": hit.item,
                    "score": hit.score,
                    "matched_fields": hit.matched_fields,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(!hits.is_empty());
    }

    if hits.is_empty() {
        Status::warning(&format!("No records match \"{}\"", query));
        return Ok(false);
    }

    Status::header(&format!(
        "{} for \"{}\" in {}",
        format_count(hits.len(), "match", "matches"),
        query,
        format_count(items.len(), "record", "records")
    ));

    for hit in &hits {
        let label = fields
            .iter()
            .find_map(|field| hit.item.field(field))
            .unwrap_or(Cow::Borrowed("(no value)"));

        let score = if query.trim().is_empty() {
            "   -".to_string()
        } else {
            format_score(hit.score)
        };

        println!(
            "{}  {}  {}",
            score.cyan(),
            render_highlighted(&label, query),
            hit.matched_fields.join(", ").dimmed()
        );
    }

    Ok(true)
}

/// Rank records, passing everything through for an empty query
fn rank<'a>(items: &'a [Value], query: &str, fields: &[String], options: &SearchOptions) -> Vec<SearchResult<&'a Value>> {
    if query.trim().is_empty() {
        return items
            .iter()
            .map(|item| SearchResult {
                item,
                score: 0.0,
                matched_fields: Vec::new(),
            })
            .collect();
    }

    if !options.normalize {
        return search_ranked(items, query, fields, options.threshold);
    }

    let views: Vec<Normalized<'a>> = items.iter().map(Normalized).collect();
    search_ranked(&views, &normalize_text(query), fields, options.threshold)
        .into_iter()
        .map(|hit| SearchResult {
            item: hit.item.0,
            score: hit.score,
            matched_fields: hit.matched_fields,
        })
        .collect()
}

/// Match a single text against a query
pub fn match_text(text: &str, query: &str, threshold: f64, json: bool) -> Result<bool> {
    check_threshold(threshold)?;
    let result = fuzzy_match(text, query, threshold);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else if result.matches {
        Status::success(&format!("match (score {:.4})", result.score));
    } else {
        Status::warning(&format!("no match (score {:.4}, threshold {})", result.score, threshold));
    }

    Ok(result.matches)
}

/// Print the similarity of two strings
pub fn similarity(a: &str, b: &str, json: bool) -> Result<bool> {
    let score = shiksha_search::similarity(a, b);
    let distance = shiksha_search::levenshtein_distance(a, b);

    if json {
        println!("{}", json!({ "similarity": score, "distance": distance }));
    } else {
        println!("{:.4}", score);
    }

    Ok(true)
}

/// Print `text` with query words marked up
pub fn highlight(text: &str, query: &str, marker: &HighlightMarker, json: bool) -> Result<bool> {
    let marked = highlight_match_with(text, query, marker);

    if json {
        println!("{}", json!({ "highlighted": marked }));
    } else {
        println!("{}", marked);
    }

    Ok(marked != text)
}

/// Print the normalized form of `text`
pub fn normalize(text: &str, json: bool) -> Result<bool> {
    let normalized = normalize_text(text);

    if json {
        println!("{}", json!({ "normalized": normalized }));
    } else {
        println!("{}", normalized);
    }

    Ok(true)
}

fn check_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("threshold must be between 0 and 1, got {}", threshold);
    }
    Ok(())
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read records from stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}
