//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use shiksha_search::highlight_ranges;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a `[0, 1]` score as a percentage
pub fn format_score(score: f64) -> String {
    format!("{:>3.0}%", score * 100.0)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Render `text` with query matches in bold yellow
pub fn render_highlighted(text: &str, query: &str) -> String {
    render_highlighted_with(text, query, |matched| matched.yellow().bold().to_string())
}

/// Render `text` with each query match passed through `style`
pub fn render_highlighted_with<F>(text: &str, query: &str, style: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for range in highlight_ranges(text, query) {
        out.push_str(&text[last..range.start]);
        out.push_str(&style(&text[range.clone()]));
        last = range.end;
    }
    out.push_str(&text[last..]);

    out
}
