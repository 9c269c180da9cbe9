//! Edit-distance scoring.
//!
//! Both functions compare Unicode scalar values and ignore case, so
//! `"Fraction"` and `"fraction"` are identical.

/// Calculate case-insensitive Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
///
/// Keeps two rows of the DP matrix rather than the full table, so extra
/// space is O(len(b)) while time stays O(len(a) * len(b)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows of the DP matrix; row 0 is the cost of building b's prefixes from nothing
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if same_ignoring_case(a_chars[i - 1], b_chars[j - 1]) { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity between two strings in `[0, 1]`.
///
/// Computed as `1 - distance / max(len(a), len(b))`. Two empty strings are
/// identical (score 1); an empty string against a non-empty one scores 0.
///
/// # Example
/// ```
/// use shiksha_search::similarity;
///
/// assert_eq!(similarity("Belt", "belt"), 1.0);
/// assert_eq!(similarity("", "abc"), 0.0);
/// assert!((similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - distance as f64 / max_len as f64
}

#[inline]
fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
