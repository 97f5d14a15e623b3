//! Query normalization: maps equivalent-looking queries to one cache key.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Trim, lowercase, and collapse runs of two or more whitespace characters
/// into a single space.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, " ").into_owned()
}

/// A normalized query is searchable only if it is non-empty.
pub fn is_valid_query(normalized: &str) -> bool {
    !normalized.is_empty()
}
