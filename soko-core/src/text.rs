//! Token normalization for the term index.
//!
//! Pipeline: lowercase → split on non-alphanumeric → drop one-char
//! fragments. No stemming: matching is exact-token with alias/locale
//! expansion done at indexing time.

pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .map(str::to_owned)
        .collect()
}

/// Tokenize and deduplicate, preserving first-occurrence order.
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
