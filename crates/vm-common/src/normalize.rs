use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// NFKC fold, lowercase, trim. Free-text tokens arrive with mixed width,
/// stray whitespace and inconsistent casing; every set comparison in the
/// matching core goes through this first.
pub fn normalize_token(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Elementwise normalization of a token collection, dropping entries that
/// normalize to the empty string.
pub fn normalize_set(tokens: &[String]) -> HashSet<String> {
    tokens
        .iter()
        .map(|t| normalize_token(t))
        .filter(|t| !t.is_empty())
        .collect()
}
