use std::collections::HashSet;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_token;
use crate::synonyms::{INTEREST_CONCEPTS, SKILL_CONCEPTS};

/// Albanian stopwords plus the handful of English fillers that show up in
/// mixed-language descriptions.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "dhe", "në", "e", "të", "së", "për", "me", "si", "që", "nga", "një", "është", "më", "po",
        "ka", "kjo", "këtë", "këto", "ky", "jam", "janë", "do", "duke", "ishte", "kur", "ku", "pa",
        "pasi", "por", "sepse", "deri", "këtu", "kemi", "kishte", "mund", "nuk", "shumë", "çdo",
        "atë", "ai", "ajo", "ata", "ato", "jemi", "duhet", "i", "o", "a", "u", "ne", "the", "and",
        "of", "in", "for", "with", "to", "at", "on", "is", "are",
    ]
    .into_iter()
    .collect()
});

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{P}\p{S}]+").unwrap());

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Lowercase, strip punctuation, drop stopwords. Used before dictionary
/// extraction and by the hash embedder's tokenizer.
pub fn preprocess(text: &str) -> String {
    let lowered = normalize_token(text);
    let stripped = PUNCTUATION.replace_all(&lowered, " ");

    stripped
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_concepts(text: &str, table: &[(&'static str, &[&'static str])]) -> Vec<String> {
    let processed = preprocess(text);
    if processed.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = table
        .iter()
        .filter(|(concept, synonyms)| {
            processed.contains(concept) || synonyms.iter().any(|s| processed.contains(s))
        })
        .map(|(concept, _)| concept.to_string())
        .collect();

    found.sort();
    found.dedup();
    found
}

/// Pull canonical skill concepts out of free text (bio, cover note).
pub fn extract_skills(text: &str) -> Vec<String> {
    extract_concepts(text, SKILL_CONCEPTS)
}

/// Pull canonical interest concepts out of free text.
pub fn extract_interests(text: &str) -> Vec<String> {
    extract_concepts(text, INTEREST_CONCEPTS)
}
