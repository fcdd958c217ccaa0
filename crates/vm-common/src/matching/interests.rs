use std::collections::HashSet;

use crate::synonyms::are_equivalent;

#[derive(Debug, Clone, PartialEq)]
pub struct InterestMatch {
    pub score: f64,
    pub matching: Vec<String>,
}

/// Discounted Jaccard similarity over two normalized interest sets: exact
/// matches count in full, resolver-level matches at 75%.
///
/// An opportunity with no declared interests expresses no preference and
/// scores a neutral 50; a volunteer with no interests cannot express
/// alignment and scores a low 30.
pub fn score_interests(
    volunteer_interests: &HashSet<String>,
    opportunity_interests: &HashSet<String>,
) -> InterestMatch {
    if opportunity_interests.is_empty() {
        return InterestMatch {
            score: 50.0,
            matching: Vec::new(),
        };
    }

    if volunteer_interests.is_empty() {
        return InterestMatch {
            score: 30.0,
            matching: Vec::new(),
        };
    }

    let exact: HashSet<String> = volunteer_interests
        .intersection(opportunity_interests)
        .cloned()
        .collect();

    let semantic: HashSet<String> = opportunity_interests
        .iter()
        .filter(|interest| !exact.contains(*interest))
        .filter(|interest| {
            volunteer_interests
                .iter()
                .any(|v| !exact.contains(v) && are_equivalent(interest, v))
        })
        .cloned()
        .collect();

    let union_len = volunteer_interests.union(opportunity_interests).count();
    let score = (exact.len() as f64 + 0.75 * semantic.len() as f64) / union_len as f64 * 100.0;

    let mut matching: Vec<String> = exact.iter().chain(semantic.iter()).cloned().collect();
    matching.sort();

    InterestMatch { score, matching }
}
