use std::collections::HashSet;

use crate::synonyms::are_equivalent;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillMatch {
    fn full() -> Self {
        SkillMatch {
            score: 100.0,
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }
}

/// Score a volunteer's skills against an opportunity's required and
/// recommended skill sets. All inputs must already be normalized.
///
/// Required skills carry 80 of the 100 points, recommended skills the
/// remaining 20; an absent set yields its full share (nothing to satisfy).
/// A required skill that only matches by substring counts half and is
/// removed from the missing set - intentional leniency, not a bug.
pub fn score_skills(
    volunteer_skills: &HashSet<String>,
    required: &HashSet<String>,
    recommended: &HashSet<String>,
) -> SkillMatch {
    if required.is_empty() && recommended.is_empty() {
        return SkillMatch::full();
    }

    if volunteer_skills.is_empty() && !required.is_empty() {
        let mut missing: Vec<String> = required.iter().cloned().collect();
        missing.sort();
        return SkillMatch {
            score: 0.0,
            matched: Vec::new(),
            missing,
        };
    }

    let exact: HashSet<String> = required.intersection(volunteer_skills).cloned().collect();
    let partial: HashSet<String> = required
        .iter()
        .filter(|skill| !exact.contains(*skill))
        .filter(|skill| volunteer_skills.iter().any(|v| are_equivalent(skill, v)))
        .cloned()
        .collect();

    let required_part = if required.is_empty() {
        80.0
    } else {
        (exact.len() as f64 + 0.5 * partial.len() as f64) / required.len() as f64 * 80.0
    };

    let matched_recommended: HashSet<String> = recommended
        .iter()
        .filter(|skill| volunteer_skills.iter().any(|v| are_equivalent(skill, v)))
        .cloned()
        .collect();

    let recommended_part = if recommended.is_empty() {
        20.0
    } else {
        matched_recommended.len() as f64 / recommended.len() as f64 * 20.0
    };

    let mut matched: Vec<String> = exact
        .iter()
        .chain(partial.iter())
        .chain(matched_recommended.iter())
        .cloned()
        .collect();
    matched.sort();
    matched.dedup();

    let mut missing: Vec<String> = required
        .iter()
        .filter(|skill| !exact.contains(*skill) && !partial.contains(*skill))
        .cloned()
        .collect();
    missing.sort();

    SkillMatch {
        score: required_part + recommended_part,
        matched,
        missing,
    }
}
