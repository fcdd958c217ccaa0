use std::collections::HashMap;

use crate::TimeRequirements;
use crate::normalize::normalize_token;

// Slot keywords carry both the Albanian and English terms, since opportunity
// descriptions arrive in either language.
const WEEKDAY_TERMS: &[&str] = &[
    "gjatë javës",
    "gjate javes",
    "ditët e javës",
    "ditet e javes",
    "ditë jave",
    "weekday",
    "weekdays",
];
const WEEKEND_TERMS: &[&str] = &["fundjavë", "fundjave", "weekend", "weekends"];
const MORNING_TERMS: &[&str] = &["mëngjes", "mengjes", "paradite", "morning", "mornings"];
const AFTERNOON_TERMS: &[&str] = &["pasdite", "afternoon", "afternoons"];
const EVENING_TERMS: &[&str] = &["mbrëmje", "mbremje", "evening", "evenings"];
const FLEXIBLE_TERMS: &[&str] = &["fleksibël", "fleksibel", "flexible", "orar fleksibël"];

/// Availability fit between a volunteer's declared slots and an
/// opportunity's time requirements (structured or free-text).
pub fn score_availability(
    volunteer_availability: &HashMap<String, bool>,
    time_requirements: &TimeRequirements,
) -> f64 {
    if time_requirements.is_empty() {
        return 100.0; // nothing demanded
    }

    match time_requirements {
        TimeRequirements::Slots(slots) => score_slots(volunteer_availability, slots),
        TimeRequirements::FreeText(text) => score_free_text(volunteer_availability, text),
    }
}

fn score_slots(
    volunteer_availability: &HashMap<String, bool>,
    required_slots: &HashMap<String, bool>,
) -> f64 {
    if volunteer_availability.is_empty() {
        return 50.0; // unknown, assume partial fit
    }

    let mut required = 0usize;
    let mut covered = 0usize;
    for (slot, needed) in required_slots {
        if !*needed {
            continue;
        }
        required += 1;
        if volunteer_availability.get(slot).copied().unwrap_or(false) {
            covered += 1;
        }
    }

    if required == 0 {
        return 100.0;
    }

    covered as f64 / required as f64 * 100.0
}

/// Keyword heuristic over free-text requirements: start neutral at 50, add
/// for each mentioned slot the volunteer covers, subtract for each they do
/// not, and reward explicit flexibility.
fn score_free_text(volunteer_availability: &HashMap<String, bool>, text: &str) -> f64 {
    let text = normalize_token(text);
    let mut score = 50.0;

    let checks: [(&str, &[&str], f64, f64); 5] = [
        ("weekday", WEEKDAY_TERMS, 20.0, 10.0),
        ("weekend", WEEKEND_TERMS, 20.0, 10.0),
        ("morning", MORNING_TERMS, 10.0, 5.0),
        ("afternoon", AFTERNOON_TERMS, 10.0, 5.0),
        ("evening", EVENING_TERMS, 10.0, 5.0),
    ];

    for (slot, terms, bonus, penalty) in checks {
        if !terms.iter().any(|term| text.contains(term)) {
            continue;
        }
        if volunteer_availability.get(slot).copied().unwrap_or(false) {
            score += bonus;
        } else {
            score -= penalty;
        }
    }

    if FLEXIBLE_TERMS.iter().any(|term| text.contains(term)) {
        score += 15.0;
    }

    score.clamp(0.0, 100.0)
}
