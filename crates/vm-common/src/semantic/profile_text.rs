use crate::{Opportunity, Volunteer};

fn join_clean(values: &[String]) -> Option<String> {
    let cleaned: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join(", "))
    }
}

/// Short descriptive text for the embedding side of a volunteer profile.
pub fn volunteer_text(volunteer: &Volunteer) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(name) = volunteer.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        parts.push(format!("Volunteer: {name}"));
    }
    if let Some(skills) = join_clean(&volunteer.skills) {
        parts.push(format!("Skills: {skills}"));
    }
    if let Some(interests) = join_clean(&volunteer.interests) {
        parts.push(format!("Interests: {interests}"));
    }

    parts.join("\n")
}

/// Short descriptive text for the embedding side of an opportunity.
pub fn opportunity_text(opportunity: &Opportunity) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(title) = opportunity
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        parts.push(format!("Opportunity: {title}"));
    }
    if let Some(skills) = join_clean(&opportunity.skills_required) {
        parts.push(format!("Required skills: {skills}"));
    }
    if let Some(interests) = join_clean(&opportunity.interests) {
        parts.push(format!("Interests: {interests}"));
    }
    if let Some(location) = opportunity
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        parts.push(format!("Location: {location}"));
    }
    if let Some(description) = opportunity
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        parts.push(format!("Description: {description}"));
    }

    parts.join("\n")
}
