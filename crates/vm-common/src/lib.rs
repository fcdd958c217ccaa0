pub mod logging;
pub mod matching;
pub mod normalize;
pub mod recommend;
pub mod repository;
pub mod semantic;
pub mod synonyms;
pub mod text;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Commonly used data models for matching functions.

/// A requester profile. Created by the registration flow; the matching core
/// only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Named time slot ("weekday", "morning", ...) -> is available.
    #[serde(default)]
    pub availability: HashMap<String, bool>,
    #[serde(default)]
    pub location: Option<String>,
    /// Trait name -> intensity, unnormalized.
    #[serde(default)]
    pub personality_traits: HashMap<String, f64>,
}

/// Structured slot requirements, or a free-text description pasted by the
/// organization. JSON carries either form, hence the untagged enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeRequirements {
    Slots(HashMap<String, bool>),
    FreeText(String),
}

impl Default for TimeRequirements {
    fn default() -> Self {
        TimeRequirements::Slots(HashMap::new())
    }
}

impl TimeRequirements {
    pub fn is_empty(&self) -> bool {
        match self {
            TimeRequirements::Slots(slots) => slots.is_empty(),
            TimeRequirements::FreeText(text) => text.trim().is_empty(),
        }
    }
}

/// A candidate record ranked against volunteers. Display fields (title,
/// description, date, duration, organization) pass through matching
/// unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    /// Nice-to-have skills, weighted below `skills_required`.
    #[serde(default)]
    pub recommended_skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub time_requirements: TimeRequirements,
    #[serde(default)]
    pub personality_traits: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
