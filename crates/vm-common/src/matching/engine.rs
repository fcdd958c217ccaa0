use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use super::availability::score_availability;
use super::interests::score_interests;
use super::location::score_location;
use super::personality::score_personality;
use super::skills::score_skills;
use super::weights::{ConfigError, Weights, BASE_WEIGHTS, SEMANTIC_WEIGHTS};
use crate::normalize::normalize_set;
use crate::semantic::SemanticScorer;
use crate::{Opportunity, Volunteer};

/// Default multiplier applied per unit of personality similarity. Kept small
/// so personality alignment can nudge a ranking but never dominate it.
pub const DEFAULT_PERSONALITY_BOOST: f64 = 0.05;

fn env_personality_boost() -> f64 {
    std::env::var("VM_PERSONALITY_BOOST")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PERSONALITY_BOOST)
}

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    pub personality_boost: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: BASE_WEIGHTS,
            personality_boost: env_personality_boost(),
        }
    }
}

impl MatchingConfig {
    /// Weight table for rankings that include the embedding-based factor.
    pub fn semantic() -> Self {
        Self {
            weights: SEMANTIC_WEIGHTS,
            ..Self::default()
        }
    }
}

/// Coarse label over the final score, for compact summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchQuality {
    PerfectMatch,
    Match,
    PartialMatch,
    Miss,
}

impl MatchQuality {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            MatchQuality::PerfectMatch
        } else if score >= 70.0 {
            MatchQuality::Match
        } else if score >= 40.0 {
            MatchQuality::PartialMatch
        } else {
            MatchQuality::Miss
        }
    }
}

/// Per-factor evidence for one scored pair. All scores are rounded to one
/// decimal for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetails {
    pub skill_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub interest_score: f64,
    pub matching_interests: Vec<String>,
    pub availability_score: f64,
    pub location_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityMatch {
    pub opportunity: Opportunity,
    pub score: f64,
    pub quality: MatchQuality,
    pub details: MatchDetails,
}

impl OpportunityMatch {
    /// Integer view of the score, for compact summaries.
    pub fn score_int(&self) -> i64 {
        self.score.round() as i64
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerMatch {
    pub volunteer: Volunteer,
    pub score: f64,
    pub quality: MatchQuality,
    pub details: MatchDetails,
}

impl VolunteerMatch {
    pub fn score_int(&self) -> i64 {
        self.score.round() as i64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Multi-factor scoring and ranking over volunteer/opportunity pairs.
///
/// Pure and synchronous: no state is shared between rankings beyond the
/// static dictionaries and the optional embedder handle, so concurrent
/// invocations need no locking. Missing data never fails a candidate - each
/// factor resolves it to its documented neutral default - and the semantic
/// boundary swallows collaborator failure to 0, so a single candidate can
/// never abort a batch.
pub struct MatchingEngine {
    config: MatchingConfig,
    semantic: Option<SemanticScorer>,
}

impl MatchingEngine {
    /// Fails fast on a malformed weight table; nothing is ranked with
    /// unvalidated configuration.
    pub fn new(config: MatchingConfig) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        Ok(Self {
            config,
            semantic: None,
        })
    }

    /// Engine with an attached semantic scorer. The weight table must still
    /// sum to 1.0 with its semantic share.
    pub fn with_semantic(
        config: MatchingConfig,
        scorer: SemanticScorer,
    ) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        Ok(Self {
            config,
            semantic: Some(scorer),
        })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Rank opportunities for a volunteer, dropping anything below
    /// `min_score`. A result exactly at the threshold is kept. Ties keep
    /// their input order (stable sort), so rankings are deterministic.
    pub fn rank_opportunities_for_volunteer(
        &self,
        volunteer: &Volunteer,
        opportunities: &[Opportunity],
        min_score: f64,
    ) -> Vec<OpportunityMatch> {
        let volunteer_skills = normalize_set(&volunteer.skills);
        let volunteer_interests = normalize_set(&volunteer.interests);

        let mut matches: Vec<OpportunityMatch> = opportunities
            .iter()
            .filter_map(|opportunity| {
                let (score, details) = self.score_pair(
                    volunteer,
                    &volunteer_skills,
                    &volunteer_interests,
                    opportunity,
                );
                if score < min_score {
                    return None;
                }
                Some(OpportunityMatch {
                    opportunity: opportunity.clone(),
                    score: round1(score),
                    quality: MatchQuality::from_score(score),
                    details,
                })
            })
            .collect();

        sort_descending(&mut matches, |m| m.score);
        matches
    }

    /// Symmetric inverse view: rank volunteers for an opportunity, reusing
    /// the same scorers with the arguments swapped.
    pub fn rank_volunteers_for_opportunity(
        &self,
        opportunity: &Opportunity,
        volunteers: &[Volunteer],
        min_score: f64,
    ) -> Vec<VolunteerMatch> {
        let mut matches: Vec<VolunteerMatch> = volunteers
            .iter()
            .filter_map(|volunteer| {
                let volunteer_skills = normalize_set(&volunteer.skills);
                let volunteer_interests = normalize_set(&volunteer.interests);
                let (score, details) = self.score_pair(
                    volunteer,
                    &volunteer_skills,
                    &volunteer_interests,
                    opportunity,
                );
                if score < min_score {
                    return None;
                }
                Some(VolunteerMatch {
                    volunteer: volunteer.clone(),
                    score: round1(score),
                    quality: MatchQuality::from_score(score),
                    details,
                })
            })
            .collect();

        sort_descending(&mut matches, |m| m.score);
        matches
    }

    /// Weighted sum of the factor sub-scores, then the personality boost.
    ///
    /// Boost policy: the boosted score is deliberately NOT re-clamped to
    /// 100, so a perfect match with personality alignment can reach
    /// `100 * (1 + boost)`; the reported score carries that value.
    fn score_pair(
        &self,
        volunteer: &Volunteer,
        volunteer_skills: &HashSet<String>,
        volunteer_interests: &HashSet<String>,
        opportunity: &Opportunity,
    ) -> (f64, MatchDetails) {
        let skills = score_skills(
            volunteer_skills,
            &normalize_set(&opportunity.skills_required),
            &normalize_set(&opportunity.recommended_skills),
        );
        let interests = score_interests(volunteer_interests, &normalize_set(&opportunity.interests));
        let availability =
            score_availability(&volunteer.availability, &opportunity.time_requirements);
        let location = score_location(
            volunteer.location.as_deref(),
            opportunity.location.as_deref(),
        );
        let personality =
            score_personality(&volunteer.personality_traits, &opportunity.personality_traits);
        let semantic = self
            .semantic
            .as_ref()
            .map(|scorer| scorer.score(volunteer, opportunity));

        let weights = self.config.weights;
        let mut total = weights.skills * skills.score
            + weights.interests * interests.score
            + weights.availability * availability
            + weights.location * location
            + weights.semantic * semantic.unwrap_or(0.0);

        if let Some(similarity) = personality {
            if similarity > 0.0 {
                total *= 1.0 + similarity * self.config.personality_boost;
            }
        }

        let details = MatchDetails {
            skill_score: round1(skills.score),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            interest_score: round1(interests.score),
            matching_interests: interests.matching,
            availability_score: round1(availability),
            location_score: round1(location),
            semantic_score: semantic.map(round1),
            personality_score: personality.map(round1),
        };

        (total, details)
    }
}

fn sort_descending<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    // sort_by is stable: equal scores keep their input order.
    items.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::TimeRequirements;

    fn base_volunteer() -> Volunteer {
        Volunteer {
            id: Some(1),
            skills: vec!["teaching".into()],
            interests: vec!["education".into()],
            availability: HashMap::from([("weekday".to_string(), true)]),
            location: Some("tirane".into()),
            ..Volunteer::default()
        }
    }

    fn base_opportunity() -> Opportunity {
        Opportunity {
            id: Some(10),
            title: Some("Mentor nxënësish".into()),
            skills_required: vec!["teaching".into()],
            interests: vec!["education".into()],
            time_requirements: TimeRequirements::Slots(HashMap::from([(
                "weekday".to_string(),
                true,
            )])),
            location: Some("Tirane".into()),
            ..Opportunity::default()
        }
    }

    fn engine() -> MatchingEngine {
        MatchingEngine::new(MatchingConfig {
            weights: BASE_WEIGHTS,
            personality_boost: DEFAULT_PERSONALITY_BOOST,
        })
        .expect("base weights are valid")
    }

    #[test]
    fn perfect_alignment_scores_exactly_one_hundred() {
        let results =
            engine().rank_opportunities_for_volunteer(&base_volunteer(), &[base_opportunity()], 0.0);

        assert_eq!(results.len(), 1);
        let top = &results[0];
        assert_eq!(top.score, 100.0);
        assert_eq!(top.score_int(), 100);
        assert_eq!(top.quality, MatchQuality::PerfectMatch);
        assert_eq!(top.details.skill_score, 100.0);
        assert_eq!(top.details.interest_score, 100.0);
        assert_eq!(top.details.availability_score, 100.0);
        assert_eq!(top.details.location_score, 100.0);
        assert_eq!(top.details.semantic_score, None);
        assert_eq!(top.details.personality_score, None);
    }

    #[test]
    fn candidates_pass_through_unmodified() {
        let opportunity = base_opportunity();
        let results =
            engine().rank_opportunities_for_volunteer(&base_volunteer(), &[opportunity.clone()], 0.0);
        assert_eq!(results[0].opportunity, opportunity);
    }

    #[test]
    fn ranking_is_a_stable_descending_sort() {
        let strong_a = Opportunity {
            id: Some(1),
            ..base_opportunity()
        };
        let strong_b = Opportunity {
            id: Some(2),
            ..base_opportunity()
        };
        let weak = Opportunity {
            id: Some(3),
            location: Some("gjirokaster".into()),
            ..base_opportunity()
        };

        let results = engine().rank_opportunities_for_volunteer(
            &base_volunteer(),
            &[strong_a, weak, strong_b],
            0.0,
        );

        let ids: Vec<Option<i64>> = results.iter().map(|m| m.opportunity.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn min_score_keeps_the_exact_threshold() {
        let perfect = base_opportunity();
        let weaker = Opportunity {
            location: Some("gjirokaster".into()),
            ..base_opportunity()
        };

        let results = engine().rank_opportunities_for_volunteer(
            &base_volunteer(),
            &[perfect, weaker],
            100.0,
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 100.0);
    }

    #[test]
    fn personality_boost_is_not_reclamped() {
        let volunteer = Volunteer {
            personality_traits: HashMap::from([("empathy".to_string(), 1.0)]),
            ..base_volunteer()
        };
        let opportunity = Opportunity {
            personality_traits: HashMap::from([("empathy".to_string(), 1.0)]),
            ..base_opportunity()
        };

        let results = engine().rank_opportunities_for_volunteer(&volunteer, &[opportunity], 0.0);

        assert_eq!(results[0].score, 105.0);
        assert_eq!(results[0].details.personality_score, Some(1.0));
    }

    #[test]
    fn inapplicable_personality_applies_no_boost() {
        let volunteer = Volunteer {
            personality_traits: HashMap::from([("empathy".to_string(), 1.0)]),
            ..base_volunteer()
        };
        // opportunity declares no traits at all
        let results =
            engine().rank_opportunities_for_volunteer(&volunteer, &[base_opportunity()], 0.0);

        assert_eq!(results[0].score, 100.0);
        assert_eq!(results[0].details.personality_score, None);
    }

    #[test]
    fn symmetric_view_ranks_volunteers() {
        let stronger = base_volunteer();
        let weaker = Volunteer {
            id: Some(2),
            skills: vec![],
            ..base_volunteer()
        };

        let results = engine().rank_volunteers_for_opportunity(
            &base_opportunity(),
            &[weaker, stronger],
            0.0,
        );

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].volunteer.id, Some(1));
        assert!(results[0].score > results[1].score);
        assert_eq!(results[1].details.missing_skills, vec!["teaching"]);
    }

    #[test]
    fn missing_data_degrades_to_defaults_instead_of_failing() {
        let results = engine().rank_opportunities_for_volunteer(
            &Volunteer::default(),
            &[Opportunity::default()],
            0.0,
        );

        assert_eq!(results.len(), 1);
        let details = &results[0].details;
        assert_eq!(details.skill_score, 100.0); // nothing required
        assert_eq!(details.interest_score, 50.0); // no preference expressed
        assert_eq!(details.availability_score, 100.0); // nothing demanded
        assert_eq!(details.location_score, 50.0); // both sides unknown
    }

    #[test]
    fn rejects_malformed_weights_before_ranking() {
        let config = MatchingConfig {
            weights: Weights {
                skills: 0.9,
                interests: 0.9,
                semantic: 0.0,
                availability: 0.0,
                location: 0.0,
            },
            personality_boost: DEFAULT_PERSONALITY_BOOST,
        };
        assert!(MatchingEngine::new(config).is_err());
    }
}
