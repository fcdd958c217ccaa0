use tracing::warn;

use crate::matching::{MatchingEngine, OpportunityMatch, VolunteerMatch};
use crate::repository::OrganizationDirectory;
use crate::{Opportunity, Volunteer};

pub const DEFAULT_MIN_SCORE: f64 = 50.0;
pub const DEFAULT_OPPORTUNITY_LIMIT: usize = 5;
pub const DEFAULT_VOLUNTEER_LIMIT: usize = 10;

const UNKNOWN_ORGANIZATION: &str = "Unknown Organization";

/// Thin facade over the engine for the common "top N above a floor" use.
pub struct RecommendationEngine {
    engine: MatchingEngine,
}

impl RecommendationEngine {
    pub fn new(engine: MatchingEngine) -> Self {
        Self { engine }
    }

    pub fn recommend_opportunities(
        &self,
        volunteer: &Volunteer,
        opportunities: &[Opportunity],
        top_n: usize,
        min_score: f64,
    ) -> Vec<OpportunityMatch> {
        let mut ranked =
            self.engine
                .rank_opportunities_for_volunteer(volunteer, opportunities, min_score);
        ranked.truncate(top_n);
        ranked
    }

    pub fn recommend_volunteers(
        &self,
        opportunity: &Opportunity,
        volunteers: &[Volunteer],
        top_n: usize,
        min_score: f64,
    ) -> Vec<VolunteerMatch> {
        let mut ranked =
            self.engine
                .rank_volunteers_for_opportunity(opportunity, volunteers, min_score);
        ranked.truncate(top_n);
        ranked
    }
}

/// Fill in organization names on ranked results that only carry an id.
/// A failed or empty lookup falls back to a placeholder; it never fails the
/// recommendation.
pub fn attach_organization_names(
    matches: &mut [OpportunityMatch],
    directory: &dyn OrganizationDirectory,
) {
    for item in matches {
        if item.opportunity.organization_name.is_some() {
            continue;
        }
        let Some(organization_id) = item.opportunity.organization_id else {
            continue;
        };

        let name = match directory.get_by_id(organization_id) {
            Ok(Some(organization)) => organization.name,
            Ok(None) => UNKNOWN_ORGANIZATION.to_string(),
            Err(err) => {
                warn!(
                    organization_id,
                    error = %err,
                    "organization lookup failed; using placeholder name"
                );
                UNKNOWN_ORGANIZATION.to_string()
            }
        };
        item.opportunity.organization_name = Some(name);
    }
}
