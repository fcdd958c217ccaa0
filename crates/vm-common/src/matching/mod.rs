pub mod availability;
pub mod engine;
pub mod interests;
pub mod location;
pub mod personality;
pub mod skills;
pub mod weights;

pub use engine::{
    MatchDetails, MatchQuality, MatchingConfig, MatchingEngine, OpportunityMatch, VolunteerMatch,
    DEFAULT_PERSONALITY_BOOST,
};
pub use weights::{ConfigError, Weights, BASE_WEIGHTS, SEMANTIC_WEIGHTS};
