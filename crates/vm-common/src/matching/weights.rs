use thiserror::Error;

/// Weights without a semantic scorer attached.
/// Skills dominate, interests second; availability and location share the
/// remainder.
pub const BASE_WEIGHTS: Weights = Weights {
    skills: 0.45,
    interests: 0.25,
    semantic: 0.0,
    availability: 0.15,
    location: 0.15,
};

/// Weights when an embedding-based semantic scorer is attached.
/// The semantic share is carved out of interests and location so skills keep
/// the lead.
pub const SEMANTIC_WEIGHTS: Weights = Weights {
    skills: 0.40,
    interests: 0.20,
    semantic: 0.15,
    availability: 0.15,
    location: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub interests: f64,
    pub semantic: f64,
    pub availability: f64,
    pub location: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("factor weights must sum to 1.0, got {sum}")]
    WeightSumMismatch { sum: f64 },
    #[error("negative weight for {factor}: {value}")]
    NegativeWeight { factor: &'static str, value: f64 },
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.interests + self.semantic + self.availability + self.location
    }

    /// Rejects malformed weight tables before any ranking runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("skills", self.skills),
            ("interests", self.interests),
            ("semantic", self.semantic),
            ("availability", self.availability),
            ("location", self.location),
        ];
        for (factor, value) in factors {
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { factor, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSumMismatch { sum });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_tables_sum_to_one() {
        assert!((BASE_WEIGHTS.sum() - 1.0).abs() < 1e-6);
        assert!((SEMANTIC_WEIGHTS.sum() - 1.0).abs() < 1e-6);
        assert!(BASE_WEIGHTS.validate().is_ok());
        assert!(SEMANTIC_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn rejects_table_not_summing_to_one() {
        let weights = Weights {
            skills: 0.5,
            ..BASE_WEIGHTS
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::WeightSumMismatch { .. })
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let weights = Weights {
            skills: -0.1,
            interests: 0.55,
            semantic: 0.0,
            availability: 0.3,
            location: 0.25,
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::NegativeWeight {
                factor: "skills",
                ..
            })
        ));
    }
}
