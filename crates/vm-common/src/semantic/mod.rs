pub mod config;
pub mod embedding;
pub mod hash_embedder;
pub mod profile_text;
pub mod provider;
pub mod similarity;

use std::sync::Arc;

pub use config::SemanticConfig;
pub use embedding::Embedding;
pub use hash_embedder::HashEmbedder;
pub use provider::{init_semantic_from_env, shared_embedder};
pub use similarity::cosine_similarity;

use thiserror::Error;
use tracing::warn;

use crate::{Opportunity, Volunteer};
use self::profile_text::{opportunity_text, volunteer_text};

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding backend unavailable: {0}")]
    Unavailable(String),
    #[error("embedding backend failed: {0}")]
    Backend(String),
}

/// Text embedding backend behind the semantic scorer.
///
/// Implementations must be cheap to share (`Arc`) and safe to call
/// concurrently; construction may be expensive, which is why the default
/// instance lives behind [`provider::shared_embedder`].
pub trait ProfileEmbedder: Send + Sync {
    /// Implementation name ("hash", ...), recorded for diagnostics.
    fn name(&self) -> &'static str;

    /// Model generation. Bump whenever the token design changes.
    fn version(&self) -> &str;

    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;
}

/// Embedder factory. Unknown names fall back to the deterministic hash
/// implementation rather than failing.
pub fn create_embedder(name: &str, config: SemanticConfig) -> Arc<dyn ProfileEmbedder> {
    match name {
        "hash" => Arc::new(HashEmbedder::new(config)),
        other => {
            warn!(embedder = other, "unknown embedder name; using hash");
            Arc::new(HashEmbedder::new(config))
        }
    }
}

/// Similarity between a volunteer and an opportunity, in [0, 100].
///
/// Every failure mode degrades to 0.0: empty profile text, a backend error,
/// or a dimension mismatch. Nothing here may propagate past the aggregator.
pub struct SemanticScorer {
    embedder: Arc<dyn ProfileEmbedder>,
}

impl SemanticScorer {
    pub fn new(embedder: Arc<dyn ProfileEmbedder>) -> Self {
        Self { embedder }
    }

    pub fn embedder_name(&self) -> &'static str {
        self.embedder.name()
    }

    pub fn score(&self, volunteer: &Volunteer, opportunity: &Opportunity) -> f64 {
        let volunteer_summary = volunteer_text(volunteer);
        let opportunity_summary = opportunity_text(opportunity);
        if volunteer_summary.is_empty() || opportunity_summary.is_empty() {
            return 0.0;
        }

        let volunteer_embedding = match self.embedder.embed(&volunteer_summary) {
            Ok(embedding) => embedding,
            Err(err) => {
                warn!(
                    embedder = self.embedder.name(),
                    error = %err,
                    "volunteer embedding failed; semantic score falls back to 0"
                );
                return 0.0;
            }
        };
        let opportunity_embedding = match self.embedder.embed(&opportunity_summary) {
            Ok(embedding) => embedding,
            Err(err) => {
                warn!(
                    embedder = self.embedder.name(),
                    error = %err,
                    "opportunity embedding failed; semantic score falls back to 0"
                );
                return 0.0;
            }
        };

        let similarity =
            cosine_similarity(&volunteer_embedding.vector, &opportunity_embedding.vector);
        (similarity as f64 * 100.0).clamp(0.0, 100.0)
    }
}
