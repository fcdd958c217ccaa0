use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{Embedding, EmbeddingError, ProfileEmbedder, SemanticConfig};
use crate::text::is_stopword;

/// Fixed seeds for deterministic hashing.
/// Changing either value changes every embedding - bump `version()` with it.
const HASH_SEED_K0: u64 = 0x517c_c1b7_2722_0a95;
const HASH_SEED_K1: u64 = 0x6c62_272e_07bb_0142;

/// Deterministic feature-hashing embedder.
///
/// - no training, no model artifacts
/// - O(n) in the token count
/// - SipHash-1-3 with fixed seeds keeps vectors stable across Rust versions
pub struct HashEmbedder {
    config: SemanticConfig,
}

impl HashEmbedder {
    pub fn new(config: SemanticConfig) -> Self {
        let mut config = config;
        config.dimension = config.dimension.max(1);
        Self { config }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
        text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ':' | ';' | '/'))
            .filter(|token| !token.is_empty() && !is_stopword(token))
    }
}

impl ProfileEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let mut vector = vec![0.0f32; self.config.dimension];

        for token in Self::tokenize(&text.to_lowercase()) {
            let idx = self.hash_token(token);
            // Sign hashing: even hash -> +1, odd hash -> -1.
            let sign_probe = self.hash_token(&format!("{token}_sign"));
            let sign = if sign_probe % 2 == 0 { 1.0 } else { -1.0 };
            vector[idx] += sign;
        }

        // L2 normalization
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Ok(Embedding::new(vector))
    }
}
