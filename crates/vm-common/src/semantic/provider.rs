use std::sync::{Arc, OnceLock};

use super::config::load_config_from_env;
use super::{create_embedder, ProfileEmbedder, SemanticScorer};

static SHARED_EMBEDDER: OnceLock<Arc<dyn ProfileEmbedder>> = OnceLock::new();

/// Process-wide embedder, constructed on first use and reused afterwards.
///
/// Initialization-once contract: the first caller builds the instance from
/// `VM_SEMANTIC_EMBEDDER` / `VM_SEMANTIC_DIMENSION`; concurrent first calls
/// are safe and every later call observes the same instance. Tests that need
/// a different backend should construct a [`SemanticScorer`] directly
/// instead of going through this singleton.
pub fn shared_embedder() -> Arc<dyn ProfileEmbedder> {
    SHARED_EMBEDDER
        .get_or_init(|| {
            let config = load_config_from_env();
            let name = std::env::var("VM_SEMANTIC_EMBEDDER").unwrap_or_else(|_| "hash".into());
            create_embedder(&name, config)
        })
        .clone()
}

/// Build a semantic scorer when `VM_SEMANTIC_ENABLED` asks for one.
pub fn init_semantic_from_env() -> Option<SemanticScorer> {
    let config = load_config_from_env();
    if !config.enabled {
        return None;
    }
    Some(SemanticScorer::new(shared_embedder()))
}
