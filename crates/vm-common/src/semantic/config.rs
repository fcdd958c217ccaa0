#[derive(Debug, Clone)]
pub struct SemanticConfig {
    /// Embedding dimension (powers of two recommended: 256, 512, 1024).
    pub dimension: usize,
    /// Whether the semantic factor participates in ranking at all.
    pub enabled: bool,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            dimension: 256,
            enabled: false,
        }
    }
}

/// Read the semantic configuration from `VM_SEMANTIC_*` environment
/// variables, falling back to the defaults above.
pub fn load_config_from_env() -> SemanticConfig {
    SemanticConfig {
        dimension: std::env::var("VM_SEMANTIC_DIMENSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        enabled: std::env::var("VM_SEMANTIC_ENABLED")
            .ok()
            .map(|s| s == "true" || s == "1")
            .unwrap_or(false),
    }
}
