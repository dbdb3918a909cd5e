/// Configuration faults (spec §7.1). Raised at construction of
/// `HybridSearch`/`ChainSearch`, never mid-query.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required config field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for config field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
