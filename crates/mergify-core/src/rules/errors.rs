use thiserror::Error;

/// Rules error.
#[derive(Debug, Error)]
pub enum RulesError {
    /// No configuration file in the repository.
    #[error(".mergify.yml is missing")]
    NoRules,

    /// Invalid configuration content.
    #[error("Mergify configuration is invalid: {detail}")]
    InvalidRules {
        /// Human-readable detail, with the YAML position when derivable.
        detail: String,
    },
}
