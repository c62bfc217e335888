//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`regex::Error`].
    #[error("Error while compiling regex: {source}")]
    RegexError { source: regex::Error },

    /// Wraps [`mergify_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: mergify_ghapi_interface::ApiError,
    },

    #[error("Cache service error: {source}")]
    CacheError {
        source: mergify_cache_interface::CacheError,
    },

    #[error("Queue service error: {source}")]
    QueueError {
        source: mergify_queue_interface::QueueError,
    },

    #[error("Rules error: {source}")]
    RulesError { source: crate::rules::RulesError },

    #[error("Unsupported condition: {detail}")]
    UnsupportedCondition { detail: String },

    #[error("Serialization error: {source}")]
    SerializationError { source: serde_json::Error },
}

impl From<regex::Error> for DomainError {
    fn from(e: regex::Error) -> Self {
        Self::RegexError { source: e }
    }
}

impl From<mergify_ghapi_interface::ApiError> for DomainError {
    fn from(e: mergify_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<mergify_cache_interface::CacheError> for DomainError {
    fn from(e: mergify_cache_interface::CacheError) -> Self {
        Self::CacheError { source: e }
    }
}

impl From<mergify_queue_interface::QueueError> for DomainError {
    fn from(e: mergify_queue_interface::QueueError) -> Self {
        Self::QueueError { source: e }
    }
}

impl From<crate::rules::RulesError> for DomainError {
    fn from(e: crate::rules::RulesError) -> Self {
        Self::RulesError { source: e }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
