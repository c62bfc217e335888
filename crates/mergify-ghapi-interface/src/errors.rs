//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rate limit reached, the call can be retried later.
    #[error("GitHub API rate limit reached")]
    RateLimited,

    /// Upstream is unreachable or answered 5xx, the call can be retried.
    #[error("GitHub API is unavailable: {message}")]
    Unavailable { message: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Whether the failure is an expected, retryable condition.
    ///
    /// Best-effort callers log these at debug level instead of error level.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Unavailable { .. })
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
