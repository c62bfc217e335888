use thiserror::Error;

/// Cache error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CacheError {
    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
