use thiserror::Error;

/// Queue error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum QueueError {
    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
