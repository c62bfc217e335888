//! Queue interfaces.

use async_trait::async_trait;

use crate::QueueError;

/// Durable per-repository work queue adapter trait.
///
/// Pushing is the durability boundary of event dispatch: a push failure must
/// reach the webhook receiver so the delivery can be signaled as failed
/// upstream. The queue is drained by an external worker.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Pushes one event for later processing.
    async fn push(
        &self,
        owner: &str,
        repo_name: &str,
        pull_number: Option<u64>,
        event_type: &str,
        slim_event: serde_json::Value,
    ) -> Result<(), QueueError>;
}
