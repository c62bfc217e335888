//! Cache interfaces.

use std::time::Duration;

use async_trait::async_trait;

use crate::CacheError;

/// Key-value cache adapter trait.
///
/// Keys are shared between all handler instances, values are plain strings.
/// There is no locking: concurrent writers for the same key must be
/// idempotent on the caller side.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Gets a value if present.
    async fn get_value(&self, key: &str) -> Result<Option<String>, CacheError>;
    /// Sets a value with an expiration.
    async fn set_value(&self, key: &str, value: &str, expiry: Duration)
        -> Result<(), CacheError>;
    /// Deletes a value if it exists.
    async fn del_value(&self, key: &str) -> Result<(), CacheError>;
    /// Deletes every value whose key starts with `prefix`.
    async fn del_prefixed(&self, prefix: &str) -> Result<(), CacheError>;
}
