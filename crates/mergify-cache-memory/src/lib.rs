use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use mergify_cache_interface::{CacheError, CacheService};

/// In-memory cache, used as a test stand-in for the shared Redis cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    values: RwLock<HashMap<String, (String, Instant)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_value(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self
            .values
            .read()
            .unwrap()
            .get(key)
            .filter(|(_, deadline)| Instant::now() < *deadline)
            .map(|(value, _)| value.clone()))
    }

    async fn set_value(
        &self,
        key: &str,
        value: &str,
        expiry: Duration,
    ) -> Result<(), CacheError> {
        self.values
            .write()
            .unwrap()
            .insert(key.into(), (value.into(), Instant::now() + expiry));
        Ok(())
    }

    async fn del_value(&self, key: &str) -> Result<(), CacheError> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    async fn del_prefixed(&self, prefix: &str) -> Result<(), CacheError> {
        self.values
            .write()
            .unwrap()
            .retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mergify_cache_interface::CacheService;

    use super::MemoryCache;

    #[tokio::test]
    async fn get_set_del() {
        let cache = MemoryCache::new();

        assert_eq!(cache.get_value("key").await.unwrap(), None);

        cache
            .set_value("key", "value", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get_value("key").await.unwrap(), Some("value".into()));

        cache.del_value("key").await.unwrap();
        assert_eq!(cache.get_value("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn del_prefixed_only_removes_matching_keys() {
        let cache = MemoryCache::new();
        cache
            .set_value("a~1", "x", Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set_value("a~2", "y", Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set_value("b~1", "z", Duration::from_secs(60))
            .await
            .unwrap();

        cache.del_prefixed("a~").await.unwrap();

        assert_eq!(cache.get_value("a~1").await.unwrap(), None);
        assert_eq!(cache.get_value("a~2").await.unwrap(), None);
        assert_eq!(cache.get_value("b~1").await.unwrap(), Some("z".into()));
    }

    #[tokio::test]
    async fn expired_value_is_absent() {
        let cache = MemoryCache::new();

        cache
            .set_value("key", "value", Duration::from_secs(0))
            .await
            .unwrap();
        assert_eq!(cache.get_value("key").await.unwrap(), None);
    }
}
