pub(crate) mod clear_permission_cache;

pub use clear_permission_cache::ClearPermissionCacheInterface;

#[cfg(any(test, feature = "testkit"))]
pub use clear_permission_cache::MockClearPermissionCacheInterface;
