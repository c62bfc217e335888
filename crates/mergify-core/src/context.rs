use mergify_cache_interface::CacheService;
use mergify_config::Config;
use mergify_ghapi_interface::ApiService;
use mergify_queue_interface::QueueService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub cache_service: &'a (dyn CacheService + 'a),
    pub queue_service: &'a (dyn QueueService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use mergify_cache_memory::MemoryCache;
    use mergify_config::Config;
    use mergify_ghapi_interface::MockApiService;
    use mergify_queue_interface::MockQueueService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub cache_service: MemoryCache,
        pub queue_service: MockQueueService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                cache_service: MemoryCache::new(),
                queue_service: MockQueueService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                cache_service: &self.cache_service,
                queue_service: &self.queue_service,
            }
        }
    }
}
