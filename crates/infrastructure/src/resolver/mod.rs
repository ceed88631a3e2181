pub mod system;

pub use system::SystemResolver;

use crate::cache::HostCache;
use hostcache_domain::CacheConfig;
use std::sync::Arc;

/// Default stack: the system resolver wrapped in a cache.
pub fn build_cached_resolver(config: &CacheConfig) -> HostCache {
    HostCache::new(config, Arc::new(SystemResolver::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostcache_domain::HostQuery;

    #[tokio::test]
    async fn default_stack_resolves_and_caches_localhost() {
        let cache = build_cached_resolver(&CacheConfig::default());
        let query = HostQuery::new("localhost");

        let first = cache.resolve(&query).await.unwrap();
        let second = cache.resolve(&query).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }
}
