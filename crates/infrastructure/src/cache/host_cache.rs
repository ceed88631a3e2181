use super::store::CacheLookup;
use super::{CacheEntry, CacheKey, CacheMetrics, CacheStore};
use async_trait::async_trait;
use hostcache_application::ports::HostResolver;
use hostcache_domain::{AddressFamily, CacheConfig, DomainError, HostQuery};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Caching decorator for a host resolver.
///
/// Serves lookups from a bounded, TTL-expiring store and falls back to
/// the wrapped resolver on miss or expiry. Successful resolutions are
/// written back; failures are propagated and never cached.
///
/// Store mutations are guarded by a mutex and never held across an
/// await, so concurrent callers preserve the size invariant. There is
/// deliberately no de-duplication of in-flight lookups for the same
/// key: concurrent misses each reach the resolver and the last
/// completion wins. Callers needing single-flight semantics coordinate
/// externally.
pub struct HostCache {
    store: Mutex<CacheStore>,
    resolver: Arc<dyn HostResolver>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl HostCache {
    pub fn new(config: &CacheConfig, resolver: Arc<dyn HostResolver>) -> Self {
        info!(
            ttl_ms = config.ttl_ms,
            max_entries = config.max_entries,
            "Initializing host cache"
        );

        Self {
            store: Mutex::new(CacheStore::new(config.max_entries)),
            resolver,
            ttl: config.ttl(),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Resolve through the cache. Exactly one resolver call per miss,
    /// no retries.
    pub async fn resolve(&self, query: &HostQuery) -> Result<IpAddr, DomainError> {
        let key = CacheKey::from(query);

        match self.check_store(&key) {
            Some(address) => Ok(address),
            None => self.resolve_and_store(query, key).await,
        }
    }

    /// Drop the entry for (hostname, family) if present; silent no-op
    /// otherwise.
    pub fn remove(&self, hostname: &str, family: AddressFamily) {
        let key = CacheKey::new(hostname, family);
        if self.store.lock().unwrap().remove(&key) {
            debug!(hostname = %key.hostname, family = %key.family, "Removed entry");
        }
    }

    pub fn clear(&self) {
        self.store.lock().unwrap().clear();
        self.metrics.reset();
        info!("Cache cleared");
    }

    /// Snapshot of current contents in insertion order. Stale entries
    /// are included; this is introspection, not the resolution path.
    pub fn list(&self) -> Vec<(CacheKey, CacheEntry)> {
        self.store.lock().unwrap().snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().unwrap().is_empty()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    fn check_store(&self, key: &CacheKey) -> Option<IpAddr> {
        let lookup = self.store.lock().unwrap().lookup(key, Instant::now());
        match lookup {
            CacheLookup::Hit(address) => {
                self.metrics.record_hit();
                debug!(hostname = %key.hostname, family = %key.family, "Cache HIT");
                Some(address)
            }
            CacheLookup::Expired => {
                self.metrics.record_lazy_deletion();
                self.metrics.record_miss();
                debug!(hostname = %key.hostname, family = %key.family, "Cache EXPIRED");
                None
            }
            CacheLookup::Miss => {
                self.metrics.record_miss();
                debug!(hostname = %key.hostname, family = %key.family, "Cache MISS");
                None
            }
        }
    }

    async fn resolve_and_store(
        &self,
        query: &HostQuery,
        key: CacheKey,
    ) -> Result<IpAddr, DomainError> {
        match self.resolver.resolve_host(query).await {
            Ok(address) => {
                let expires_at = Instant::now() + self.ttl;
                let evicted = self
                    .store
                    .lock()
                    .unwrap()
                    .insert(key.clone(), address, expires_at);
                self.metrics.record_insertion();
                if evicted.is_some() {
                    self.metrics.record_eviction();
                }

                debug!(
                    hostname = %key.hostname,
                    family = %key.family,
                    address = %address,
                    "Inserted into cache"
                );
                Ok(address)
            }
            Err(e) => {
                warn!(
                    hostname = %key.hostname,
                    family = %key.family,
                    error = %e,
                    "Resolution failed, nothing cached"
                );
                Err(e)
            }
        }
    }
}

#[async_trait]
impl HostResolver for HostCache {
    async fn resolve_host(&self, query: &HostQuery) -> Result<IpAddr, DomainError> {
        self.resolve(query).await
    }

    fn try_cached(&self, query: &HostQuery) -> Option<IpAddr> {
        let key = CacheKey::from(query);
        self.check_store(&key)
    }
}
