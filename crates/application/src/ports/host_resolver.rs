use async_trait::async_trait;
use hostcache_domain::{DomainError, HostQuery};
use std::net::IpAddr;

/// Port for hostname-to-address resolution.
///
/// Implemented by the system resolver adapter and by the caching
/// decorator, so layers compose behind one interface.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve exactly one address for the query, or fail.
    async fn resolve_host(&self, query: &HostQuery) -> Result<IpAddr, DomainError>;

    /// Synchronous fast path: answer from a cache without awaiting.
    /// The default (non-caching) implementation has nothing cached.
    fn try_cached(&self, _query: &HostQuery) -> Option<IpAddr> {
        None
    }
}
