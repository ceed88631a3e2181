use hostcache_domain::{AddressFamily, HostQuery};
use std::sync::Arc;

/// Cache key: hostname scoped by address family.
///
/// An IPv4 and an IPv6 lookup for the same hostname are distinct
/// entries. Hostnames are kept case-sensitive as supplied by the
/// caller; `Arc<str>` keeps key construction from a query allocation-free.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub hostname: Arc<str>,
    pub family: AddressFamily,
}

impl CacheKey {
    #[inline]
    pub fn new(hostname: impl Into<Arc<str>>, family: AddressFamily) -> Self {
        Self {
            hostname: hostname.into(),
            family,
        }
    }
}

impl From<&HostQuery> for CacheKey {
    #[inline]
    fn from(query: &HostQuery) -> Self {
        Self {
            hostname: Arc::clone(&query.hostname),
            family: query.family,
        }
    }
}
