//! Hostcache Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the bounded
//! time-expiring host cache and the system resolver.
pub mod cache;
pub mod resolver;

pub use cache::{CacheEntry, CacheKey, CacheMetrics, HostCache};
pub use resolver::SystemResolver;
