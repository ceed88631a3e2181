pub mod entry;
pub mod host_cache;
pub mod key;
pub mod metrics;
pub mod store;

pub use entry::CacheEntry;
pub use host_cache::HostCache;
pub use key::CacheKey;
pub use metrics::CacheMetrics;
pub use store::{CacheLookup, CacheStore};
