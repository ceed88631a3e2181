use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a cached address in milliseconds (default: 60000)
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Maximum number of cached entries before FIFO eviction (default: 1000)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    60_000
}

fn default_max_entries() -> usize {
    1000
}
