use std::net::IpAddr;
use tokio::time::Instant;

/// Cached resolution result.
///
/// `seq` is the monotonic insertion sequence used for FIFO eviction
/// ordering; it is assigned by the store and never changes while the
/// entry lives, including across overwrites of the same key.
#[derive(Clone, Copy, Debug)]
pub struct CacheEntry {
    pub address: IpAddr,
    pub expires_at: Instant,
    pub(crate) seq: u64,
}

impl CacheEntry {
    /// Stale entries are treated as absent on read.
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
