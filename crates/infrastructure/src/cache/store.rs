use super::{CacheEntry, CacheKey};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::net::IpAddr;
use tokio::time::Instant;
use tracing::debug;

/// Outcome of a store read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(IpAddr),
    /// An entry existed but its TTL had elapsed; it has been dropped.
    Expired,
    Miss,
}

/// Bounded key→entry store with FIFO eviction.
///
/// Insertion order lives in a separate queue of `(seq, key)` pairs so
/// the oldest surviving key is found in O(1) without leaning on any
/// map enumeration-order guarantee. `remove` and lazy expiry leave
/// tombstones in the queue; eviction and snapshots skip a queue slot
/// whose `seq` no longer matches the live entry for that key.
///
/// Synchronous and single-threaded; `HostCache` wraps it in a mutex.
pub struct CacheStore {
    entries: FxHashMap<CacheKey, CacheEntry>,
    order: VecDeque<(u64, CacheKey)>,
    next_seq: u64,
    max_entries: usize,
}

impl CacheStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::with_capacity(max_entries.min(1024)),
            next_seq: 0,
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&mut self, key: &CacheKey, now: Instant) -> CacheLookup {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => CacheLookup::Hit(entry.address),
            Some(_) => {
                // Lazy expiry: drop the stale entry, leaving its order
                // slot behind as a tombstone.
                self.entries.remove(key);
                CacheLookup::Expired
            }
            None => CacheLookup::Miss,
        }
    }

    /// Insert or overwrite. Returns the key evicted to make room, if any.
    ///
    /// Overwriting an existing key refreshes address and expiry but
    /// keeps the key's original insertion position, so a refresh does
    /// not push it to the back of the eviction queue.
    pub fn insert(
        &mut self,
        key: CacheKey,
        address: IpAddr,
        expires_at: Instant,
    ) -> Option<CacheKey> {
        if let Some(existing) = self.entries.get_mut(&key) {
            existing.address = address;
            existing.expires_at = expires_at;
            return None;
        }

        // Capacity applies to new keys only. With max_entries = 0 the
        // queue is empty on the first insert, eviction finds nothing,
        // and the store briefly holds one entry over capacity.
        let evicted = if self.entries.len() >= self.max_entries {
            self.evict_oldest()
        } else {
            None
        };

        self.maybe_compact();

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.push_back((seq, key.clone()));
        self.entries.insert(
            key,
            CacheEntry {
                address,
                expires_at,
                seq,
            },
        );

        evicted
    }

    pub fn remove(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Current contents in insertion order, stale entries included.
    pub fn snapshot(&self) -> Vec<(CacheKey, CacheEntry)> {
        self.order
            .iter()
            .filter_map(|(seq, key)| {
                let entry = self.entries.get(key)?;
                (entry.seq == *seq).then(|| (key.clone(), *entry))
            })
            .collect()
    }

    /// Pop queue slots until one still maps to a live entry, then
    /// evict that entry. FIFO only: staleness and usage are ignored.
    fn evict_oldest(&mut self) -> Option<CacheKey> {
        while let Some((seq, key)) = self.order.pop_front() {
            let live = self.entries.get(&key).map(|e| e.seq) == Some(seq);
            if live {
                self.entries.remove(&key);
                debug!(hostname = %key.hostname, family = %key.family, "Evicted oldest entry");
                return Some(key);
            }
        }
        None
    }

    /// Drop accumulated tombstones once they dominate the queue, so
    /// remove-heavy workloads cannot grow it without bound.
    fn maybe_compact(&mut self) {
        if self.order.len() >= 64 && self.order.len() >= self.entries.len() * 2 {
            let entries = &self.entries;
            self.order
                .retain(|(seq, key)| entries.get(key).map(|e| e.seq) == Some(*seq));
        }
    }
}
