#![allow(dead_code)]

use async_trait::async_trait;
use hostcache_application::ports::HostResolver;
use hostcache_domain::{AddressFamily, DomainError, HostQuery};
use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::RwLock;

/// Common test hostnames
pub struct TestHosts;

impl TestHosts {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn google() -> &'static str {
        "google.com"
    }

    pub fn github() -> &'static str {
        "github.com"
    }

    pub fn nonexistent() -> &'static str {
        "nonexistent.invalid"
    }
}

pub fn ip(s: &str) -> IpAddr {
    IpAddr::from_str(s).unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Scripted HostResolver
// ============================================================================

/// Mock resolver with scripted per-(hostname, family) answers.
///
/// Unscripted hostnames fail with `NotFound`. An optional artificial
/// delay simulates a slow upstream; like the real adapter, the mock
/// owns the timeout race, so a delayed answer loses to the query's
/// deadline.
pub struct ScriptedResolver {
    responses: RwLock<HashMap<(String, AddressFamily), IpAddr>>,
    delay: RwLock<Option<Duration>>,
    calls: AtomicU64,
    call_log: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            delay: RwLock::new(None),
            calls: AtomicU64::new(0),
            call_log: Mutex::new(Vec::new()),
        }
    }

    pub async fn set_response(&self, hostname: &str, family: AddressFamily, address: IpAddr) {
        self.responses
            .write()
            .await
            .insert((hostname.to_string(), family), address);
    }

    pub async fn set_v4_response(&self, hostname: &str, address: &str) {
        self.set_response(hostname, AddressFamily::V4, ip(address))
            .await;
    }

    pub async fn remove_response(&self, hostname: &str, family: AddressFamily) {
        self.responses
            .write()
            .await
            .remove(&(hostname.to_string(), family));
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn clear_delay(&self) {
        *self.delay.write().await = None;
    }

    /// Total resolver invocations, timed-out ones included.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls_for(&self, hostname: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.as_str() == hostname)
            .count()
    }
}

impl Default for ScriptedResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for ScriptedResolver {
    async fn resolve_host(&self, query: &HostQuery) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_log
            .lock()
            .unwrap()
            .push(query.hostname.to_string());

        let answer = async {
            let delay = *self.delay.read().await;
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            self.responses
                .read()
                .await
                .get(&(query.hostname.to_string(), query.family))
                .copied()
                .ok_or_else(|| DomainError::NotFound {
                    hostname: query.hostname.to_string(),
                    family: query.family,
                })
        };

        match query.timeout {
            Some(limit) if !limit.is_zero() => tokio::time::timeout(limit, answer)
                .await
                .unwrap_or_else(|_| {
                    Err(DomainError::QueryTimeout {
                        hostname: query.hostname.to_string(),
                        timeout_ms: limit.as_millis() as u64,
                    })
                }),
            _ => answer.await,
        }
    }
}
