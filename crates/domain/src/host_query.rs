use super::AddressFamily;
use std::sync::Arc;
use std::time::Duration;

/// Hostname lookup request (hostname + family + optional deadline).
/// Uses `Arc<str>` for zero-cost cloning across cache → resolver layers.
#[derive(Debug, Clone)]
pub struct HostQuery {
    pub hostname: Arc<str>,
    pub family: AddressFamily,
    /// Upper bound on the lookup. `None` (and `Some(0)`) wait unbounded.
    pub timeout: Option<Duration>,
}

impl HostQuery {
    /// Query for the default family (IPv4) with no timeout.
    pub fn new(hostname: impl Into<Arc<str>>) -> Self {
        Self {
            hostname: hostname.into(),
            family: AddressFamily::default(),
            timeout: None,
        }
    }

    pub fn with_family(mut self, family: AddressFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
