use crate::AddressFamily;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("No {family} address found for {hostname}")]
    NotFound {
        hostname: String,
        family: AddressFamily,
    },

    #[error("Lookup failed for {hostname}: {reason}")]
    LookupFailed { hostname: String, reason: String },

    #[error("Resolution timed out after {timeout_ms}ms: {hostname}")]
    QueryTimeout { hostname: String, timeout_ms: u64 },
}

impl DomainError {
    /// True for the timeout variant, regardless of hostname.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::QueryTimeout { .. })
    }
}
