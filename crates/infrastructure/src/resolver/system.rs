use async_trait::async_trait;
use hostcache_application::ports::HostResolver;
use hostcache_domain::{validators, DomainError, HostQuery};
use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolver backed by the platform name-resolution facility
/// (`tokio::net::lookup_host`). One lookup per call, optionally raced
/// against a deadline.
#[derive(Debug, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }

    async fn lookup(hostname: &str, query: &HostQuery) -> Result<IpAddr, DomainError> {
        // Port 0 satisfies lookup_host's addr shape; only the IP is used.
        let addrs = tokio::net::lookup_host((hostname, 0))
            .await
            .map_err(|e| DomainError::LookupFailed {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })?;

        addrs
            .map(|addr| addr.ip())
            .find(|ip| query.family.matches(ip))
            .ok_or_else(|| DomainError::NotFound {
                hostname: hostname.to_string(),
                family: query.family,
            })
    }
}

/// Race `lookup` against an optional deadline.
///
/// When the timer fires first the lookup future is dropped, so a late
/// result can never be observed or written back anywhere. A missing or
/// zero timeout waits unbounded.
async fn resolve_with_deadline<F>(
    hostname: &str,
    deadline: Option<Duration>,
    lookup: F,
) -> Result<IpAddr, DomainError>
where
    F: Future<Output = Result<IpAddr, DomainError>>,
{
    match deadline {
        Some(limit) if !limit.is_zero() => match tokio::time::timeout(limit, lookup).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::QueryTimeout {
                hostname: hostname.to_string(),
                timeout_ms: limit.as_millis() as u64,
            }),
        },
        _ => lookup.await,
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve_host(&self, query: &HostQuery) -> Result<IpAddr, DomainError> {
        let hostname = query.hostname.as_ref();
        validators::validate_hostname(hostname).map_err(DomainError::InvalidHostname)?;

        debug!(
            hostname = %hostname,
            family = %query.family,
            timeout = ?query.timeout,
            "System lookup"
        );

        resolve_with_deadline(hostname, query.timeout, Self::lookup(hostname, query)).await
    }
}
