//! Hostcache Domain Layer
pub mod config;
pub mod errors;
pub mod family;
pub mod host_query;
pub mod validators;

pub use config::{CacheConfig, Config, ConfigError, LoggingConfig};
pub use errors::DomainError;
pub use family::AddressFamily;
pub use host_query::HostQuery;
