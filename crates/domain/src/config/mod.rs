//! Configuration structures for hostcache
//!
//! Organized by concern:
//! - `root`: top-level configuration and TOML loading
//! - `cache`: TTL and capacity of the resolution cache
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
