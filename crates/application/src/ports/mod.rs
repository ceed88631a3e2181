pub mod host_resolver;

pub use host_resolver::HostResolver;
