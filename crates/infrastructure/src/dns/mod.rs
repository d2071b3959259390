pub mod name_resolver;
pub mod system_resolver;
pub mod transport;
pub mod upstream_resolver;
pub mod wire;

pub use name_resolver::NetworkNameResolver;
pub use system_resolver::SystemResolver;
pub use upstream_resolver::UpstreamResolver;
