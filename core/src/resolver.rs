//! The seam between the sweep and whatever turns an address into a name.
//!
//! The sweep only ever talks to [`AddressResolver`]. Which implementation sits
//! behind it is decided once, from the [`Config`], by [`from_config`].

use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use ptrwalk_common::config::Config;
use ptrwalk_common::error::ResolverError;

mod dns;
mod system;

pub use dns::DnsResolver;
pub use system::SystemResolver;

/// Reverse (PTR) lookup of a single IPv4 address.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Returns the host name for `addr`, `None` when there is no record.
    ///
    /// Implementations may block for as long as the underlying lookup takes;
    /// bounding the wait is the caller's job.
    async fn resolve(&self, addr: Ipv4Addr) -> Result<Option<String>, ResolverError>;
}

/// Picks the resolver the configuration asks for.
pub fn from_config(cfg: &Config) -> anyhow::Result<Arc<dyn AddressResolver>> {
    let resolver: Arc<dyn AddressResolver> = match cfg.dns_server {
        Some(server) => Arc::new(DnsResolver::new(server)?),
        None => Arc::new(SystemResolver),
    };
    tracing::debug!("using the {} resolver", resolver.name());
    Ok(resolver)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
