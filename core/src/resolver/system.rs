use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use ptrwalk_common::error::ResolverError;
use ptrwalk_common::utils::ip;

use super::AddressResolver;

/// Asks the operating system (`getnameinfo`) for the name of each address.
///
/// The call blocks, so it runs on tokio's blocking pool.
pub struct SystemResolver;

#[async_trait]
impl AddressResolver for SystemResolver {
    fn name(&self) -> &'static str {
        "system"
    }

    async fn resolve(&self, addr: Ipv4Addr) -> Result<Option<String>, ResolverError> {
        let target: IpAddr = IpAddr::V4(addr);
        let hostname: String =
            tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&target))
                .await
                .map_err(|e| ResolverError::Lookup(e.to_string()))??;

        if hostname.is_empty() || ip::is_numeric_echo(&addr, &hostname) {
            return Ok(None);
        }
        Ok(Some(hostname))
    }
}
