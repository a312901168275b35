use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use async_trait::async_trait;
use ptrwalk_common::error::{ResolverError, ResolverSetupError};
use ptrwalk_protocols::dns::{self, MAX_UDP_PAYLOAD, PtrAnswer};
use tokio::net::UdpSocket;
use tracing::debug;

use super::AddressResolver;

/// Sends PTR queries over UDP straight to one name server.
///
/// Every lookup uses its own ephemeral socket, so concurrent lookups never
/// have to share transaction ids.
pub struct DnsResolver {
    server: SocketAddr,
}

impl DnsResolver {
    pub fn new(server: SocketAddr) -> Result<Self, ResolverSetupError> {
        if server.ip().is_unspecified() || server.port() == 0 {
            return Err(ResolverSetupError::InvalidServer(server));
        }
        Ok(Self { server })
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    fn local_bind_addr(&self) -> SocketAddr {
        match self.server {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        }
    }
}

#[async_trait]
impl AddressResolver for DnsResolver {
    fn name(&self) -> &'static str {
        "dns"
    }

    async fn resolve(&self, addr: Ipv4Addr) -> Result<Option<String>, ResolverError> {
        let id: u16 = rand::random();
        let query: Vec<u8> = dns::create_ptr_packet(&addr, id)
            .map_err(|e| ResolverError::Protocol(e.to_string()))?;

        let socket: UdpSocket = UdpSocket::bind(self.local_bind_addr()).await?;
        // Connecting drops datagrams from anyone but the server.
        socket.connect(self.server).await?;
        socket.send(&query).await?;

        let mut buffer = [0u8; MAX_UDP_PAYLOAD];
        loop {
            let len: usize = socket.recv(&mut buffer).await?;
            match dns::parse_ptr_response(&buffer[..len]) {
                Ok((response_id, _)) if response_id != id => {
                    debug!("{addr}: ignoring reply for transaction {response_id}");
                }
                Ok((_, PtrAnswer::Name(hostname))) => return Ok(Some(hostname)),
                Ok((_, PtrAnswer::NoRecord)) => return Ok(None),
                Err(e) => return Err(ResolverError::Protocol(e.to_string())),
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
