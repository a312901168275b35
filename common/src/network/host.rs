use std::net::Ipv4Addr;

use crate::error::ResolverError;

/// One enumerated host and the name its reverse lookup produced, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub addr: Ipv4Addr,
    pub hostname: Option<String>,
}

impl HostRecord {
    pub fn new(addr: Ipv4Addr, hostname: Option<String>) -> Self {
        Self { addr, hostname }
    }

    pub fn unreachable(addr: Ipv4Addr) -> Self {
        Self { addr, hostname: None }
    }

    /// Folds a lookup outcome into a record. Every failure counts as unreachable.
    pub fn from_lookup(addr: Ipv4Addr, lookup: Result<Option<String>, ResolverError>) -> Self {
        match lookup {
            Ok(hostname) => Self::new(addr, hostname.filter(|name| !name.is_empty())),
            Err(_) => Self::unreachable(addr),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.hostname.is_some()
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
