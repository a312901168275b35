use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Failures while turning a dotted-decimal string into a [`SubnetMask`](crate::network::mask::SubnetMask).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("subnet mask '{0}' is not a dotted-decimal IPv4 address")]
    Unparseable(String),
    #[error("subnet mask {0} is not a contiguous run of leading one-bits")]
    NonContiguous(Ipv4Addr),
    #[error("prefix length {0} is longer than 32 bits")]
    PrefixTooLong(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("network address '{0}' is not a dotted-decimal IPv4 address")]
    Unparseable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("host range starting after {base} with {max_hosts} hosts exceeds the IPv4 address space")]
    Overflow { base: Ipv4Addr, max_hosts: u64 },
}

/// Per-address lookup failures. These never abort a sweep.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("no PTR record")]
    NotFound,
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("sweep deadline exceeded before lookup")]
    DeadlineExceeded,
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed DNS exchange: {0}")]
    Protocol(String),
    #[error("resolver failure: {0}")]
    Lookup(String),
}

/// Failures while building a resolver, before any address is looked up.
#[derive(Debug, Error)]
pub enum ResolverSetupError {
    #[error("{0} is not a usable DNS server address")]
    InvalidServer(SocketAddr),
}
