//! # Host Range Model
//!
//! Derives the usable hosts of a subnet from a validated [`SubnetMask`] and a
//! network address.
//!
//! The network address does not have to be aligned: the base is always
//! `mask & network`. Usable hosts start right after the base and stop right
//! before the broadcast address, so neither of those is ever produced.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::{AddressError, RangeError};
use crate::network::mask::SubnetMask;

/// The usable host addresses of one IPv4 subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    mask: SubnetMask,
    base: u32,
    max_hosts: u32,
}

impl HostRange {
    /// Computes the range and checks that it fits in the IPv4 address space.
    ///
    /// `/31` and `/32` have no usable hosts: `max_hosts` is `0` and the range
    /// iterates nothing.
    pub fn new(mask: SubnetMask, network: Ipv4Addr) -> Result<Self, RangeError> {
        let base: u32 = mask.bits() & u32::from(network);
        let capacity: u64 = max_hosts_for(mask.host_bits());

        // The broadcast address sits right after the last host.
        let overflow = || RangeError::Overflow {
            base: Ipv4Addr::from(base),
            max_hosts: capacity,
        };
        let max_hosts: u32 = u32::try_from(capacity).map_err(|_| overflow())?;
        base.checked_add(max_hosts)
            .and_then(|last| last.checked_add(1))
            .ok_or_else(overflow)?;

        Ok(Self {
            mask,
            base,
            max_hosts,
        })
    }

    pub fn mask(&self) -> SubnetMask {
        self.mask
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask.prefix_len()
    }

    pub fn host_bits(&self) -> u8 {
        self.mask.host_bits()
    }

    pub fn max_hosts(&self) -> u32 {
        self.max_hosts
    }

    pub fn is_empty(&self) -> bool {
        self.max_hosts == 0
    }

    /// The aligned network address (all host bits zero).
    pub fn base(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    /// The aligned network in CIDR form.
    pub fn network(&self) -> Ipv4Network {
        // A SubnetMask never carries a prefix above 32, so the fallback is not taken.
        Ipv4Network::new(self.base(), self.prefix_len())
            .unwrap_or_else(|_| Ipv4Network::from(self.base()))
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base | !self.mask.bits())
    }

    pub fn first(&self) -> Option<Ipv4Addr> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<Ipv4Addr> {
        match self.max_hosts {
            0 => None,
            n => Some(Ipv4Addr::from(self.base + n)),
        }
    }

    /// Lazily yields every usable host in ascending order.
    ///
    /// Each call starts over from the first host.
    pub fn iter(&self) -> Hosts {
        Hosts {
            cursor: successor(self.base),
            remaining: self.max_hosts,
        }
    }
}

impl IntoIterator for &HostRange {
    type Item = Ipv4Addr;
    type IntoIter = Hosts;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the hosts of a [`HostRange`].
#[derive(Debug, Clone)]
pub struct Hosts {
    cursor: u32,
    remaining: u32,
}

impl Iterator for Hosts {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current: u32 = self.cursor;
        self.remaining -= 1;
        // HostRange::new guarantees the broadcast address fits, so this never wraps.
        self.cursor = successor(current);
        Some(Ipv4Addr::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Hosts {}

impl FusedIterator for Hosts {}

/// Number of usable hosts for `host_bits` free bits, excluding network and broadcast.
pub fn max_hosts_for(host_bits: u8) -> u64 {
    (1u64 << host_bits.min(32)).saturating_sub(2)
}

/// Parses the dotted-decimal network address given on the command line.
pub fn parse_network(network_text: &str) -> Result<Ipv4Addr, AddressError> {
    network_text
        .parse::<Ipv4Addr>()
        .map_err(|_| AddressError::Unparseable(network_text.to_string()))
}

fn successor(addr: u32) -> u32 {
    addr.wrapping_add(1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
