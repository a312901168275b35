//! # Subnet Mask Model
//!
//! Turns a dotted-decimal mask such as `255.255.255.0` into a validated
//! [`SubnetMask`] and its prefix length.
//!
//! A mask is only accepted when its one-bits form a single run that starts at
//! the most significant bit. Anything else (e.g. `255.0.255.0`) is rejected
//! before a host range can be derived from it.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::MaskError;

/// A validated IPv4 subnet mask, stored in host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    bits: u32,
    prefix_len: u8,
}

impl SubnetMask {
    /// Parses and validates a dotted-decimal mask.
    pub fn parse(mask_text: &str) -> Result<Self, MaskError> {
        let bits: u32 = parse_dotted(mask_text)?;
        let prefix_len: u8 = count_prefix_bits(bits)?;
        Ok(Self { bits, prefix_len })
    }

    /// Builds the mask for a `/prefix_len` network.
    pub fn from_prefix(prefix_len: u8) -> Result<Self, MaskError> {
        if prefix_len > 32 {
            return Err(MaskError::PrefixTooLong(prefix_len));
        }
        let bits: u32 = match prefix_len {
            0 => 0,
            _ => u32::MAX << (32 - prefix_len),
        };
        Ok(Self { bits, prefix_len })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn host_bits(&self) -> u8 {
        32 - self.prefix_len
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits)
    }
}

impl FromStr for SubnetMask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ipv4())
    }
}

/// Returns the prefix length of a dotted-decimal subnet mask.
///
/// * `0.0.0.0` is accepted and yields `0`.
/// * Strings that are not IPv4 addresses fail with [`MaskError::Unparseable`].
/// * Masks whose one-bits are not a leading run fail with [`MaskError::NonContiguous`].
pub fn analyze_mask(mask_text: &str) -> Result<u8, MaskError> {
    parse_dotted(mask_text).and_then(count_prefix_bits)
}

fn parse_dotted(mask_text: &str) -> Result<u32, MaskError> {
    mask_text
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| MaskError::Unparseable(mask_text.to_string()))
}

/// Walks the mask from the least significant bit upwards. Once a one-bit has
/// been seen, every higher bit must be one as well, and the run has to reach
/// the most significant bit.
fn count_prefix_bits(bits: u32) -> Result<u8, MaskError> {
    let mut remaining: u32 = bits;
    let mut count: u8 = 0;
    let mut seen_one: bool = false;

    while remaining > 0 {
        if remaining & 1 == 1 {
            seen_one = true;
            count += 1;
        } else if seen_one {
            return Err(MaskError::NonContiguous(Ipv4Addr::from(bits)));
        }
        remaining >>= 1;
    }

    // `0.0.0.255` is a single run too, just not a leading one.
    if bits.leading_ones() != u32::from(count) {
        return Err(MaskError::NonContiguous(Ipv4Addr::from(bits)));
    }
    Ok(count)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
