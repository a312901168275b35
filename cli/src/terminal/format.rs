//! The plain-text lines that make up the host listing.
//!
//! These strings are the tool's output contract and carry no colour codes.

use ptrwalk_common::network::host::HostRecord;
use ptrwalk_common::network::range::HostRange;

pub const UNREACHABLE: &str = "Host cannot be reached";
pub const END_OF_HOSTS: &str = " ~ End of found hosts";

pub fn summary_line(range: &HostRange) -> String {
    format!(
        "Netmask is: {} bits.  Hostmask is: {} bits.  Max hosts is: {}",
        range.prefix_len(),
        range.host_bits(),
        range.max_hosts()
    )
}

pub fn record_line(record: &HostRecord) -> String {
    match &record.hostname {
        Some(hostname) => format!("{}\t{}", record.addr, hostname),
        None => format!("{} \t{}", record.addr, UNREACHABLE),
    }
}
