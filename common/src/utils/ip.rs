use std::net::Ipv4Addr;

pub const IN_ADDR_ARPA: &str = "in-addr.arpa";

/// Builds the PTR owner name for an address, e.g. `1.2.0.192.in-addr.arpa`.
pub fn reverse_address_to_ptr(addr: &Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{d}.{c}.{b}.{a}.{IN_ADDR_ARPA}")
}

/// Some resolvers answer with the numeric address when no PTR record exists.
pub fn is_numeric_echo(addr: &Ipv4Addr, name: &str) -> bool {
    name.trim_end_matches('.')
        .parse::<Ipv4Addr>()
        .is_ok_and(|parsed| parsed == *addr)
}
