//! Wire formats used to talk to name servers.

pub mod dns;
