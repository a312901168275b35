use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_CONCURRENCY: usize = 8;

pub struct Config {
    /// Upper bound for a single reverse lookup.
    pub lookup_timeout: Duration,
    /// Number of lookups kept in flight. Output order does not depend on it.
    pub concurrency: usize,
    /// Overall budget for the sweep. Hosts left when it runs out are reported unreachable.
    pub deadline: Option<Duration>,
    /// Query this DNS server directly instead of going through the system resolver.
    pub dns_server: Option<SocketAddr>,
    pub no_banner: bool,
    pub quiet: u8,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            deadline: None,
            dns_server: None,
            no_banner: false,
            quiet: 0,
            verbose: false,
        }
    }
}
