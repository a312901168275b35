pub mod walk;

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{ArgAction, Parser};
use ptrwalk_common::config::{Config, DEFAULT_CONCURRENCY};
use ptrwalk_protocols::dns::DNS_PORT;

#[derive(Parser, Debug)]
#[command(name = "ptrwalk", version)]
#[command(about = "Lists every usable host of a subnet together with its reverse-DNS name.")]
#[command(after_help = "Example: ptrwalk 255.255.255.0 192.168.1.0")]
pub struct CommandLine {
    /// Subnet mask in dotted-decimal form (e.g. 255.255.255.0)
    pub mask: String,
    /// Network address in dotted-decimal form (e.g. 192.168.1.0)
    pub network: String,
    /// Give up on a single lookup after this many milliseconds
    #[arg(long = "timeout", value_name = "MS", default_value_t = 2000,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,
    /// Number of lookups kept in flight (output stays in address order)
    #[arg(short = 'j', long = "jobs", default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_jobs)]
    pub jobs: usize,
    /// Stop resolving after this many seconds; remaining hosts are reported unreachable
    #[arg(long, value_name = "SECS")]
    pub deadline: Option<u64>,
    /// Query this name server directly instead of the system resolver
    #[arg(long, value_name = "IP[:PORT]", value_parser = parse_dns_server)]
    pub dns_server: Option<SocketAddr>,
    /// Hide decorations and progress (repeat for less)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            lookup_timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.jobs,
            deadline: self.deadline.map(Duration::from_secs),
            dns_server: self.dns_server,
            no_banner: self.no_banner,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("at least one job is required".to_string()),
        Ok(jobs) => Ok(jobs),
        Err(e) => Err(format!("invalid job count '{s}': {e}")),
    }
}

/// Accepts `IP`, `IP:PORT` and `[IPv6]:PORT`. The port defaults to 53.
fn parse_dns_server(s: &str) -> Result<SocketAddr, String> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Ok(addr);
    }
    s.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|e| format!("invalid DNS server '{s}': {e}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
