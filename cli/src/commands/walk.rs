use std::pin::pin;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use futures::StreamExt;

use crate::terminal::{print, spinner};
use ptrwalk_common::config::Config;
use ptrwalk_common::network::mask::SubnetMask;
use ptrwalk_common::network::range::{self, HostRange};
use ptrwalk_common::{success, warn};
use ptrwalk_core::resolver;
use ptrwalk_core::sweep::{self, SweepOptions};

/// Prints the subnet summary, then every usable host with its reverse-DNS name.
///
/// Bad input fails before anything is printed. Failed lookups never fail the walk.
pub async fn walk(mask_text: &str, network_text: &str, cfg: &Config, decorated: bool) -> anyhow::Result<()> {
    let mask: SubnetMask = SubnetMask::parse(mask_text).context("reading the subnet mask")?;
    let network = range::parse_network(network_text).context("reading the network address")?;
    let range: HostRange = HostRange::new(mask, network)?;
    let resolver = resolver::from_config(cfg).context("setting up the resolver")?;

    if decorated {
        print::subnet_details(&range);
    }
    if range.is_empty() {
        warn!("a /{} network has no usable hosts", range.prefix_len());
    }

    print::summary(&range);

    let start_time: Instant = Instant::now();
    let show_progress: bool = cfg.quiet == 0 && !range.is_empty();
    let total: u32 = range.max_hosts();
    let mut resolved: u32 = 0;
    let mut seen: u32 = 0;

    let mut records = pin!(sweep::enumerate_hosts(range, resolver, SweepOptions::from(cfg)));
    while let Some(record) = records.next().await {
        seen += 1;
        if record.is_resolved() {
            resolved += 1;
        }
        print::record(&record);
        if show_progress {
            spinner::report_progress(seen, total);
        }
    }
    spinner::finish();

    print::end_of_hosts();

    if decorated {
        let names: ColoredString = format!("{resolved}/{seen} names").bold().green();
        let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
        success!("Resolved {names} in {elapsed}");
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
