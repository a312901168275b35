#![cfg(test)]
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use ptrwalk_common::error::MaskError;
use ptrwalk_common::network::host::HostRecord;
use ptrwalk_common::network::mask::{SubnetMask, analyze_mask};
use ptrwalk_common::network::range::HostRange;
use ptrwalk_core::sweep::{self, SweepOptions};

use crate::utils::{FailingResolver, TableResolver};

fn host_range(mask: &str, network: &str) -> HostRange {
    let mask: SubnetMask = mask.parse().expect("valid mask");
    HostRange::new(mask, network.parse().expect("valid network")).expect("range fits")
}

fn options() -> SweepOptions {
    SweepOptions {
        concurrency: 8,
        lookup_timeout: Duration::from_millis(500),
        deadline: None,
    }
}

/// A /24 swept with a resolver that always fails lists all 254 hosts, unresolved.
#[tokio::test]
async fn class_c_with_failing_resolver() {
    let range = host_range("255.255.255.0", "192.168.1.0");
    let resolver = Arc::new(FailingResolver::default());

    let records: Vec<HostRecord> =
        sweep::enumerate_hosts(range, resolver.clone(), options()).collect().await;

    assert_eq!(range.max_hosts(), 254);
    assert_eq!(records.len(), 254);
    assert_eq!(records.first().map(|r| r.addr), Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(records.last().map(|r| r.addr), Some(Ipv4Addr::new(192, 168, 1, 254)));
    assert!(records.iter().all(|r| r.hostname.is_none()));
    assert!(records.windows(2).all(|w| u32::from(w[0].addr) + 1 == u32::from(w[1].addr)));
    assert_eq!(resolver.calls.lock().unwrap().len(), 254);
}

#[tokio::test]
async fn repeated_sweeps_are_identical() {
    let range = host_range("255.255.255.224", "10.20.30.64");

    let first: Vec<HostRecord> =
        sweep::enumerate_hosts(range, Arc::new(FailingResolver::default()), options()).collect().await;
    let second: Vec<HostRecord> =
        sweep::enumerate_hosts(range, Arc::new(FailingResolver::default()), options()).collect().await;

    assert_eq!(first.len(), 30);
    assert_eq!(first, second);
}

#[tokio::test]
async fn slash_30_resolves_its_two_hosts() {
    let range = host_range("255.255.255.252", "198.51.100.4");
    let resolver = TableResolver::new(&[
        (Ipv4Addr::new(198, 51, 100, 5), "left.p2p.example"),
        (Ipv4Addr::new(198, 51, 100, 6), "right.p2p.example"),
        // Network and broadcast must never be asked for.
        (Ipv4Addr::new(198, 51, 100, 4), "network.example"),
        (Ipv4Addr::new(198, 51, 100, 7), "broadcast.example"),
    ]);

    let records: Vec<HostRecord> = sweep::enumerate_hosts(range, resolver, options()).collect().await;

    assert_eq!(
        records,
        vec![
            HostRecord::new(Ipv4Addr::new(198, 51, 100, 5), Some("left.p2p.example".into())),
            HostRecord::new(Ipv4Addr::new(198, 51, 100, 6), Some("right.p2p.example".into())),
        ]
    );
}

#[tokio::test]
async fn unaligned_network_starts_at_the_base() {
    let range = host_range("255.255.255.0", "192.168.1.200");
    let resolver = TableResolver::new(&[(Ipv4Addr::new(192, 168, 1, 1), "gw.lan")]);

    let mut records = std::pin::pin!(sweep::enumerate_hosts(range, resolver, options()));
    let first = records.next().await.expect("at least one host");

    assert_eq!(first, HostRecord::new(Ipv4Addr::new(192, 168, 1, 1), Some("gw.lan".into())));
}

#[tokio::test]
async fn host_masks_produce_nothing() {
    for mask in ["255.255.255.254", "255.255.255.255"] {
        let range = host_range(mask, "10.0.0.0");
        let resolver = Arc::new(FailingResolver::default());
        let records: Vec<HostRecord> =
            sweep::enumerate_hosts(range, resolver.clone(), options()).collect().await;
        assert!(records.is_empty(), "{mask}");
        assert!(resolver.calls.lock().unwrap().is_empty());
    }
}

#[test]
fn invalid_masks_never_reach_the_range() {
    assert_eq!(analyze_mask("0.0.0.0"), Ok(0));
    assert!(matches!(analyze_mask("not.an.ip"), Err(MaskError::Unparseable(_))));
    assert!(matches!(
        "255.0.255.0".parse::<SubnetMask>(),
        Err(MaskError::NonContiguous(_))
    ));
}
