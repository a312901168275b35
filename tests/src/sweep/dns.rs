#![cfg(test)]
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use ptrwalk_common::network::host::HostRecord;
use ptrwalk_common::network::range::HostRange;
use ptrwalk_core::resolver::{AddressResolver, DnsResolver};
use ptrwalk_core::sweep::{self, SweepOptions};

use crate::utils::FakeDnsServer;

fn net(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 0, 2, last)
}

#[tokio::test]
async fn dns_resolver_answers_and_misses() {
    let server = FakeDnsServer::start(&[(net(1), "router.example.net")], &[]).await;
    let resolver = DnsResolver::new(server.addr).unwrap();

    assert_eq!(
        resolver.resolve(net(1)).await.unwrap(),
        Some("router.example.net".to_string())
    );
    assert_eq!(resolver.resolve(net(2)).await.unwrap(), None);
}

/// Named, missing and silent hosts side by side, resolved concurrently.
#[tokio::test]
async fn sweep_over_a_real_socket() {
    let server = FakeDnsServer::start(
        &[(net(1), "router.example.net"), (net(4), "printer.example.net")],
        &[net(3)],
    )
    .await;
    let resolver: Arc<dyn AddressResolver> = Arc::new(DnsResolver::new(server.addr).unwrap());
    let range = HostRange::new("255.255.255.248".parse().unwrap(), net(0)).unwrap();
    let opts = SweepOptions {
        concurrency: 4,
        lookup_timeout: Duration::from_millis(300),
        deadline: None,
    };

    let records: Vec<HostRecord> = sweep::enumerate_hosts(range, resolver, opts).collect().await;

    assert_eq!(
        records,
        vec![
            HostRecord::new(net(1), Some("router.example.net".into())),
            HostRecord::unreachable(net(2)),
            HostRecord::unreachable(net(3)),
            HostRecord::new(net(4), Some("printer.example.net".into())),
            HostRecord::unreachable(net(5)),
            HostRecord::unreachable(net(6)),
        ]
    );
}
