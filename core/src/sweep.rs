//! Resolves every host of a [`HostRange`] and reports them in address order.
//!
//! Lookups are issued through [`StreamExt::buffered`], which keeps up to
//! `concurrency` of them in flight but yields results in the order the
//! addresses were produced. A slow lookup for `.5` therefore holds back `.6`
//! even if `.6` already answered.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use ptrwalk_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_LOOKUP_TIMEOUT};
use ptrwalk_common::error::ResolverError;
use ptrwalk_common::network::host::HostRecord;
use ptrwalk_common::network::range::HostRange;
use tokio::time::Instant;
use tracing::debug;

use crate::resolver::AddressResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Lookups kept in flight at once. `1` resolves strictly one after another.
    pub concurrency: usize,
    pub lookup_timeout: Duration,
    /// Budget for the whole sweep, measured from the call to [`enumerate_hosts`].
    pub deadline: Option<Duration>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            deadline: None,
        }
    }
}

impl From<&Config> for SweepOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            concurrency: cfg.concurrency.max(1),
            lookup_timeout: cfg.lookup_timeout,
            deadline: cfg.deadline,
        }
    }
}

/// Lazily pairs each host of `range` with the outcome of its reverse lookup.
///
/// The stream yields exactly `range.max_hosts()` records, in ascending address
/// order. Failed, timed-out and skipped lookups all produce unresolved records;
/// none of them end the stream early.
pub fn enumerate_hosts(
    range: HostRange,
    resolver: Arc<dyn AddressResolver>,
    options: SweepOptions,
) -> impl Stream<Item = HostRecord> + Send {
    // A budget too large to represent is the same as having none.
    let deadline: Option<Instant> = options
        .deadline
        .and_then(|budget| Instant::now().checked_add(budget));
    let lookup_timeout: Duration = options.lookup_timeout;

    stream::iter(range.iter())
        .map(move |addr| {
            let resolver = Arc::clone(&resolver);
            async move {
                let outcome = lookup(resolver.as_ref(), addr, lookup_timeout, deadline).await;
                if let Err(e) = &outcome {
                    debug!("{addr}: {e}");
                }
                HostRecord::from_lookup(addr, outcome)
            }
        })
        .buffered(options.concurrency.max(1))
}

async fn lookup(
    resolver: &dyn AddressResolver,
    addr: Ipv4Addr,
    lookup_timeout: Duration,
    deadline: Option<Instant>,
) -> Result<Option<String>, ResolverError> {
    let budget: Duration = match deadline {
        Some(deadline) => {
            let left: Duration = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Err(ResolverError::DeadlineExceeded);
            }
            left.min(lookup_timeout)
        }
        None => lookup_timeout,
    };

    match tokio::time::timeout(budget, resolver.resolve(addr)).await {
        Ok(outcome) => outcome,
        Err(_) if budget < lookup_timeout => Err(ResolverError::DeadlineExceeded),
        Err(_) => Err(ResolverError::Timeout(budget)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
