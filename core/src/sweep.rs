//! # Bounded Ping Sweep
//!
//! Probes every host of a subnet while never letting more than `limit`
//! probes run at once. A `/16` expands to 65,534 targets, so addresses are
//! pulled lazily from the subnet and a probe task is only spawned after it
//! has been admitted by the semaphore.
//!
//! Results are gathered by the coordinating task alone, one insertion per
//! finished probe, into an ordered set. Completion order therefore never
//! leaks into the output.

use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use netkit_common::DiscoveryError;
use netkit_common::network::range::Subnet;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use crate::probe::Prober;

pub const DEFAULT_SWEEP_LIMIT: usize = 64;

/// Snapshot handed to the progress callback after every finished probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepProgress {
    pub probed: u64,
    pub total: u128,
    pub alive: usize,
}

pub type ProgressCallback = Box<dyn Fn(SweepProgress) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepResult {
    pub subnet: Subnet,
    /// Reachable addresses in ascending order.
    pub live: BTreeSet<IpAddr>,
    pub probed: u64,
    pub elapsed: Duration,
}

impl SweepResult {
    pub fn hosts(&self) -> impl Iterator<Item = &IpAddr> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

pub struct SweepCoordinator {
    prober: Arc<dyn Prober>,
    limit: usize,
    on_progress: Option<ProgressCallback>,
}

struct Tally {
    live: BTreeSet<IpAddr>,
    probed: u64,
    total: u128,
}

impl SweepCoordinator {
    /// `limit` is clamped to at least one probe in flight.
    pub fn new(prober: Arc<dyn Prober>, limit: usize) -> Self {
        Self {
            prober,
            limit: limit.clamp(1, Semaphore::MAX_PERMITS),
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, callback: impl Fn(SweepProgress) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Parses `cidr` and sweeps it. An unparseable subnet is the only error.
    pub async fn sweep_cidr(&self, cidr: &str) -> Result<SweepResult, DiscoveryError> {
        let subnet: Subnet = cidr.parse()?;
        Ok(self.sweep(&subnet).await)
    }

    pub async fn sweep(&self, subnet: &Subnet) -> SweepResult {
        let started = Instant::now();
        let gate = Arc::new(Semaphore::new(self.limit));
        let mut in_flight: JoinSet<(IpAddr, bool)> = JoinSet::new();
        let mut tally = Tally {
            live: BTreeSet::new(),
            probed: 0,
            total: subnet.host_count(),
        };

        debug!(
            "sweeping {subnet}: {} hosts, at most {} probes at once",
            tally.total, self.limit
        );

        for addr in subnet.hosts() {
            let Ok(permit) = Arc::clone(&gate).acquire_owned().await else {
                break;
            };

            while let Some(done) = in_flight.try_join_next() {
                self.record(done, &mut tally);
            }

            let prober = Arc::clone(&self.prober);
            in_flight.spawn(async move {
                let reachable = prober.probe(addr).await;
                drop(permit);
                (addr, reachable)
            });
        }

        while let Some(done) = in_flight.join_next().await {
            self.record(done, &mut tally);
        }

        let elapsed = started.elapsed();
        debug!(
            "sweep of {subnet} finished in {elapsed:?}: {}/{} alive",
            tally.live.len(),
            tally.probed
        );

        SweepResult {
            subnet: *subnet,
            live: tally.live,
            probed: tally.probed,
            elapsed,
        }
    }

    fn record(&self, done: Result<(IpAddr, bool), JoinError>, tally: &mut Tally) {
        tally.probed += 1;
        match done {
            Ok((addr, true)) => {
                tally.live.insert(addr);
            }
            Ok((_, false)) => {}
            Err(e) => warn!("probe task did not complete: {e}"),
        }

        if let Some(callback) = &self.on_progress {
            callback(SweepProgress {
                probed: tally.probed,
                total: tally.total,
                alive: tally.live.len(),
            });
        }
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
