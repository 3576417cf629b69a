//! # Host Discovery Service
//!
//! Answers the "what does this host know about its network" questions:
//! its interfaces, its default gateway and its neighbor cache.
//!
//! The service owns the process runner and the vendor lookup, so the CLI
//! never touches either directly and tests can swap both out.

use std::sync::Arc;

use netkit_common::network::interface::InterfaceInfo;
use netkit_common::network::neighbor::NeighborEntry;
use netkit_common::vendors::VendorRepository;
use netkit_common::{Discovery, Platform};

use crate::exec::{COMMAND_TIMEOUT, CommandRunner, SystemRunner};
use crate::vendors::MacOuiRepo;
use crate::{gateway, neighbor, system};

/// A neighbor cache entry enriched with the hardware vendor, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub entry: NeighborEntry,
    pub vendor: Option<String>,
}

pub struct DiscoveryService {
    runner: Arc<dyn CommandRunner>,
    vendor_repo: Box<dyn VendorRepository>,
    platform: Platform,
}

impl DiscoveryService {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        vendor_repo: Box<dyn VendorRepository>,
        platform: Platform,
    ) -> Self {
        Self {
            runner,
            vendor_repo,
            platform,
        }
    }

    /// Real processes, the bundled OUI database and the running platform.
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemRunner::with_timeout(COMMAND_TIMEOUT)),
            Box::new(MacOuiRepo),
            Platform::current(),
        )
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub async fn gateway(&self) -> Discovery<String> {
        gateway::resolve_gateway(self.runner.as_ref(), self.platform)
            .await
            .log_failure("default gateway")
    }

    pub async fn neighbors(&self) -> Discovery<Vec<Neighbor>> {
        neighbor::read_neighbors(self.runner.as_ref(), self.platform)
            .await
            .log_failure("neighbor table")
            .map(|entries| self.enrich_vendors(entries))
    }

    pub fn interfaces(&self) -> Vec<InterfaceInfo> {
        system::list_interfaces()
    }

    fn enrich_vendors(&self, entries: Vec<NeighborEntry>) -> Vec<Neighbor> {
        entries
            .into_iter()
            .map(|entry| {
                let vendor = entry
                    .mac
                    .as_deref()
                    .and_then(|mac| self.vendor_repo.get_vendor(mac));
                Neighbor { entry, vendor }
            })
            .collect()
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
