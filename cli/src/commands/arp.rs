use netkit_common::config::Config;
use netkit_common::{info, warn};
use netkit_core::discovery::DiscoveryService;
use tracing::{Instrument, info_span};

use crate::mprint;
use crate::terminal::{format, print, spinner};

pub async fn arp(service: &DiscoveryService, cfg: &Config) -> anyhow::Result<()> {
    print::header("neighbor table", cfg.quiet);

    let span = info_span!("neighbors", indicatif.pb_show = true);
    spinner::start_query(&span, "Reading the neighbor cache...");
    let neighbors = service.neighbors().instrument(span).await.unwrap_or_default();

    if neighbors.is_empty() {
        warn!("No neighbor entries found.");
        return Ok(());
    }

    for (idx, neighbor) in neighbors.iter().enumerate() {
        if cfg.quiet > 1 {
            print::print(&format::neighbor_line(neighbor));
            continue;
        }
        print::tree_head(idx, &neighbor.entry.ip);
        print::as_tree_one_level(format::neighbor_details(neighbor));
        if idx + 1 != neighbors.len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        let resolved = neighbors.iter().filter(|n| n.entry.is_resolved()).count();
        mprint!();
        info!("{} entries, {} resolved", neighbors.len(), resolved);
    }
    Ok(())
}
