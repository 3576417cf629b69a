use colored::*;
use netkit_common::config::Config;
use netkit_common::{Discovery, success, warn};
use netkit_core::discovery::DiscoveryService;
use tracing::{Instrument, info_span};

use crate::terminal::{print, spinner};

pub async fn gateway(service: &DiscoveryService, cfg: &Config) -> anyhow::Result<()> {
    print::header("default gateway", cfg.quiet);

    let span = info_span!("gateway", indicatif.pb_show = true);
    spinner::start_query(&span, &format!("Asking the {} routing table...", service.platform()));
    let gateway = service.gateway().instrument(span).await;

    match (gateway, cfg.quiet) {
        (Discovery::Found(gw), 2) => print::print(&gw),
        (Discovery::Found(gw), _) => success!("Default gateway: {}", gw.green().bold()),
        _ => warn!("Could not determine gateway."),
    }
    Ok(())
}
