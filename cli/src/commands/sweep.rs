use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use colored::*;
use netkit_common::config::Config;
use netkit_common::network::range::Subnet;
use netkit_common::network::target::SweepTarget;
use netkit_common::{info, success};
use netkit_core::probe::PingProber;
use netkit_core::sweep::{SweepCoordinator, SweepResult};
use netkit_core::system;
use tracing::{Instrument, info_span};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn sweep(target: SweepTarget, limit: usize, cfg: &Config) -> anyhow::Result<()> {
    let subnet = resolve_target(target)?;
    print::header(&format!("sweeping {subnet}"), cfg.quiet);
    info!(
        "Pinging {} hosts, at most {} at a time",
        subnet.host_count(),
        limit
    );

    let span = info_span!("sweep", indicatif.pb_show = true);
    spinner::start_sweep(&span, subnet.host_count());

    let progress_span = span.clone();
    let coordinator = SweepCoordinator::new(Arc::new(PingProber::system()), limit)
        .with_progress(move |progress| spinner::report_sweep_progress(&progress_span, progress));

    let result = coordinator.sweep(&subnet).instrument(span).await;

    sweep_ends(&result, cfg);
    Ok(())
}

fn resolve_target(target: SweepTarget) -> anyhow::Result<Subnet> {
    match target {
        SweepTarget::Subnet(subnet) => Ok(subnet),
        SweepTarget::Lan => system::lan_subnet()
            .context("no active interface with a private IPv4 network was found"),
    }
}

fn sweep_ends(result: &SweepResult, cfg: &Config) {
    if result.is_empty() {
        print::header("zero hosts detected", cfg.quiet);
        if cfg.quiet < 2 {
            print::no_results();
        }
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::header(&format!("live hosts: {}", result.subnet), cfg.quiet);
    for (idx, addr) in result.hosts().enumerate() {
        match cfg.quiet {
            2 => print::print(&addr.to_string()),
            _ => print::tree_head(idx, &format::ip_to_colored(addr).to_string()),
        }
    }
    print_summary(result.len(), result.probed, result.elapsed, cfg);
}

fn print_summary(alive: usize, probed: u64, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let active_hosts: ColoredString = format!("{alive} live hosts").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Sweep Complete: {active_hosts} out of {probed} in {total_time}")
            .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
