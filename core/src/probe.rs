//! # Reachability Probing
//!
//! A probe answers one question, "did this address answer a single echo
//! request?", by running the platform's `ping` once. The ping tool owns the
//! countdown; the runner timeout is only a backstop for tools that ignore
//! their own deadline.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use netkit_common::{Operation, Platform};
use tracing::trace;

use crate::exec::{CommandRunner, SystemRunner};

/// Kills a ping process that outlives its own timeout flag.
pub const PROBE_BACKSTOP: Duration = Duration::from_secs(5);

#[async_trait]
pub trait Prober: Send + Sync {
    /// `true` when `addr` answered. Never fails: anything that goes wrong
    /// counts as unreachable.
    async fn probe(&self, addr: IpAddr) -> bool;
}

/// Probes with the operating system's `ping` binary.
pub struct PingProber {
    platform: Platform,
    runner: Arc<dyn CommandRunner>,
}

impl PingProber {
    pub fn new(platform: Platform, runner: Arc<dyn CommandRunner>) -> Self {
        Self { platform, runner }
    }

    /// A prober for the running platform backed by real processes.
    pub fn system() -> Self {
        Self::new(
            Platform::current(),
            Arc::new(SystemRunner::with_timeout(PROBE_BACKSTOP)),
        )
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, addr: IpAddr) -> bool {
        let target = addr.to_string();
        let (program, flags) = ping_command(self.platform, addr);
        let mut args: Vec<&str> = flags.to_vec();
        args.push(&target);

        match self.runner.run(program, &args).await {
            Ok(output) => output.success(),
            Err(e) => {
                trace!("probe of {addr} failed ({:?}): {e}", e.class(Operation::Probe));
                false
            }
        }
    }
}

const WINDOWS_FLAGS: &[&str] = &["-n", "1", "-w", "600"];
const BSD_FLAGS: &[&str] = &["-c", "1", "-t", "1"];
const BSD_V6_FLAGS: &[&str] = &["-c", "1"];
const LINUX_FLAGS: &[&str] = &["-c", "1", "-W", "1"];
const PORTABLE_FLAGS: &[&str] = &["-c", "1"];

/// One packet, roughly one second of patience, per platform.
///
/// Timeout flags disagree between ping implementations (`-t` is a TTL on
/// OpenBSD and a TOS on NetBSD), so unknown platforms only get the packet
/// count and rely on [`PROBE_BACKSTOP`].
pub fn ping_command(platform: Platform, addr: IpAddr) -> (&'static str, &'static [&'static str]) {
    match (platform, addr) {
        (Platform::Windows, _) => ("ping", WINDOWS_FLAGS),
        (Platform::Bsd, IpAddr::V4(_)) => ("ping", BSD_FLAGS),
        (Platform::Bsd, IpAddr::V6(_)) => ("ping6", BSD_V6_FLAGS),
        (Platform::Linux, _) => ("ping", LINUX_FLAGS),
        (Platform::Other, _) => ("ping", PORTABLE_FLAGS),
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
