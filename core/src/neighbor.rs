//! # Neighbor Table
//!
//! Reads the operating system's ARP / neighbor cache through its listing
//! tool. Lines that do not look like an entry (headers, interface banners,
//! blank lines) are skipped without complaint.

use netkit_common::network::neighbor::NeighborEntry;
use netkit_common::{Discovery, DiscoveryError, Platform};
use tracing::debug;

use crate::exec::CommandRunner;

/// Tokenization applied to each output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborRule {
    /// `10.0.0.5 dev eth0 lladdr aa:bb:cc:dd:ee:ff REACHABLE`
    ///
    /// The first token is the address; the hardware address follows the
    /// marker when there is one.
    LeadingAddress { marker: &'static str },
    /// `? (10.0.0.9) at 0:11:22:33:44:55 on en0 ifscope [ethernet]`
    Parenthesized { marker: &'static str },
    /// `  192.168.0.1     aa-bb-cc-dd-ee-ff     dynamic`
    Columns,
}

impl NeighborRule {
    pub fn parse_line(&self, line: &str) -> Option<NeighborEntry> {
        match *self {
            NeighborRule::LeadingAddress { marker } => {
                let mut tokens = line.split_whitespace();
                let ip = tokens.next()?;
                let mac = tokens.by_ref().find(|t| *t == marker).and(tokens.next());
                Some(NeighborEntry::new(ip, mac))
            }
            NeighborRule::Parenthesized { marker } => {
                let (_, rest) = line.split_once('(')?;
                let (ip, rest) = rest.split_once(')')?;
                let mut tokens = rest.split_whitespace();
                let mac = tokens.find(|t| *t == marker).and(tokens.next());
                Some(NeighborEntry::new(ip, mac))
            }
            NeighborRule::Columns => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                match fields.as_slice() {
                    [ip, mac, _, ..] if ip.matches('.').count() == 3 => {
                        Some(NeighborEntry::resolved(ip, mac))
                    }
                    _ => None,
                }
            }
        }
    }

    pub fn parse(&self, output: &str) -> Vec<NeighborEntry> {
        output.lines().filter_map(|line| self.parse_line(line)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborQuery {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub rule: NeighborRule,
}

pub fn neighbor_query(platform: Platform) -> Option<NeighborQuery> {
    match platform {
        Platform::Linux => Some(NeighborQuery {
            program: "ip",
            args: &["neigh"],
            rule: NeighborRule::LeadingAddress { marker: "lladdr" },
        }),
        Platform::Bsd => Some(NeighborQuery {
            program: "arp",
            args: &["-a"],
            rule: NeighborRule::Parenthesized { marker: "at" },
        }),
        Platform::Windows => Some(NeighborQuery {
            program: "arp",
            args: &["-a"],
            rule: NeighborRule::Columns,
        }),
        Platform::Other => None,
    }
}

/// Lists the neighbor cache of the host.
///
/// An empty table is still [`Discovery::Found`]; only a tool that cannot be
/// used yields [`Discovery::Failed`]. Callers wanting the best-effort list
/// use [`Discovery::unwrap_or_default`].
pub async fn read_neighbors(
    runner: &dyn CommandRunner,
    platform: Platform,
) -> Discovery<Vec<NeighborEntry>> {
    let Some(query) = neighbor_query(platform) else {
        return Discovery::Failed(DiscoveryError::UnsupportedPlatform(platform));
    };

    match runner.run_checked(query.program, query.args).await {
        Ok(stdout) => {
            let entries = query.rule.parse(&stdout);
            debug!("{} listed {} neighbors", query.program, entries.len());
            Discovery::Found(entries)
        }
        Err(e) => Discovery::Failed(e),
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
