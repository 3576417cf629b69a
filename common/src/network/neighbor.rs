//! # Neighbor Table Entries
//!
//! An entry is an IP address plus the hardware address the OS resolved for
//! it, if any. Every platform spells "not resolved" differently
//! (`(incomplete)` on macOS, `<incomplete>` from net-tools, a missing
//! `lladdr` from iproute2); they all become `mac: None` here.

use std::fmt;

const UNRESOLVED_MARKERS: &[&str] = &["(incomplete)", "<incomplete>", "incomplete"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighborEntry {
    pub ip: String,
    pub mac: Option<String>,
}

impl NeighborEntry {
    /// Builds an entry from raw tokens, dropping hardware addresses that
    /// only say the lookup is still pending.
    pub fn new(ip: &str, mac: Option<&str>) -> Self {
        let mac = mac
            .map(str::trim)
            .filter(|mac| !mac.is_empty() && !is_unresolved(mac))
            .map(str::to_string);
        Self {
            ip: ip.trim().to_string(),
            mac,
        }
    }

    pub fn resolved(ip: &str, mac: &str) -> Self {
        Self::new(ip, Some(mac))
    }

    pub fn unresolved(ip: &str) -> Self {
        Self::new(ip, None)
    }

    pub fn is_resolved(&self) -> bool {
        self.mac.is_some()
    }
}

impl fmt::Display for NeighborEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mac {
            Some(mac) => write!(f, "{} at {}", self.ip, mac),
            None => write!(f, "{} (unresolved)", self.ip),
        }
    }
}

fn is_unresolved(token: &str) -> bool {
    UNRESOLVED_MARKERS
        .iter()
        .any(|marker| token.eq_ignore_ascii_case(marker))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
