//! # Sweep Target Model
//!
//! What the `sweep` command was asked to cover:
//! * A CIDR block (e.g., `192.168.1.0/24`, `2001:db8::/120`).
//! * The local LAN (keyword `lan`), resolved from the host's interfaces.

use std::fmt;
use std::str::FromStr;

use crate::error::DiscoveryError;
use crate::network::range::Subnet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SweepTarget {
    /// The private IPv4 network of the primary interface.
    Lan,
    /// An explicit subnet.
    Subnet(Subnet),
}

impl FromStr for SweepTarget {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("lan") {
            return Ok(SweepTarget::Lan);
        }
        s.parse::<Subnet>().map(SweepTarget::Subnet)
    }
}

impl fmt::Display for SweepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepTarget::Lan => f.write_str("lan"),
            SweepTarget::Subnet(subnet) => write!(f, "{subnet}"),
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
