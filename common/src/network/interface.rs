//! # Host Interfaces
//!
//! A flattened, display-ready view of the interfaces reported by
//! `pnet::datalink`, plus the heuristics used to pick the network behind
//! the `lan` sweep target.

use std::net::{IpAddr, Ipv4Addr};

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::network::range::Subnet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrFamily {
    Inet,
    Inet6,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub family: AddrFamily,
    pub address: IpAddr,
    pub prefix: u8,
    pub netmask: IpAddr,
    /// Only IPv4 networks have one.
    pub broadcast: Option<IpAddr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub name: String,
    pub is_up: bool,
    pub is_loopback: bool,
    pub mac: Option<String>,
    pub addrs: Vec<InterfaceAddr>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback traffic never leaves the host.
    IsLoopback,
    /// No private IPv4 network to sweep.
    NoPrivateIpv4,
}

impl From<&IpNetwork> for InterfaceAddr {
    fn from(net: &IpNetwork) -> Self {
        match net {
            IpNetwork::V4(v4) => InterfaceAddr {
                family: AddrFamily::Inet,
                address: IpAddr::V4(v4.ip()),
                prefix: v4.prefix(),
                netmask: IpAddr::V4(v4.mask()),
                broadcast: Some(IpAddr::V4(v4.broadcast())),
            },
            IpNetwork::V6(v6) => InterfaceAddr {
                family: AddrFamily::Inet6,
                address: IpAddr::V6(v6.ip()),
                prefix: v6.prefix(),
                netmask: IpAddr::V6(v6.mask()),
                broadcast: None,
            },
        }
    }
}

impl From<&NetworkInterface> for InterfaceInfo {
    fn from(intf: &NetworkInterface) -> Self {
        InterfaceInfo {
            name: intf.name.clone(),
            is_up: intf.is_up(),
            is_loopback: intf.is_loopback(),
            mac: intf.mac.map(|mac| mac.to_string()),
            addrs: intf.ips.iter().map(InterfaceAddr::from).collect(),
        }
    }
}

impl InterfaceInfo {
    /// First private IPv4 address on the interface, as its network.
    pub fn private_ipv4_subnet(&self) -> Option<Subnet> {
        self.addrs.iter().find_map(|addr| match addr.address {
            IpAddr::V4(v4) if is_private_v4(v4) => Subnet::new(addr.address, addr.prefix).ok(),
            _ => None,
        })
    }
}

/// Picks the network the `lan` target refers to.
///
/// Interfaces are considered in the order the OS listed them.
pub fn select_lan_subnet(interfaces: &[InterfaceInfo]) -> Option<Subnet> {
    interfaces
        .iter()
        .filter(|intf| is_viable_lan_interface(intf).is_ok())
        .find_map(InterfaceInfo::private_ipv4_subnet)
}

fn is_viable_lan_interface(intf: &InterfaceInfo) -> Result<(), ViabilityError> {
    if !intf.is_up {
        return Err(ViabilityError::IsDown);
    }
    if intf.is_loopback {
        return Err(ViabilityError::IsLoopback);
    }
    if intf.private_ipv4_subnet().is_none() {
        return Err(ViabilityError::NoPrivateIpv4);
    }
    Ok(())
}

fn is_private_v4(addr: Ipv4Addr) -> bool {
    addr.is_private() && !addr.is_loopback()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
