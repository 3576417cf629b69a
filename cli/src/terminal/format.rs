use std::net::{IpAddr, Ipv6Addr};

use colored::*;
use netkit_common::network::interface::{InterfaceAddr, InterfaceInfo};
use netkit_core::discovery::Neighbor;

use crate::terminal::colors;
use crate::terminal::print::Detail;

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

/// `2000::/3`
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

pub fn ip_to_colored(ip: &IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(v4) => v4.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(v6) => v6.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn addr_to_detail(addr: &InterfaceAddr) -> Detail {
    match addr.address {
        IpAddr::V4(v4) => {
            let address = v4.to_string().color(colors::IPV4_ADDR);
            let prefix = addr.prefix.to_string().color(colors::IPV4_PREFIX);
            let value = format!("{address}/{prefix}").color(colors::SEPARATOR);
            ("IPv4".to_string(), value)
        }
        IpAddr::V6(v6) => {
            let address = v6.to_string().color(colors::IPV6_ADDR);
            let prefix = addr.prefix.to_string().color(colors::IPV6_PREFIX);
            let value = format!("{address}/{prefix}").color(colors::SEPARATOR);
            (ipv6_to_type_str(&v6).to_string(), value)
        }
    }
}

pub fn interface_details(intf: &InterfaceInfo) -> Vec<Detail> {
    let state = if intf.is_up {
        "up".green()
    } else {
        "down".red()
    };
    let mut details: Vec<Detail> = vec![("State".to_string(), state)];
    details.extend(intf.addrs.iter().map(addr_to_detail));
    if let Some(mac) = &intf.mac {
        details.push(("MAC".to_string(), mac.color(colors::MAC_ADDR)));
    }
    details
}

pub fn neighbor_details(neighbor: &Neighbor) -> Vec<Detail> {
    let mac = match &neighbor.entry.mac {
        Some(mac) => mac.color(colors::MAC_ADDR),
        None => "unknown".dimmed(),
    };
    let mut details: Vec<Detail> = vec![("MAC".to_string(), mac)];
    if let Some(vendor) = &neighbor.vendor {
        details.push(("Vendor".to_string(), vendor.color(colors::VENDOR)));
    }
    details
}

/// Single-line form used at the highest quiet level.
pub fn neighbor_line(neighbor: &Neighbor) -> String {
    match &neighbor.entry.mac {
        Some(mac) => format!("{} {}", neighbor.entry.ip, mac),
        None => neighbor.entry.ip.clone(),
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
