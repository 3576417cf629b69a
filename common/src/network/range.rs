//! # Subnets and Host Enumeration
//!
//! Turns CIDR notation into the sequence of host addresses a sweep should
//! probe. Input is not required to be network aligned: `10.0.0.7/24` is
//! accepted and masked down to `10.0.0.0/24`.
//!
//! Host rules per family:
//! * **IPv4**: network and broadcast are excluded. A `/31` is a point-to-point
//!   link where both addresses are usable, a `/32` has no hosts.
//! * **IPv6**: only the subnet-router anycast (network) address is excluded.
//!   A `/127` yields both addresses, a `/128` has no hosts.

use std::fmt;
use std::iter::FusedIterator;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::DiscoveryError;

const IPV4_BITS: u8 = 32;
const IPV6_BITS: u8 = 128;

/// A network in CIDR form, always stored with its host bits cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: IpNetwork,
}

impl Subnet {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, DiscoveryError> {
        let input = format!("{addr}/{prefix}");
        let network =
            IpNetwork::new(addr, prefix).map_err(|e| DiscoveryError::invalid_subnet(&input, e))?;
        Self::from_network(network).map_err(|e| DiscoveryError::invalid_subnet(&input, e))
    }

    fn from_network(network: IpNetwork) -> Result<Self, pnet::ipnetwork::IpNetworkError> {
        let network = IpNetwork::new(network.network(), network.prefix())?;
        Ok(Self { network })
    }

    pub fn network(&self) -> IpAddr {
        self.network.network()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn is_ipv4(&self) -> bool {
        self.network.is_ipv4()
    }

    /// Lazily enumerates the usable host addresses in ascending order.
    ///
    /// Each call starts a fresh sequence, so a subnet can be walked any
    /// number of times.
    pub fn hosts(&self) -> HostIter {
        let bits = self.family_bits();
        let prefix = self.prefix();
        let start = addr_to_u128(self.network());
        let last = start | host_mask(bits, prefix);

        match (bits, bits - prefix) {
            (_, 0) => HostIter::empty(bits),
            (_, 1) => HostIter::new(bits, start, last),
            (IPV4_BITS, _) => HostIter::new(bits, start + 1, last - 1),
            _ => HostIter::new(bits, start + 1, last),
        }
    }

    /// Number of addresses [`Subnet::hosts`] will yield.
    ///
    /// Saturates at `u128::MAX` for an IPv6 `/0`.
    pub fn host_count(&self) -> u128 {
        self.hosts().remaining()
    }

    fn family_bits(&self) -> u8 {
        if self.is_ipv4() { IPV4_BITS } else { IPV6_BITS }
    }
}

impl FromStr for Subnet {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let network = trimmed
            .parse::<IpNetwork>()
            .map_err(|e| DiscoveryError::invalid_subnet(trimmed, e))?;
        Self::from_network(network).map_err(|e| DiscoveryError::invalid_subnet(trimmed, e))
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

impl IntoIterator for &Subnet {
    type Item = IpAddr;
    type IntoIter = HostIter;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts()
    }
}

/// Parses `cidr` and returns its host sequence.
pub fn cidr_hosts(cidr: &str) -> Result<HostIter, DiscoveryError> {
    Ok(cidr.parse::<Subnet>()?.hosts())
}

/// Iterator over an inclusive span of addresses of a single family.
#[derive(Debug, Clone)]
pub struct HostIter {
    bits: u8,
    next: u128,
    end: u128,
    exhausted: bool,
}

impl HostIter {
    fn new(bits: u8, next: u128, end: u128) -> Self {
        Self {
            bits,
            next,
            end,
            exhausted: next > end,
        }
    }

    fn empty(bits: u8) -> Self {
        Self {
            bits,
            next: 0,
            end: 0,
            exhausted: true,
        }
    }

    fn remaining(&self) -> u128 {
        if self.exhausted {
            return 0;
        }
        (self.end - self.next).saturating_add(1)
    }

    fn to_addr(&self, value: u128) -> IpAddr {
        if self.bits == IPV4_BITS {
            IpAddr::V4(Ipv4Addr::from(value as u32))
        } else {
            IpAddr::V6(Ipv6Addr::from(value))
        }
    }
}

impl Iterator for HostIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.next;
        if current == self.end {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        Some(self.to_addr(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for HostIter {}

fn addr_to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn host_mask(bits: u8, prefix: u8) -> u128 {
    let host_bits = u32::from(bits - prefix);
    if host_bits >= 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
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

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn slash_24_excludes_network_and_broadcast() {
        let hosts: Vec<IpAddr> = cidr_hosts("192.168.1.0/24").unwrap().collect();
        assert_eq!(hosts.len(), 254);
        assert_eq!(hosts.first(), Some(&v4(192, 168, 1, 1)));
        assert_eq!(hosts.last(), Some(&v4(192, 168, 1, 254)));
        assert!(!hosts.contains(&v4(192, 168, 1, 0)));
        assert!(!hosts.contains(&v4(192, 168, 1, 255)));
    }

    #[test]
    fn host_bits_are_masked() {
        let subnet: Subnet = "10.0.0.77/30".parse().unwrap();
        assert_eq!(subnet.network(), v4(10, 0, 0, 76));
        assert_eq!(subnet.to_string(), "10.0.0.76/30");
        let hosts: Vec<IpAddr> = subnet.hosts().collect();
        assert_eq!(hosts, vec![v4(10, 0, 0, 77), v4(10, 0, 0, 78)]);
    }

    #[test]
    fn hosts_are_ascending_and_unique() {
        let hosts: Vec<IpAddr> = cidr_hosts("172.16.0.0/22").unwrap().collect();
        assert_eq!(hosts.len(), 1022);
        assert!(hosts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn slash_32_is_empty() {
        let subnet: Subnet = "10.1.2.3/32".parse().unwrap();
        assert_eq!(subnet.hosts().count(), 0);
        assert_eq!(subnet.host_count(), 0);
    }

    #[test]
    fn bare_address_is_a_full_length_prefix() {
        let subnet: Subnet = "10.1.2.3".parse().unwrap();
        assert_eq!(subnet.prefix(), 32);
        assert_eq!(subnet.hosts().next(), None);
    }

    #[test]
    fn slash_31_yields_both_addresses() {
        let hosts: Vec<IpAddr> = cidr_hosts("10.0.0.0/31").unwrap().collect();
        assert_eq!(hosts, vec![v4(10, 0, 0, 0), v4(10, 0, 0, 1)]);
    }

    #[test]
    fn slash_16_count_is_exact() {
        let subnet: Subnet = "10.20.0.0/16".parse().unwrap();
        assert_eq!(subnet.host_count(), 65_534);
        assert_eq!(subnet.hosts().size_hint(), (65_534, Some(65_534)));
    }

    #[test]
    fn slash_0_covers_everything_but_the_ends() {
        let subnet: Subnet = "0.0.0.0/0".parse().unwrap();
        assert_eq!(subnet.host_count(), (1u128 << 32) - 2);
        assert_eq!(subnet.hosts().next(), Some(v4(0, 0, 0, 1)));
    }

    #[test]
    fn ipv6_excludes_only_the_network_address() {
        let hosts: Vec<IpAddr> = cidr_hosts("2001:db8::/126").unwrap().collect();
        let expected: Vec<IpAddr> = ["2001:db8::1", "2001:db8::2", "2001:db8::3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(hosts, expected);
    }

    #[test]
    fn ipv6_edge_prefixes() {
        assert_eq!(cidr_hosts("fe80::1/128").unwrap().count(), 0);
        assert_eq!(cidr_hosts("fe80::/127").unwrap().count(), 2);
        let everything: Subnet = "::/0".parse().unwrap();
        assert_eq!(everything.host_count(), u128::MAX);
    }

    #[test]
    fn hosts_can_be_restarted() {
        let subnet: Subnet = "192.168.7.0/29".parse().unwrap();
        let first: Vec<IpAddr> = subnet.hosts().collect();
        let second: Vec<IpAddr> = (&subnet).into_iter().collect();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn iterator_is_fused() {
        let mut hosts = cidr_hosts("10.0.0.0/30").unwrap();
        assert_eq!(hosts.by_ref().count(), 2);
        assert_eq!(hosts.next(), None);
        assert_eq!(hosts.next(), None);
    }

    #[test]
    fn invalid_input_is_rejected() {
        for input in ["not-a-cidr", "10.0.0.0/33", "300.1.1.1/24", "", "2001:db8::/129"] {
            let err = input.parse::<Subnet>().unwrap_err();
            assert!(
                matches!(err, DiscoveryError::InvalidSubnet { .. }),
                "{input} produced {err:?}"
            );
        }
    }

    #[test]
    fn subnet_new_normalizes() {
        let subnet = Subnet::new(v4(192, 168, 5, 200), 24).unwrap();
        assert_eq!(subnet.network(), v4(192, 168, 5, 0));
        assert_eq!(subnet.prefix(), 24);
        assert_eq!(subnet.hosts().next(), Some(v4(192, 168, 5, 1)));
        assert!(Subnet::new(v4(1, 1, 1, 1), 40).is_err());
    }
}
