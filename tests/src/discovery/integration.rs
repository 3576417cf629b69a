use std::sync::Arc;

use netkit_common::network::neighbor::NeighborEntry;
use netkit_common::vendors::VendorRepository;
use netkit_common::{Discovery, DiscoveryError, ErrorClass, Operation, Platform};
use netkit_core::discovery::DiscoveryService;

use crate::utils::ScriptedRunner;

struct PrefixVendors;

impl VendorRepository for PrefixVendors {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        mac.to_lowercase()
            .starts_with("aa")
            .then(|| "Acme Networks".to_string())
    }
}

fn service(runner: ScriptedRunner, platform: Platform) -> DiscoveryService {
    DiscoveryService::new(Arc::new(runner), Box::new(PrefixVendors), platform)
}

#[tokio::test]
async fn gateway_on_every_platform() {
    let cases = [
        (
            Platform::Linux,
            "ip",
            "default via 192.168.1.1 dev wlan0 proto dhcp metric 600\n",
            "192.168.1.1",
        ),
        (
            Platform::Bsd,
            "route",
            "   route to: default\n    gateway: 10.0.0.1\n  interface: en0\n",
            "10.0.0.1",
        ),
        (
            Platform::Windows,
            "ipconfig",
            "   Default Gateway . . . . . . . . . : 172.16.0.254\n",
            "172.16.0.254",
        ),
    ];

    for (platform, program, stdout, expected) in cases {
        let runner = ScriptedRunner::default().answer(program, 0, stdout);
        let gateway = service(runner, platform).gateway().await;
        assert_eq!(
            gateway.into_option().as_deref(),
            Some(expected),
            "{platform}"
        );
    }
}

#[tokio::test]
async fn gateway_failures_stay_best_effort() {
    let missing_tool = service(ScriptedRunner::default(), Platform::Linux).gateway().await;
    let err = missing_tool.error().unwrap();
    assert!(matches!(err, DiscoveryError::Spawn { .. }));
    assert_eq!(
        err.class(Operation::Discovery),
        ErrorClass::DiscoveryUnavailable
    );
    assert_eq!(
        missing_tool.error_class(),
        Some(ErrorClass::DiscoveryUnavailable)
    );

    let runner = ScriptedRunner::default().answer("ip", 0, "default dev ppp0 scope link\n");
    let no_marker = service(runner, Platform::Linux).gateway().await;
    assert!(matches!(no_marker, Discovery::NotFound));
}

#[tokio::test]
async fn neighbors_are_parsed_and_enriched() {
    let runner = ScriptedRunner::default().answer(
        "arp",
        0,
        "? (10.0.0.1) at aa:bb:cc:dd:ee:ff on en0 ifscope [ethernet]\n\
         ? (10.0.0.9) at (incomplete) on en0 ifscope [ethernet]\n\
         ? (10.0.0.20) at 11:22:33:44:55:66 on en0 ifscope [ethernet]\n",
    );

    let neighbors = service(runner, Platform::Bsd).neighbors().await.unwrap_or_default();

    let entries: Vec<&NeighborEntry> = neighbors.iter().map(|n| &n.entry).collect();
    assert_eq!(
        entries,
        vec![
            &NeighborEntry::resolved("10.0.0.1", "aa:bb:cc:dd:ee:ff"),
            &NeighborEntry::unresolved("10.0.0.9"),
            &NeighborEntry::resolved("10.0.0.20", "11:22:33:44:55:66"),
        ]
    );
    let vendors: Vec<Option<&str>> = neighbors.iter().map(|n| n.vendor.as_deref()).collect();
    assert_eq!(vendors, vec![Some("Acme Networks"), None, None]);
}

#[tokio::test]
async fn windows_neighbor_table() {
    let runner = ScriptedRunner::default().answer(
        "arp",
        0,
        "\nInterface: 192.168.0.23 --- 0x5\n\
         \x20 Internet Address      Physical Address      Type\n\
         \x20 192.168.0.1           aa-bb-cc-dd-ee-ff     dynamic\n",
    );

    let neighbors = service(runner, Platform::Windows).neighbors().await.unwrap_or_default();

    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].entry.ip, "192.168.0.1");
    assert_eq!(neighbors[0].vendor.as_deref(), Some("Acme Networks"));
}

#[tokio::test]
async fn failing_neighbor_tool_yields_empty_list() {
    let runner = ScriptedRunner::default().answer("ip", 255, "");
    let neighbors = service(runner, Platform::Linux).neighbors().await;
    assert!(neighbors.error().is_some());
    assert!(neighbors.unwrap_or_default().is_empty());
}
