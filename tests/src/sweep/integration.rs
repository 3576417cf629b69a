use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use netkit_common::Platform;
use netkit_common::network::range::{Subnet, cidr_hosts};
use netkit_core::probe::PingProber;
use netkit_core::sweep::{DEFAULT_SWEEP_LIMIT, SweepCoordinator};

use crate::utils::{CountingProber, ScriptedRunner};

fn ips(addrs: &[&str]) -> Vec<IpAddr> {
    addrs.iter().map(|a| a.parse().unwrap()).collect()
}

/// Each host is pinged exactly once and only the answering ones come back,
/// in ascending order.
#[tokio::test]
async fn ping_sweep_reports_sorted_live_hosts() -> anyhow::Result<()> {
    let runner = Arc::new(ScriptedRunner::with_alive([
        "192.168.1.200",
        "192.168.1.1",
        "192.168.1.17",
        "192.168.1.255",
    ]));
    let prober = PingProber::new(Platform::Linux, runner.clone());
    let coordinator = SweepCoordinator::new(Arc::new(prober), DEFAULT_SWEEP_LIMIT);

    let result = coordinator.sweep_cidr("192.168.1.0/24").await?;

    let live: Vec<IpAddr> = result.hosts().copied().collect();
    assert_eq!(live, ips(&["192.168.1.1", "192.168.1.17", "192.168.1.200"]));
    assert_eq!(result.probed, 254);
    assert_eq!(runner.call_count("ping"), 254);
    Ok(())
}

#[tokio::test]
async fn bsd_ipv6_sweep_uses_ping6() -> anyhow::Result<()> {
    let runner = Arc::new(ScriptedRunner::with_alive(["2001:db8::2"]));
    let prober = PingProber::new(Platform::Bsd, runner.clone());
    let coordinator = SweepCoordinator::new(Arc::new(prober), 4);

    let result = coordinator.sweep_cidr("2001:db8::/126").await?;

    assert_eq!(result.hosts().copied().collect::<Vec<_>>(), ips(&["2001:db8::2"]));
    assert_eq!(runner.call_count("ping6"), 3);
    Ok(())
}

#[tokio::test]
async fn large_sweep_stays_within_limit() {
    let prober = Arc::new(CountingProber::default());
    let coordinator = SweepCoordinator::new(prober.clone(), 64);
    let subnet: Subnet = "10.42.0.0/22".parse().unwrap();

    let result = coordinator.sweep(&subnet).await;

    assert!(result.is_empty());
    assert_eq!(result.probed, 1022);
    assert_eq!(prober.calls.load(Ordering::SeqCst), 1022);
    assert!(prober.peak() <= 64, "peak was {}", prober.peak());
}

#[tokio::test]
async fn sweep_covers_exactly_the_expanded_hosts() -> anyhow::Result<()> {
    let alive: Vec<&'static str> = vec!["10.0.0.1", "10.0.0.14"];
    let runner = Arc::new(ScriptedRunner::with_alive(alive.clone()));
    let coordinator = SweepCoordinator::new(
        Arc::new(PingProber::new(Platform::Windows, runner.clone())),
        2,
    );

    let result = coordinator.sweep_cidr("10.0.0.0/28").await?;

    assert_eq!(runner.call_count("ping") as u128, result.subnet.host_count());
    assert_eq!(cidr_hosts("10.0.0.0/28")?.count(), 14);
    assert_eq!(result.hosts().copied().collect::<Vec<_>>(), ips(&alive));
    Ok(())
}

#[tokio::test]
async fn slash_32_sweep_runs_nothing() -> anyhow::Result<()> {
    let runner = Arc::new(ScriptedRunner::default());
    let coordinator =
        SweepCoordinator::new(Arc::new(PingProber::new(Platform::Linux, runner.clone())), 8);

    let result = coordinator.sweep_cidr("10.0.0.1/32").await?;

    assert!(result.is_empty());
    assert_eq!(runner.call_count("ping"), 0);
    Ok(())
}

#[tokio::test]
#[ignore]
#[cfg(target_os = "linux")]
async fn real_sweep_of_loopback() -> anyhow::Result<()> {
    let coordinator = SweepCoordinator::new(Arc::new(PingProber::system()), 4);
    let result = coordinator.sweep_cidr("127.0.0.0/30").await?;
    assert_eq!(result.hosts().copied().collect::<Vec<_>>(), ips(&["127.0.0.1", "127.0.0.2"]));
    Ok(())
}
