use netkit_common::config::Config;
use netkit_core::discovery::DiscoveryService;

use crate::mprint;
use crate::terminal::{format, print};

pub fn ifaces(service: &DiscoveryService, cfg: &Config) -> anyhow::Result<()> {
    print::header("network interfaces", cfg.quiet);

    let interfaces = service.interfaces();
    if interfaces.is_empty() {
        netkit_common::warn!("No network interfaces reported by the OS.");
        return Ok(());
    }

    for (idx, intf) in interfaces.iter().enumerate() {
        if cfg.quiet > 1 {
            let addrs: Vec<String> = intf.addrs.iter().map(|a| a.address.to_string()).collect();
            print::print(&format!("{} {}", intf.name, addrs.join(",")));
            continue;
        }
        print::tree_head(idx, &intf.name);
        print::as_tree_one_level(format::interface_details(intf));
        if idx + 1 != interfaces.len() {
            mprint!();
        }
    }
    Ok(())
}
