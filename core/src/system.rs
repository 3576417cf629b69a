use netkit_common::network::interface::{InterfaceInfo, select_lan_subnet};
use netkit_common::network::range::Subnet;
use pnet::datalink;
use tracing::debug;

/// Every interface the OS reports, in the order it reports them.
pub fn list_interfaces() -> Vec<InterfaceInfo> {
    datalink::interfaces().iter().map(InterfaceInfo::from).collect()
}

/// The private IPv4 network of the first usable interface.
pub fn lan_subnet() -> Option<Subnet> {
    let subnet = select_lan_subnet(&list_interfaces());
    debug!("local network resolved to {subnet:?}");
    subnet
}
