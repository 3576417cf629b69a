//! Cross-crate tests for `netkit`: the sweep pipeline and the discovery
//! service driven end to end through scripted processes.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod sweep;
#[cfg(test)]
mod utils;
