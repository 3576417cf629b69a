//! Host-side network discovery for `netkit`.
//!
//! Everything here shells out to the platform's own tools through
//! [`exec::CommandRunner`], so parsing can be exercised with canned output.

pub mod discovery;
pub mod exec;
pub mod gateway;
pub mod neighbor;
pub mod probe;
pub mod sweep;
pub mod system;
pub mod vendors;
