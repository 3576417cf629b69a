//! Shared domain types for `netkit`.
//!
//! Everything in here is free of process spawning and socket IO; the
//! behaviour that talks to the operating system lives in `netkit-core`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod outcome;
pub mod platform;
pub mod vendors;

pub use error::{DiscoveryError, ErrorClass, Operation};
pub use outcome::Discovery;
pub use platform::Platform;
