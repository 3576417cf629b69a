//! # Discovery Errors
//!
//! Every failure the toolkit can observe. Only [`DiscoveryError::InvalidSubnet`]
//! is ever returned to the caller of a sweep; the rest are downgraded to a
//! negative probe result or to [`crate::Discovery::Failed`].

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid subnet '{input}': {reason}")]
    InvalidSubnet { input: String, reason: String },

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {}", exit_code_str(.code))]
    NonZeroExit { program: String, code: Option<i32> },

    #[error("'{program}' did not finish within {after:?}")]
    Timeout { program: String, after: Duration },

    #[error("no discovery command is known for platform '{0}'")]
    UnsupportedPlatform(Platform),
}

/// Coarse classification used when deciding whether an error may surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed CIDR input, fatal to the call.
    InvalidSubnet,
    /// A ping could not be run or did not succeed. Always read as "unreachable".
    ProbeFailure,
    /// A gateway or neighbor lookup came back with nothing usable.
    DiscoveryUnavailable,
}

/// The step that ran the failing tool. The same process error means a
/// negative probe during a sweep but an unavailable lookup elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Probe,
    Discovery,
}

impl DiscoveryError {
    pub fn invalid_subnet(input: &str, reason: impl ToString) -> Self {
        Self::InvalidSubnet {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn class(&self, during: Operation) -> ErrorClass {
        match (self, during) {
            (Self::InvalidSubnet { .. }, _) => ErrorClass::InvalidSubnet,
            (Self::UnsupportedPlatform(_), _) => ErrorClass::DiscoveryUnavailable,
            (_, Operation::Probe) => ErrorClass::ProbeFailure,
            (_, Operation::Discovery) => ErrorClass::DiscoveryUnavailable,
        }
    }
}

fn exit_code_str(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
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
