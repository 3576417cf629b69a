//! # Best-effort Outcomes
//!
//! Gateway and neighbor discovery may legitimately come back empty-handed.
//! [`Discovery`] keeps the three cases apart so callers can decide whether
//! to log, degrade, or display "unknown", instead of every failure being
//! folded into `None` at the source.

use tracing::debug;

use crate::error::{DiscoveryError, ErrorClass, Operation};

#[derive(Debug)]
pub enum Discovery<T> {
    /// The value was located.
    Found(T),
    /// The tool ran but its output held nothing matching.
    NotFound,
    /// The tool could not be used; the error is kept for logging.
    Failed(DiscoveryError),
}

impl<T> Discovery<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Discovery::Found(_))
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Discovery::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Discovery::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DiscoveryError> {
        match self {
            Discovery::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Lookup failures are never probe failures, whatever the tool did.
    pub fn error_class(&self) -> Option<ErrorClass> {
        self.error().map(|err| err.class(Operation::Discovery))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Discovery<U> {
        match self {
            Discovery::Found(value) => Discovery::Found(f(value)),
            Discovery::NotFound => Discovery::NotFound,
            Discovery::Failed(err) => Discovery::Failed(err),
        }
    }

    /// Emits the failure detail at debug level and passes `self` through.
    pub fn log_failure(self, what: &str) -> Self {
        match &self {
            Discovery::Failed(err) => {
                debug!("{what} unavailable ({:?}): {err}", err.class(Operation::Discovery))
            }
            Discovery::NotFound => debug!("{what} not found"),
            Discovery::Found(_) => {}
        }
        self
    }
}

impl<T: Default> Discovery<T> {
    pub fn unwrap_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Discovery<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Discovery::Found(value),
            None => Discovery::NotFound,
        }
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
