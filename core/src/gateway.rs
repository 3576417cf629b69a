//! # Default Gateway
//!
//! Asks the platform's routing tool for the default route and pulls the
//! next-hop address out of its text output. Each platform gets one query,
//! pairing the command to run with the rule that reads its answer.

use netkit_common::{Discovery, DiscoveryError, Platform};
use tracing::debug;

use crate::exec::CommandRunner;

/// How a gateway address is located in a tool's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayRule {
    /// The whitespace token following the marker token, anywhere in the output.
    TokenAfter(&'static str),
    /// The value after the first `:` of the first trimmed line starting with the prefix.
    LinePrefix(&'static str),
    /// The first non-empty value after the first `:` on lines containing the marker.
    LineContains(&'static str),
}

impl GatewayRule {
    pub fn extract(&self, output: &str) -> Option<String> {
        match *self {
            GatewayRule::TokenAfter(marker) => {
                let mut tokens = output.split_whitespace();
                tokens.find(|token| *token == marker)?;
                tokens.next().map(str::to_string)
            }
            GatewayRule::LinePrefix(prefix) => output
                .lines()
                .map(str::trim)
                .find(|line| line.starts_with(prefix))
                .and_then(value_after_colon),
            GatewayRule::LineContains(marker) => output
                .lines()
                .filter(|line| line.contains(marker))
                .find_map(value_after_colon),
        }
    }
}

fn value_after_colon(line: &str) -> Option<String> {
    let (_, value) = line.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayQuery {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub rule: GatewayRule,
}

/// The routing query for `platform`, if there is one.
pub fn gateway_query(platform: Platform) -> Option<GatewayQuery> {
    match platform {
        Platform::Linux => Some(GatewayQuery {
            program: "ip",
            args: &["route", "show", "default"],
            rule: GatewayRule::TokenAfter("via"),
        }),
        Platform::Bsd => Some(GatewayQuery {
            program: "route",
            args: &["-n", "get", "default"],
            rule: GatewayRule::LinePrefix("gateway:"),
        }),
        Platform::Windows => Some(GatewayQuery {
            program: "ipconfig",
            args: &[],
            rule: GatewayRule::LineContains("Default Gateway"),
        }),
        Platform::Other => None,
    }
}

/// Finds the default gateway of the host.
///
/// A failing tool and an unknown platform both surface as
/// [`Discovery::Failed`]; output without a gateway is [`Discovery::NotFound`].
pub async fn resolve_gateway(runner: &dyn CommandRunner, platform: Platform) -> Discovery<String> {
    let Some(query) = gateway_query(platform) else {
        return Discovery::Failed(DiscoveryError::UnsupportedPlatform(platform));
    };

    let stdout = match runner.run_checked(query.program, query.args).await {
        Ok(stdout) => stdout,
        Err(e) => return Discovery::Failed(e),
    };

    let gateway = query.rule.extract(&stdout);
    debug!("{} reported gateway {:?}", query.program, gateway);
    gateway.into()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
