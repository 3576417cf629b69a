pub mod arp;
pub mod gateway;
pub mod ifaces;
pub mod sweep;

use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser, Subcommand};
use netkit_common::network::target::SweepTarget;
use netkit_core::sweep::DEFAULT_SWEEP_LIMIT;

#[derive(Parser)]
#[command(name = "netkit")]
#[command(about = "A small network diagnostics toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output: once hides banners and headers, twice prints results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show network interfaces and their addresses
    #[command(alias = "i")]
    Ifaces,
    /// Show the default gateway
    #[command(alias = "g")]
    Gateway,
    /// Show the ARP / neighbor table
    #[command(alias = "a", alias = "neigh")]
    Arp,
    /// Ping every host of a network and list the ones that answer
    #[command(alias = "s")]
    Sweep {
        /// A CIDR such as 192.168.1.0/24, or `lan` for the local network
        target: SweepTarget,

        /// Maximum number of pings in flight
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_SWEEP_LIMIT,
            value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
        )]
        limit: usize,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
