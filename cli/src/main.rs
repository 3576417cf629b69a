mod commands;
mod terminal;

use commands::{CommandLine, Commands, arp, gateway, ifaces, sweep};
use netkit_common::config::Config;
use netkit_core::discovery::DiscoveryService;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);

    let service = DiscoveryService::system();

    match commands.command {
        Commands::Ifaces => ifaces::ifaces(&service, &cfg)?,
        Commands::Gateway => gateway::gateway(&service, &cfg).await?,
        Commands::Arp => arp::arp(&service, &cfg).await?,
        Commands::Sweep { target, limit } => sweep::sweep(target, limit, &cfg).await?,
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
