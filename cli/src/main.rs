mod commands;
mod session;
mod terminal;

use commands::{CommandLine, Commands, analyze, interactive, system};
use macviz_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_vendor: commands.no_vendor,
        out_dir: commands.out,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Some(Commands::Analyze { mac }) => analyze::analyze_one(mac, &cfg),
        Some(Commands::System) => {
            print::header("system mac discovery", cfg.quiet);
            system::system(&cfg)
        }
        None => interactive::run(&cfg),
    }
}
