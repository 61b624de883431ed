mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{bounds, filter, filters};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Filter(args) => filter::run(&cli, args),
        Commands::Bounds(args) => bounds::run(&cli, args),
        Commands::Filters => filters::run(&cli),
    }
}

fn main() -> anyhow::Result<()> { run() }
