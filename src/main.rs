use anyhow::Result;
use clap::Parser;

use agrovisor::cli::{Cli, Commands};
use agrovisor::commands::{compare, filter, inspect, legend};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Inspect(args) => inspect::run(&cli, args),
        Commands::Filter(args) => filter::run(&cli, args),
        Commands::Compare(args) => compare::run(&cli, args),
        Commands::Legend(args) => legend::run(&cli, args),
    }
}
