//! `orderflow` - order-of-service to slide-order converter.

use clap::Parser;

use orderflow::cli::Cli;
use orderflow::commands;

fn main() -> anyhow::Result<()> {
    commands::run(Cli::parse())
}
