mod cli;
mod domain;
mod error;
mod presentation;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    Cli::parse().execute()
}
