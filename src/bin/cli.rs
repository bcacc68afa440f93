// src/bin/cli.rs
use clap::Parser;
use petition_ingest::cli::{ self, Cli };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if !cli::run(Cli::parse())? {
        std::process::exit(1);
    }
    Ok(())
}
