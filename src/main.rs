//! Stevedore CLI - dependency-aware contract deployment
//!
//! Usage: stevedore <COMMAND>
//!
//! Commands:
//!   deploy  Deploy the manifest's contracts in dependency order
//!   ledger  Show recorded deployments from a ledger file

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Deploy {
            manifest,
            network,
            ledger,
            dry_run,
        } => commands::deploy::run(manifest, network, ledger, dry_run, cli.json, cli.verbose),
        Commands::Ledger { ledger, network } => commands::ledger::run(ledger, network, cli.json),
    }
}
