use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stevedore - dependency-aware contract deployment
#[derive(Parser, Debug)]
#[command(name = "stevedore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the manifest's contracts in dependency order
    Deploy {
        /// Path to the deployment manifest
        #[arg(short, long, default_value = "deploy.toml")]
        manifest: PathBuf,

        /// Numeric network identifier
        #[arg(short, long, default_value_t = 1337)]
        network: u64,

        /// Ledger file (defaults to stevedore.ledger next to the manifest)
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Compute and print the plan without submitting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show recorded deployments from a ledger file
    Ledger {
        /// Ledger file to read
        #[arg(long, default_value = "stevedore.ledger")]
        ledger: PathBuf,

        /// Only show deployments for this network
        #[arg(short, long)]
        network: Option<u64>,
    },
}
