//! CLI definitions
//!
//! Usage: stagehand <COMMAND>
//!
//! Commands:
//!   deploy  Deploy the component plan to a target environment
//!   check   Validate configuration and plan without deploying

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stagehand - dependency-aware deployment orchestrator
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit an NDJSON event stream instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the component plan to a target environment
    Deploy {
        /// Target environment name (keys the manifest artifact)
        environment: String,

        /// Scale factor applied to every step's gas ceiling (default 1)
        #[arg(long)]
        gas_multiplier: Option<String>,

        /// Config file (default: ./stagehand.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plan file (default: taken from config)
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Validate configuration and plan without deploying
    Check {
        /// Also probe this environment's client program
        environment: Option<String>,

        /// Config file (default: ./stagehand.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Plan file (default: taken from config)
        #[arg(long)]
        plan: Option<PathBuf>,
    },
}
