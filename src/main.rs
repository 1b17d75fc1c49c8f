//! Stagehand CLI - dependency-aware deployment orchestrator
//!
//! Usage: stagehand <COMMAND>
//!
//! Commands:
//!   deploy  Deploy the component plan to a target environment
//!   check   Validate configuration and plan without deploying

use anyhow::Result;
use clap::Parser;

use stagehand::cli::{Cli, Commands};
use stagehand::commands::{cmd_check, cmd_deploy};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            environment,
            gas_multiplier,
            config,
            plan,
        } => cmd_deploy(
            &environment,
            gas_multiplier.as_deref(),
            config.as_deref(),
            plan.as_deref(),
            cli.json,
            cli.verbose,
        ),
        Commands::Check {
            environment,
            config,
            plan,
        } => cmd_check(
            environment.as_deref(),
            config.as_deref(),
            plan.as_deref(),
            cli.json,
        ),
    }
}
