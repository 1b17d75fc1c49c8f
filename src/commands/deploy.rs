//! Deploy command entry point
//!
//! Wires configuration, plan, environment client, manifest store, and an
//! event sink into the deploy use case. The gas multiplier is parsed
//! before anything else so a malformed value never starts a run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::{DeployOptions, DeployUseCase};
use crate::config::{self, Config};
use crate::domain::ports::DeployEventSink;
use crate::domain::value_objects::{EnvironmentName, GasMultiplier};
use crate::infrastructure::{
    load_plan, CommandEnvironmentClient, ConsoleEventSink, JsonEventSink, JsonManifestStore,
};

pub fn cmd_deploy(
    environment: &str,
    gas_multiplier: Option<&str>,
    config_path: Option<&Path>,
    plan_path: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    // Reject a malformed multiplier before any file or process is touched.
    let multiplier = GasMultiplier::parse(gas_multiplier)?;
    let environment = EnvironmentName::new(environment)?;

    let config_file = config::locate(config_path)?;
    let (config, warnings) = Config::load_with_warnings(&config_file)
        .with_context(|| format!("loading {}", config_file.display()))?;
    if !json {
        for warning in &warnings {
            eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
        }
    }

    let environment_config = config.environment(environment.as_str())?;
    let plan_file = resolve_plan_path(&config_file, &config, plan_path);
    let plan = load_plan(&plan_file)?;

    if !json && verbose > 0 {
        eprintln!("plan: {} ({} components)", plan_file.display(), plan.len());
        for descriptor in plan.components() {
            eprintln!("  {}", descriptor.name);
        }
    }

    let base = config_file.parent().unwrap_or_else(|| Path::new("."));
    let client = CommandEnvironmentClient::new(
        &environment_config.client,
        environment_config.client_args.clone(),
        environment.clone(),
    );
    let manifest_store = JsonManifestStore::new(base.join(&config.data_dir));
    let options = DeployOptions::new(environment)
        .with_base_gas_limit(environment_config.base_gas_limit)
        .with_multiplier(multiplier)
        .with_settle(environment_config.settle());

    let sink: Box<dyn DeployEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout())
    };

    let use_case = DeployUseCase::new(client.clone(), client, manifest_store);
    let outcome = use_case.execute_with_events(&plan, &options, sink.as_ref())?;

    if !json {
        println!(
            "Done - {} components recorded in {}",
            outcome.component_count(),
            outcome.manifest_path.display()
        );
    }

    Ok(())
}

/// Resolve the plan file relative to the config file (shared with check)
pub(crate) fn resolve_plan_path(
    config_file: &Path,
    config: &Config,
    plan_path: Option<&Path>,
) -> PathBuf {
    let base = config_file.parent().unwrap_or_else(|| Path::new("."));
    plan_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base.join(&config.plan))
}
