//! Check command entry point
//!
//! Validates configuration and the plan's declared order without touching
//! the target environment, and optionally probes the environment client.
//! Exits non-zero on any violation so CI can gate on it.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{self, Config};
use crate::domain::value_objects::EnvironmentName;
use crate::infrastructure::{load_plan, CommandEnvironmentClient};

use super::deploy::resolve_plan_path;

pub fn cmd_check(
    environment: Option<&str>,
    config_path: Option<&Path>,
    plan_path: Option<&Path>,
    json: bool,
) -> Result<()> {
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

    let plan_file = resolve_plan_path(&config_file, &config, plan_path);
    let plan = load_plan(&plan_file)?;
    plan.validate()
        .with_context(|| format!("validating {}", plan_file.display()))?;

    let mut client_ok = None;
    if let Some(environment) = environment {
        let environment = EnvironmentName::new(environment)?;
        let environment_config = config.environment(environment.as_str())?;
        let client = CommandEnvironmentClient::new(
            &environment_config.client,
            environment_config.client_args.clone(),
            environment,
        );
        if !client.check_available() {
            bail!(
                "environment client '{}' is not runnable",
                environment_config.client
            );
        }
        client_ok = Some(environment_config.client.clone());
    }

    if json {
        let output = serde_json::json!({
            "event": "check",
            "status": "ok",
            "plan": plan_file.display().to_string(),
            "component_count": plan.len(),
            "client": client_ok,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "✓ plan OK: {} components in {}",
            plan.len(),
            plan_file.display()
        );
        if let Some(client) = client_ok {
            println!("✓ environment client '{client}' is runnable");
        }
    }

    Ok(())
}
