//! TOML plan loader
//!
//! Reads the descriptor set from its plan file. The TOML shape is an
//! ordered array of components:
//!
//! ```toml
//! [[component]]
//! name = "nodes_data"
//! depends_on = ["contract_manager"]
//! args = [{ lit = 5260000 }, { ref = "contract_manager" }]
//! gas_limit = 8000000
//! ```
//!
//! Loading only converts the file into domain types; the order-validity
//! invariant is checked by `DeploymentPlan::validate` at run start.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::entities::{ComponentDescriptor, ConstructorArg, DeploymentPlan};
use crate::domain::value_objects::{LogicalName, LogicalNameError};

#[derive(Debug, Deserialize)]
struct TomlPlan {
    #[serde(default)]
    component: Vec<TomlComponent>,
}

#[derive(Debug, Deserialize)]
struct TomlComponent {
    name: String,
    #[serde(default)]
    args: Vec<TomlArg>,
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    gas_limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlArg {
    Reference {
        #[serde(rename = "ref")]
        reference: String,
    },
    Literal {
        lit: serde_json::Value,
    },
}

#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("cannot read plan file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid plan file {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("invalid name in plan file {path}: {source}")]
    InvalidName {
        path: PathBuf,
        source: LogicalNameError,
    },
}

/// Load the descriptor set from a plan file
pub fn load_plan(path: &Path) -> Result<DeploymentPlan, PlanLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| PlanLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let toml_plan: TomlPlan = toml::from_str(&content).map_err(|e| PlanLoadError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let name = |raw: String| {
        LogicalName::new(raw).map_err(|source| PlanLoadError::InvalidName {
            path: path.to_path_buf(),
            source,
        })
    };

    let mut components = Vec::with_capacity(toml_plan.component.len());
    for component in toml_plan.component {
        let args = component
            .args
            .into_iter()
            .map(|arg| match arg {
                TomlArg::Reference { reference } => name(reference).map(ConstructorArg::Reference),
                TomlArg::Literal { lit } => Ok(ConstructorArg::Literal(lit)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let depends_on = component
            .depends_on
            .into_iter()
            .map(&name)
            .collect::<Result<Vec<_>, _>>()?;

        let mut descriptor = ComponentDescriptor::new(name(component.name)?)
            .with_args(args)
            .with_depends_on(depends_on);
        if let Some(gas_limit) = component.gas_limit {
            descriptor = descriptor.with_gas_limit(gas_limit);
        }
        components.push(descriptor);
    }

    Ok(DeploymentPlan::new(components))
}
