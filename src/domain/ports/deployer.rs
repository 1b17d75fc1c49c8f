//! EnvironmentDeployer port
//!
//! The external collaborator that brings a component live on the target
//! environment. The orchestrator does not know how deployment executes,
//! only that each call either confirms an address plus interface
//! descriptor or fails. Calls block until the environment confirms;
//! failures are surfaced, never retried here.

use serde_json::Value;

use crate::domain::value_objects::{Address, LogicalName};

/// One deployment call: constructor arguments with references already
/// resolved to addresses, plus the effective resource ceiling for the step.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployRequest {
    pub name: LogicalName,
    pub args: Vec<Value>,
    pub gas_limit: u64,
}

/// Confirmed outcome of a deployment call
#[derive(Debug, Clone, PartialEq)]
pub struct Deployment {
    pub address: Address,
    pub interface: Value,
}

pub trait EnvironmentDeployer {
    fn deploy(&self, request: &DeployRequest) -> Result<Deployment, DeployerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeployerError {
    #[error("environment rejected the deployment: {message}")]
    Rejected { message: String },

    #[error("failed to reach the environment: {message}")]
    Transport { message: String },

    #[error("malformed response from environment client: {message}")]
    MalformedResponse { message: String },
}
