//! Deploy options
//!
//! Configuration for one deployment run.

use std::time::Duration;

use crate::domain::value_objects::{
    EnvironmentName, GasMultiplier, DEFAULT_BASE_GAS_LIMIT,
};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Target environment; keys the manifest artifact
    pub environment: EnvironmentName,
    /// Per-step gas ceiling for components without their own `gas_limit`
    pub base_gas_limit: u64,
    /// Operator-supplied scale factor (defaults to identity)
    pub multiplier: GasMultiplier,
    /// Pause between the last registration and the manifest write
    pub settle: Duration,
}

impl DeployOptions {
    pub fn new(environment: EnvironmentName) -> Self {
        Self {
            environment,
            base_gas_limit: DEFAULT_BASE_GAS_LIMIT,
            multiplier: GasMultiplier::default(),
            settle: Duration::ZERO,
        }
    }

    pub fn with_base_gas_limit(mut self, base_gas_limit: u64) -> Self {
        self.base_gas_limit = base_gas_limit;
        self
    }

    pub fn with_multiplier(mut self, multiplier: GasMultiplier) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}
