//! Stagehand - dependency-aware deployment orchestrator
//!
//! Stagehand deploys a set of mutually dependent components onto a named
//! target environment, wires them together through the environment's
//! central name directory, and records the resulting addresses and
//! interfaces in a per-environment JSON manifest for downstream tooling.

pub mod application;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployRunError, DeployUseCase};
pub use config::{Config, ConfigError, EnvironmentConfig};
pub use domain::entities::{
    ComponentDescriptor, ConstructorArg, DeployedComponent, DeploymentPlan, Manifest, PlanError,
};
pub use domain::ports::{DeployEvent, DeployEventSink, NoopEventSink};
pub use domain::value_objects::{
    effective_limit, Address, EnvironmentName, GasError, GasMultiplier, LogicalName,
};
pub use infrastructure::{
    load_plan, CommandEnvironmentClient, ConsoleEventSink, JsonEventSink, JsonManifestStore,
};
