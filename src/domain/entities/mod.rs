//! Domain entities
//!
//! - `DeploymentPlan` / `ComponentDescriptor` - the ordered descriptor set
//! - `Manifest` / `DeployedComponent` - the durable deployment record

mod manifest;
mod plan;

pub use manifest::{DeployedComponent, Manifest};
pub use plan::{ComponentDescriptor, ConstructorArg, DeploymentPlan, PlanError};
