//! Deploy outcome and error types
//!
//! A run either completes for every component or aborts at the first
//! failing step; there is no partial-success continuation, so the outcome
//! type carries no error lists.

use std::path::PathBuf;

use crate::domain::entities::{Manifest, PlanError};
use crate::domain::ports::{DeployerError, DirectoryError, ManifestStoreError};
use crate::domain::value_objects::LogicalName;

/// Result of a fully successful deployment run
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// One entry per descriptor, in deployment order
    pub manifest: Manifest,
    /// Where the manifest artifact was written
    pub manifest_path: PathBuf,
}

impl DeployOutcome {
    pub fn component_count(&self) -> usize {
        self.manifest.len()
    }
}

/// Why a deployment run aborted
///
/// Every variant names the failing step where one exists; none are
/// retried or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum DeployRunError {
    /// The descriptor set violates the order-validity invariant
    #[error("invalid deployment plan: {0}")]
    InvalidPlan(#[from] PlanError),

    /// A declared dependency could not be resolved through the directory.
    /// Nothing was deployed for the offending descriptor.
    #[error("cannot resolve dependency '{dependency}' of '{component}': {source}")]
    UnknownDependency {
        component: LogicalName,
        dependency: LogicalName,
        source: DirectoryError,
    },

    /// The environment could not bring the component live
    #[error("deployment of '{component}' failed: {source}")]
    DeploymentFailed {
        component: LogicalName,
        source: DeployerError,
    },

    /// Deployment confirmed but directory registration did not. The
    /// component remains deployed-but-unregistered on the environment;
    /// operator intervention is required.
    #[error("registration of '{component}' failed: {source}")]
    RegistrationFailed {
        component: LogicalName,
        source: DirectoryError,
    },

    /// All components deployed and registered, but no manifest was
    /// produced. External state remains valid.
    #[error("manifest write failed: {0}")]
    ManifestWrite(#[from] ManifestStoreError),
}

impl DeployRunError {
    /// Logical name of the failing component, where the failure is tied to one
    pub fn component(&self) -> Option<&LogicalName> {
        match self {
            Self::UnknownDependency { component, .. }
            | Self::DeploymentFailed { component, .. }
            | Self::RegistrationFailed { component, .. } => Some(component),
            Self::InvalidPlan(_) | Self::ManifestWrite(_) => None,
        }
    }
}
