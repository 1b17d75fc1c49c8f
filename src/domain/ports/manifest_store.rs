//! ManifestStore port
//!
//! Persists the manifest for a target environment, fully replacing any
//! prior artifact of the same name. Written only after every component has
//! deployed and registered; a failed write leaves the external state valid
//! but produces no local record.

use std::path::PathBuf;

use crate::domain::entities::Manifest;
use crate::domain::value_objects::EnvironmentName;

pub trait ManifestStore {
    /// Write the manifest and return the path of the artifact produced.
    fn write(
        &self,
        environment: &EnvironmentName,
        manifest: &Manifest,
    ) -> Result<PathBuf, ManifestStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestStoreError {
    #[error("failed to write manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}
