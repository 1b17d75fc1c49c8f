//! JSON manifest store
//!
//! Persists one `<environment>.json` per target environment under the
//! configured data directory. The artifact is the flat
//! `<name>_address` / `<name>_abi` object external tooling parses; a
//! re-run fully replaces it. Writes are guarded by an advisory lock so
//! concurrent runs against different environments cannot interleave a
//! partially written file.

use std::fs;
use std::path::PathBuf;

use fs2::FileExt;
use serde_json::Value;

use crate::domain::entities::Manifest;
use crate::domain::ports::{ManifestStore, ManifestStoreError};
use crate::domain::value_objects::EnvironmentName;

pub struct JsonManifestStore {
    data_dir: PathBuf,
}

impl JsonManifestStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Artifact location for an environment
    pub fn path_for(&self, environment: &EnvironmentName) -> PathBuf {
        self.data_dir.join(environment.manifest_file_name())
    }

    fn lock_path(&self, environment: &EnvironmentName) -> PathBuf {
        self.data_dir
            .join(format!("{}.lock", environment.as_str()))
    }
}

impl ManifestStore for JsonManifestStore {
    fn write(
        &self,
        environment: &EnvironmentName,
        manifest: &Manifest,
    ) -> Result<PathBuf, ManifestStoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let lock_file = fs::File::create(self.lock_path(environment))?;
        lock_file.lock_exclusive()?;

        let content = serde_json::to_string_pretty(&Value::Object(manifest.to_flat_json()))?;
        let path = self.path_for(environment);
        let result = fs::write(&path, content);

        let _ = lock_file.unlock();
        result?;

        Ok(path)
    }
}
