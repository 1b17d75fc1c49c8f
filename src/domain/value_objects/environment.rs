//! Environment name value object
//!
//! Manifests are partitioned by environment name, which doubles as the
//! manifest file stem (`data/<environment>.json`), so the same character
//! restrictions as logical names apply.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the target environment a run deploys into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnvironmentName(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentNameError {
    #[error("environment name must not be empty")]
    Empty,

    #[error("environment name '{name}' contains invalid character '{found}' - use letters, digits, '_' or '-'")]
    InvalidCharacter { name: String, found: char },
}

impl EnvironmentName {
    pub fn new(name: impl Into<String>) -> Result<Self, EnvironmentNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EnvironmentNameError::Empty);
        }
        if let Some(found) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(EnvironmentNameError::InvalidCharacter { name, found });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this environment's manifest artifact
    pub fn manifest_file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl std::fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EnvironmentName {
    type Error = EnvironmentNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnvironmentName> for String {
    fn from(name: EnvironmentName) -> Self {
        name.0
    }
}
