//! Logical name value object - stable identifier for a deployable component
//!
//! Logical names are the lookup keys of the directory and the key stems of
//! the manifest (`<name>_address`, `<name>_abi`), so they are restricted to
//! characters that survive both roles unescaped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable string identifier for a component, independent of its runtime address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalName(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicalNameError {
    #[error("logical name must not be empty")]
    Empty,

    #[error("logical name '{name}' contains invalid character '{found}' - use letters, digits, '_' or '-'")]
    InvalidCharacter { name: String, found: char },
}

impl LogicalName {
    pub fn new(name: impl Into<String>) -> Result<Self, LogicalNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LogicalNameError::Empty);
        }
        if let Some(found) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(LogicalNameError::InvalidCharacter { name, found });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogicalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LogicalName {
    type Error = LogicalNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogicalName> for String {
    fn from(name: LogicalName) -> Self {
        name.0
    }
}
