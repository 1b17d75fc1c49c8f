//! Address value object - opaque handle to a deployed component
//!
//! The orchestrator never interprets addresses; it only threads them from
//! deploy responses into directory registrations, later constructor
//! arguments, and the manifest.

use serde::{Deserialize, Serialize};

/// Opaque runtime address of a deployed component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
