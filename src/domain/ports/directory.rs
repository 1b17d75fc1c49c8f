//! NameDirectory port
//!
//! Thin adapter to the central directory component on the target
//! environment: the name -> address mapping that wires components
//! together. `register` must only be called after a deployment has
//! confirmed; re-registration of an existing name is last-write-wins
//! (the directory's own contract).

use crate::domain::value_objects::{Address, LogicalName};

pub trait NameDirectory {
    fn register(&self, name: &LogicalName, address: &Address) -> Result<(), DirectoryError>;
    fn resolve(&self, name: &LogicalName) -> Result<Address, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("no component registered under '{name}'")]
    Unknown { name: LogicalName },

    #[error("directory call failed: {message}")]
    Transport { message: String },
}
