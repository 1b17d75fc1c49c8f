//! Value objects - small validated types shared across the domain

mod address;
mod environment;
mod gas;
mod logical_name;

pub use address::Address;
pub use environment::{EnvironmentName, EnvironmentNameError};
pub use gas::{effective_limit, GasError, GasMultiplier, DEFAULT_BASE_GAS_LIMIT};
pub use logical_name::{LogicalName, LogicalNameError};
