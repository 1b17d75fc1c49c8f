//! Environment client adapters
//!
//! `CommandEnvironmentClient` implements both the deployer and directory
//! ports over a single external program, mirroring how the central
//! directory lives on the same environment as the components it names.

mod command;

pub use command::CommandEnvironmentClient;
