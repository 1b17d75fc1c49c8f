//! Application layer
//!
//! Use cases that orchestrate the domain. This layer depends on domain
//! entities and ports, contains no I/O of its own, and is wired to
//! concrete adapters by the command layer.
//!
//! - `DeployUseCase` - the deployment sequencer (validate, deploy,
//!   register, settle, write manifest)

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployRunError, DeployUseCase};
