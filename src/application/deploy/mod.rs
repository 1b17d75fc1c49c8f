//! Deploy module
//!
//! Orchestrates the deployment flow for one target environment.
//!
//! ## Structure
//!
//! - `options` - run configuration (`DeployOptions`)
//! - `result` - outcome and error types (`DeployOutcome`, `DeployRunError`)
//! - `use_case` - the sequencer (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stagehand::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(deployer, directory, manifest_store);
//! let outcome = use_case.execute(&plan, &DeployOptions::new(environment))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployOutcome, DeployRunError};
pub use use_case::DeployUseCase;
