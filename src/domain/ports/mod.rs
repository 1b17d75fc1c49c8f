//! Domain ports
//!
//! These traits define the boundaries of the domain layer. The
//! infrastructure layer provides the concrete implementations; tests
//! substitute in-memory fakes.

pub mod deploy_events;
pub mod deployer;
pub mod directory;
pub mod manifest_store;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deployer::{DeployRequest, Deployment, DeployerError, EnvironmentDeployer};
pub use directory::{DirectoryError, NameDirectory};
pub use manifest_store::{ManifestStore, ManifestStoreError};
