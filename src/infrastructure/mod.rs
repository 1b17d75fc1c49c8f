//! Infrastructure layer
//!
//! Concrete implementations of the domain ports; all I/O lives here.
//!
//! - `client/` - subprocess-based environment client (deployer + directory)
//! - `manifest/` - JSON manifest store
//! - `plan/` - TOML plan loader
//! - `events/` - console and NDJSON event sinks

pub mod client;
pub mod events;
pub mod manifest;
pub mod plan;

pub use client::CommandEnvironmentClient;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use manifest::JsonManifestStore;
pub use plan::{load_plan, PlanLoadError};
