//! Event sink implementations
//!
//! Concrete `DeployEventSink`s:
//! - `JsonEventSink`: NDJSON output for CI/automation
//! - `ConsoleEventSink`: human-readable progress

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
