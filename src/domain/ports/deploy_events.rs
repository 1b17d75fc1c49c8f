//! Deploy event port
//!
//! Observable interface for deployment runs. The sequencer notifies the
//! sink after each successful step; sinks render progress, stream NDJSON
//! for CI, or stay silent. Events are outside the control-flow contract -
//! failures travel through error returns, not through the sink - so tests
//! can assert on state transitions without capturing text output.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::{Address, EnvironmentName, LogicalName};

/// Event emitted during a deployment run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Run started after plan validation
    Started {
        environment: EnvironmentName,
        component_count: usize,
    },

    /// A component was deployed (not yet registered)
    ComponentDeployed {
        index: usize,
        name: LogicalName,
        address: Address,
        gas_limit: u64,
    },

    /// A deployed component was registered in the directory
    ComponentRegistered {
        index: usize,
        name: LogicalName,
        address: Address,
    },

    /// Waiting for the environment to stabilize before finalizing
    Settling { duration: Duration },

    /// Manifest artifact written
    ManifestWritten {
        path: PathBuf,
        component_count: usize,
    },

    /// Run completed successfully
    Completed { component_count: usize },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink: Send + Sync {
    fn on_event(&self, event: DeployEvent);

    /// Whether this sink wants per-component events or only run summaries
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
