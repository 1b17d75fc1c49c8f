//! JSON event sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption. Each
//! line carries an `event` discriminator and an RFC 3339 timestamp.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert(
                "ts".to_string(),
                serde_json::Value::String(Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                environment,
                component_count,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "environment": environment.as_str(),
                "component_count": component_count,
            }),

            DeployEvent::ComponentDeployed {
                index,
                name,
                address,
                gas_limit,
            } => serde_json::json!({
                "event": "component_deployed",
                "command": "deploy",
                "index": index,
                "name": name.as_str(),
                "address": address.as_str(),
                "gas_limit": gas_limit,
            }),

            DeployEvent::ComponentRegistered {
                index,
                name,
                address,
            } => serde_json::json!({
                "event": "component_registered",
                "command": "deploy",
                "index": index,
                "name": name.as_str(),
                "address": address.as_str(),
            }),

            DeployEvent::Settling { duration } => serde_json::json!({
                "event": "settling",
                "command": "deploy",
                "duration_ms": duration.as_millis() as u64,
            }),

            DeployEvent::ManifestWritten {
                path,
                component_count,
            } => serde_json::json!({
                "event": "manifest_written",
                "command": "deploy",
                "path": path.display().to_string(),
                "component_count": component_count,
            }),

            DeployEvent::Completed { component_count } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": "success",
                "component_count": component_count,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
