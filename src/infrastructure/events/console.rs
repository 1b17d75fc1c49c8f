//! Console event sink
//!
//! Human-readable progress lines, one per deployment step, in the spirit
//! of the classic migration-script log ("Contract X with address Y
//! registered"). Color is applied only when stdout is a terminal and
//! `STAGEHAND_NO_COLOR` is unset.

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::domain::ports::{DeployEvent, DeployEventSink};

pub struct ConsoleEventSink {
    color: bool,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        let color = std::io::stdout().is_terminal()
            && std::env::var_os("STAGEHAND_NO_COLOR").is_none();
        Self { color }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn check(&self) -> String {
        if self.color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                environment,
                component_count,
            } => {
                println!("Deploying {component_count} components to '{environment}'");
            }
            DeployEvent::ComponentDeployed {
                name,
                address,
                gas_limit,
                ..
            } => {
                println!("  {} deployed {name} at {address} (gas ceiling {gas_limit})", self.check());
            }
            DeployEvent::ComponentRegistered { name, address, .. } => {
                println!("  {} registered {name} -> {address}", self.check());
            }
            DeployEvent::Settling { duration } => {
                println!("  waiting {} ms for the environment to settle", duration.as_millis());
            }
            DeployEvent::ManifestWritten {
                path,
                component_count,
            } => {
                println!(
                    "{} manifest with {component_count} entries written to {}",
                    self.check(),
                    path.display()
                );
            }
            DeployEvent::Completed { component_count } => {
                println!("{} deployed {component_count} components", self.check());
            }
        }
    }
}
