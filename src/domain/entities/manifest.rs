//! Manifest entity
//!
//! The durable record external tooling consults to locate deployed
//! components. One manifest per target environment; entries are created
//! exactly once per run by the sequencer and never mutated afterwards.

use serde_json::Value;

use crate::domain::value_objects::{Address, LogicalName};

/// Record of one successfully deployed and registered component
#[derive(Debug, Clone, PartialEq)]
pub struct DeployedComponent {
    name: LogicalName,
    address: Address,
    interface: Value,
}

impl DeployedComponent {
    pub fn new(name: LogicalName, address: Address, interface: Value) -> Self {
        Self {
            name,
            address,
            interface,
        }
    }

    pub fn name(&self) -> &LogicalName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn interface(&self) -> &Value {
        &self.interface
    }
}

/// Ordered collection of deployed components for one environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    components: Vec<DeployedComponent>,
}

impl Manifest {
    pub fn from_components(components: Vec<DeployedComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[DeployedComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, name: &LogicalName) -> Option<&DeployedComponent> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Flat artifact projection: `<name>_address` and `<name>_abi` per
    /// component. The shape is stable across runs so consumers can parse it
    /// without versioning logic.
    pub fn to_flat_json(&self) -> serde_json::Map<String, Value> {
        let mut object = serde_json::Map::new();
        for component in &self.components {
            object.insert(
                format!("{}_address", component.name()),
                Value::String(component.address().as_str().to_string()),
            );
            object.insert(
                format!("{}_abi", component.name()),
                component.interface().clone(),
            );
        }
        object
    }
}
