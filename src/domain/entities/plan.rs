//! Deployment plan entity
//!
//! The descriptor set is data, not control flow: an explicit ordered list
//! of components with declared dependency names. The declared order IS the
//! deployment order; `validate` checks it instead of computing a
//! topological sort, which keeps "what order do things deploy in" a
//! reviewable property of the plan file.

use thiserror::Error;

use crate::domain::value_objects::LogicalName;

/// One constructor argument of a component
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorArg {
    /// Passed through to the environment client verbatim
    Literal(serde_json::Value),
    /// Replaced with the named component's directory address at construction time
    Reference(LogicalName),
}

/// Static declaration of one deployable component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    pub name: LogicalName,
    pub args: Vec<ConstructorArg>,
    pub depends_on: Vec<LogicalName>,
    /// Per-component base gas limit; falls back to the environment's limit
    pub gas_limit: Option<u64>,
}

impl ComponentDescriptor {
    pub fn new(name: LogicalName) -> Self {
        Self {
            name,
            args: Vec::new(),
            depends_on: Vec::new(),
            gas_limit: None,
        }
    }

    pub fn with_args(mut self, args: Vec<ConstructorArg>) -> Self {
        self.args = args;
        self
    }

    pub fn with_depends_on(mut self, depends_on: Vec<LogicalName>) -> Self {
        self.depends_on = depends_on;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// Ordered set of component descriptors for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentPlan {
    components: Vec<ComponentDescriptor>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("component '{name}' is declared more than once")]
    DuplicateName { name: LogicalName },

    #[error("component '{component}' depends on '{dependency}', which is not deployed before it")]
    UnknownDependency {
        component: LogicalName,
        dependency: LogicalName,
    },

    #[error("component '{component}' references '{reference}' in its constructor arguments without declaring it in depends_on")]
    UnresolvedReference {
        component: LogicalName,
        reference: LogicalName,
    },
}

impl DeploymentPlan {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Check the order-validity invariant.
    ///
    /// Every `depends_on` entry must name a component that appears earlier
    /// in the plan (forward and circular references are both caught by this
    /// single rule, since the order is declared rather than derived), and
    /// every constructor reference must be a declared dependency.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut seen: Vec<&LogicalName> = Vec::with_capacity(self.components.len());

        for descriptor in &self.components {
            if seen.contains(&&descriptor.name) {
                return Err(PlanError::DuplicateName {
                    name: descriptor.name.clone(),
                });
            }

            for dependency in &descriptor.depends_on {
                if !seen.contains(&dependency) {
                    return Err(PlanError::UnknownDependency {
                        component: descriptor.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }

            for arg in &descriptor.args {
                if let ConstructorArg::Reference(reference) = arg {
                    if !descriptor.depends_on.contains(reference) {
                        return Err(PlanError::UnresolvedReference {
                            component: descriptor.name.clone(),
                            reference: reference.clone(),
                        });
                    }
                }
            }

            seen.push(&descriptor.name);
        }

        Ok(())
    }
}
