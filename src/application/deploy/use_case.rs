//! Deploy use case
//!
//! The deployment sequencer:
//! 1. Validate the plan's declared order (reject unresolvable references
//!    before any external call)
//! 2. For each descriptor in order: resolve dependencies through the
//!    directory, deploy with the step's effective gas limit, register
//! 3. Settle pause, then write the manifest
//!
//! Steps run strictly one after another - later constructors need the
//! finalized addresses of earlier steps - and the run aborts on the first
//! failure. The use case is parameterized by its ports so tests can run it
//! against in-memory fakes.

use serde_json::Value;

use crate::domain::entities::{
    ComponentDescriptor, ConstructorArg, DeployedComponent, DeploymentPlan, Manifest,
};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, DeployRequest, EnvironmentDeployer, ManifestStore,
    NameDirectory, NoopEventSink,
};
use crate::domain::value_objects::effective_limit;

use super::options::DeployOptions;
use super::result::{DeployOutcome, DeployRunError};

/// Deployment sequencer, generic over its external collaborators
pub struct DeployUseCase<D, N, M>
where
    D: EnvironmentDeployer,
    N: NameDirectory,
    M: ManifestStore,
{
    deployer: D,
    directory: N,
    manifest_store: M,
}

impl<D, N, M> DeployUseCase<D, N, M>
where
    D: EnvironmentDeployer,
    N: NameDirectory,
    M: ManifestStore,
{
    pub fn new(deployer: D, directory: N, manifest_store: M) -> Self {
        Self {
            deployer,
            directory,
            manifest_store,
        }
    }

    /// Execute a silent run
    pub fn execute(
        &self,
        plan: &DeploymentPlan,
        options: &DeployOptions,
    ) -> Result<DeployOutcome, DeployRunError> {
        self.execute_with_events(plan, options, &NoopEventSink)
    }

    /// Execute a run, notifying the sink after each successful step
    pub fn execute_with_events(
        &self,
        plan: &DeploymentPlan,
        options: &DeployOptions,
        event_sink: &dyn DeployEventSink,
    ) -> Result<DeployOutcome, DeployRunError> {
        plan.validate()?;

        event_sink.on_event(DeployEvent::Started {
            environment: options.environment.clone(),
            component_count: plan.len(),
        });

        let mut deployed: Vec<DeployedComponent> = Vec::with_capacity(plan.len());

        for (index, descriptor) in plan.components().iter().enumerate() {
            let args = self.resolve_args(descriptor)?;
            let gas_limit = effective_limit(
                descriptor.gas_limit.unwrap_or(options.base_gas_limit),
                options.multiplier,
            );

            let request = DeployRequest {
                name: descriptor.name.clone(),
                args,
                gas_limit,
            };
            let deployment =
                self.deployer
                    .deploy(&request)
                    .map_err(|source| DeployRunError::DeploymentFailed {
                        component: descriptor.name.clone(),
                        source,
                    })?;

            event_sink.on_event(DeployEvent::ComponentDeployed {
                index,
                name: descriptor.name.clone(),
                address: deployment.address.clone(),
                gas_limit,
            });

            self.directory
                .register(&descriptor.name, &deployment.address)
                .map_err(|source| DeployRunError::RegistrationFailed {
                    component: descriptor.name.clone(),
                    source,
                })?;

            event_sink.on_event(DeployEvent::ComponentRegistered {
                index,
                name: descriptor.name.clone(),
                address: deployment.address.clone(),
            });

            deployed.push(DeployedComponent::new(
                descriptor.name.clone(),
                deployment.address,
                deployment.interface,
            ));
        }

        if !options.settle.is_zero() {
            event_sink.on_event(DeployEvent::Settling {
                duration: options.settle,
            });
            std::thread::sleep(options.settle);
        }

        let manifest = Manifest::from_components(deployed);
        let manifest_path = self
            .manifest_store
            .write(&options.environment, &manifest)?;

        event_sink.on_event(DeployEvent::ManifestWritten {
            path: manifest_path.clone(),
            component_count: manifest.len(),
        });
        event_sink.on_event(DeployEvent::Completed {
            component_count: manifest.len(),
        });

        Ok(DeployOutcome {
            manifest,
            manifest_path,
        })
    }

    /// Resolve one descriptor's constructor arguments.
    ///
    /// References are looked up through the directory at construction time,
    /// never from a cache, so each step sees the address as the environment
    /// currently knows it.
    fn resolve_args(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> Result<Vec<Value>, DeployRunError> {
        descriptor
            .args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::Literal(value) => Ok(value.clone()),
                ConstructorArg::Reference(dependency) => self
                    .directory
                    .resolve(dependency)
                    .map(|address| Value::String(address.as_str().to_string()))
                    .map_err(|source| DeployRunError::UnknownDependency {
                        component: descriptor.name.clone(),
                        dependency: dependency.clone(),
                        source,
                    }),
            })
            .collect()
    }
}
