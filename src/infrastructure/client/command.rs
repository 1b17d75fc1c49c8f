//! Command environment client
//!
//! Reaches the opaque deployment and directory collaborators by spawning
//! the environment client program declared in configuration. The wire
//! protocol is argv in, JSON on stdout out:
//!
//! - `<client> deploy --environment E --name N --gas G [--arg JSON]...`
//!   prints `{ "address": "...", "abi": ... }` on success
//! - `<client> register --environment E --name N --address A` confirms
//!   with exit status 0
//! - `<client> resolve --environment E --name N` prints
//!   `{ "address": "..." }`, with `null` meaning the name is unregistered
//!
//! Constructor arguments are JSON-encoded individually so strings and
//! numbers survive the argv boundary unambiguously. Each call blocks until
//! the client confirms; no retries happen here.

use std::process::{Command, Output, Stdio};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::{
    DeployRequest, Deployment, DeployerError, DirectoryError, EnvironmentDeployer, NameDirectory,
};
use crate::domain::value_objects::{Address, EnvironmentName, LogicalName};

#[derive(Debug, Clone)]
pub struct CommandEnvironmentClient {
    program: String,
    base_args: Vec<String>,
    environment: EnvironmentName,
}

#[derive(Debug, Deserialize)]
struct DeployResponse {
    address: String,
    #[serde(default)]
    abi: Value,
}

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    #[serde(default)]
    address: Option<String>,
}

impl CommandEnvironmentClient {
    pub fn new(
        program: impl Into<String>,
        base_args: Vec<String>,
        environment: EnvironmentName,
    ) -> Self {
        Self {
            program: program.into(),
            base_args,
            environment,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that the client program is runnable at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .args(&self.base_args)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(&self, subcommand: &str, name: &LogicalName) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args)
            .arg(subcommand)
            .arg("--environment")
            .arg(self.environment.as_str())
            .arg("--name")
            .arg(name.as_str());
        cmd
    }

    fn failure_message(output: &Output) -> String {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            format!("exit code {:?}", output.status.code())
        } else {
            stderr.to_string()
        }
    }
}

impl EnvironmentDeployer for CommandEnvironmentClient {
    fn deploy(&self, request: &DeployRequest) -> Result<Deployment, DeployerError> {
        let mut cmd = self.command("deploy", &request.name);
        cmd.arg("--gas").arg(request.gas_limit.to_string());
        for arg in &request.args {
            let encoded = serde_json::to_string(arg).map_err(|e| DeployerError::Transport {
                message: e.to_string(),
            })?;
            cmd.arg("--arg").arg(encoded);
        }

        let output = cmd.output().map_err(|e| DeployerError::Transport {
            message: format!("failed to run '{}': {}", self.program, e),
        })?;

        if !output.status.success() {
            return Err(DeployerError::Rejected {
                message: Self::failure_message(&output),
            });
        }

        let response: DeployResponse = serde_json::from_slice(&output.stdout).map_err(|e| {
            DeployerError::MalformedResponse {
                message: e.to_string(),
            }
        })?;
        if response.address.is_empty() {
            return Err(DeployerError::MalformedResponse {
                message: "empty address in deploy response".to_string(),
            });
        }

        Ok(Deployment {
            address: Address::new(response.address),
            interface: response.abi,
        })
    }
}

impl NameDirectory for CommandEnvironmentClient {
    fn register(&self, name: &LogicalName, address: &Address) -> Result<(), DirectoryError> {
        let mut cmd = self.command("register", name);
        cmd.arg("--address").arg(address.as_str());

        let output = cmd.output().map_err(|e| DirectoryError::Transport {
            message: format!("failed to run '{}': {}", self.program, e),
        })?;

        if !output.status.success() {
            return Err(DirectoryError::Transport {
                message: Self::failure_message(&output),
            });
        }
        Ok(())
    }

    fn resolve(&self, name: &LogicalName) -> Result<Address, DirectoryError> {
        let output =
            self.command("resolve", name)
                .output()
                .map_err(|e| DirectoryError::Transport {
                    message: format!("failed to run '{}': {}", self.program, e),
                })?;

        if !output.status.success() {
            return Err(DirectoryError::Transport {
                message: Self::failure_message(&output),
            });
        }

        let response: ResolveResponse = serde_json::from_slice(&output.stdout).map_err(|e| {
            DirectoryError::Transport {
                message: format!("malformed resolve response: {}", e),
            }
        })?;

        match response.address {
            Some(address) if !address.is_empty() => Ok(Address::new(address)),
            _ => Err(DirectoryError::Unknown { name: name.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(program: &str, base_args: Vec<String>) -> CommandEnvironmentClient {
        CommandEnvironmentClient::new(
            program,
            base_args,
            EnvironmentName::new("testnet").unwrap(),
        )
    }

    fn request() -> DeployRequest {
        DeployRequest {
            name: LogicalName::new("token").unwrap(),
            args: vec![json!("0xa"), json!(5_260_000)],
            gas_limit: 6_900_000,
        }
    }

    #[test]
    fn missing_program_is_a_transport_failure() {
        let client = client_for("stagehand-test-no-such-program", vec![]);
        let err = client.deploy(&request()).unwrap_err();
        assert!(matches!(err, DeployerError::Transport { .. }));
    }

    #[test]
    fn check_available_is_false_for_missing_program() {
        let client = client_for("stagehand-test-no-such-program", vec![]);
        assert!(!client.check_available());
    }

    #[cfg(unix)]
    #[test]
    fn deploy_parses_address_and_abi_from_stdout() {
        let client = client_for(
            "sh",
            vec![
                "-c".to_string(),
                r#"echo '{"address": "0xfeed", "abi": [{"type": "constructor"}]}'"#.to_string(),
            ],
        );
        let deployment = client.deploy(&request()).unwrap();
        assert_eq!(deployment.address.as_str(), "0xfeed");
        assert_eq!(deployment.interface, json!([{"type": "constructor"}]));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_a_rejection_with_stderr() {
        let client = client_for(
            "sh",
            vec!["-c".to_string(), "echo 'out of gas' >&2; exit 1".to_string()],
        );
        let err = client.deploy(&request()).unwrap_err();
        match err {
            DeployerError::Rejected { message } => assert_eq!(message, "out of gas"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn garbage_stdout_is_a_malformed_response() {
        let client = client_for("sh", vec!["-c".to_string(), "echo not-json".to_string()]);
        let err = client.deploy(&request()).unwrap_err();
        assert!(matches!(err, DeployerError::MalformedResponse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_null_address_means_unregistered() {
        let client = client_for(
            "sh",
            vec!["-c".to_string(), r#"echo '{"address": null}'"#.to_string()],
        );
        let err = client.resolve(&LogicalName::new("token").unwrap()).unwrap_err();
        assert!(matches!(err, DirectoryError::Unknown { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn register_confirms_on_exit_zero() {
        let client = client_for("true", vec![]);
        let name = LogicalName::new("token").unwrap();
        assert!(client.register(&name, &Address::new("0xfeed")).is_ok());
    }
}
