//! Test environment builder for isolated stagehand testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{FAKE_CLIENT_SH, PLAN_ABC};

/// Result of running a stagehand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with generated config and plan.
pub struct TestEnv {
    pub project_root: TempDir,
    /// Isolated HOME / config dir so user-level config never leaks in
    home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run stagehand from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stagehand"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env("STAGEHAND_NO_COLOR", "1")
            .env_remove("STAGEHAND_CONFIG");

        let output = cmd.output().expect("Failed to execute stagehand");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// One line per fake-client call, in call order
    pub fn calls(&self) -> Vec<String> {
        let path = self.project_path("calls.log");
        if !path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Parsed manifest artifact for an environment, if one was written
    pub fn manifest(&self, environment: &str) -> Option<serde_json::Value> {
        let path = self.project_path(&format!("data/{environment}.json"));
        let content = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Make the fake client reject deployment of one component
    pub fn fail_deploy_of(&self, name: &str) {
        std::fs::write(self.project_path(&format!("fail_deploy_{name}")), "").unwrap();
    }

    /// Replace the plan file content
    pub fn write_plan(&self, content: &str) {
        std::fs::write(self.project_path("components.toml"), content).unwrap();
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    plan: String,
    base_gas_limit: u64,
    settle_ms: u64,
    fake_client: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            plan: PLAN_ABC.to_string(),
            base_gas_limit: 6_900_000,
            settle_ms: 0,
            fake_client: cfg!(unix),
        }
    }

    pub fn with_plan(mut self, plan: &str) -> Self {
        self.plan = plan.to_string();
        self
    }

    pub fn with_base_gas_limit(mut self, base_gas_limit: u64) -> Self {
        self.base_gas_limit = base_gas_limit;
        self
    }

    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Leave the client un-runnable (for tests that never deploy)
    pub fn without_fake_client(mut self) -> Self {
        self.fake_client = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        let client = if self.fake_client {
            let script = project_root.path().join("fake-env.sh");
            std::fs::write(&script, FAKE_CLIENT_SH).expect("Failed to write fake client");
            make_executable(&script);
            script.display().to_string()
        } else {
            "stagehand-test-client-unused".to_string()
        };

        let config = format!(
            r#"[environments.testnet]
client = '{client}'
base_gas_limit = {base_gas_limit}
settle_ms = {settle_ms}
"#,
            base_gas_limit = self.base_gas_limit,
            settle_ms = self.settle_ms,
        );
        std::fs::write(project_root.path().join("stagehand.toml"), config)
            .expect("Failed to write config");
        std::fs::write(project_root.path().join("components.toml"), &self.plan)
            .expect("Failed to write plan");

        TestEnv {
            project_root,
            home_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = std::fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
