//! Shared testing utilities for svcgen CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Redis bound to a single instance named `my-redis-db`.
pub const REDIS_CONFIG: &str = r#"{
  "name": "acme",
  "backendPlatform": "SWIFT",
  "redis": { "uri": "redis://h:1234", "serviceInfo": { "name": "my-redis-db", "label": "compose-for-redis", "plan": "Standard" } }
}"#;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `svcgen` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("svcgen").expect("Failed to locate svcgen binary");
        cmd.current_dir(&self.work_dir).env_remove("SVCGEN_LOG");
        cmd
    }

    /// Write a service configuration next to (not inside) the project and return its path.
    pub fn write_service_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("services.json");
        fs::write(&path, content).expect("Failed to write service configuration");
        path
    }

    /// Write a project file, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    /// Read a project file as a string.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Read a project file as JSON.
    pub fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read_file(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
