//! Common test utilities for hop integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// An isolated machine: a temp home with its own config directory
#[allow(dead_code)]
pub struct TestMachine {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Stands in for `$HOME`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestMachine {
    /// Create a new machine with an empty home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self { temp, home }
    }

    /// `$XDG_CONFIG_HOME/hop` for this machine
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config").join("hop")
    }

    /// Path of the default descriptor
    pub fn default_config(&self) -> PathBuf {
        self.config_dir().join("hop.json")
    }

    /// Write `doc` to the default descriptor location
    pub fn install_config(&self, doc: &Value) -> PathBuf {
        let path = self.default_config();
        self.write_json(&path, doc);
        path
    }

    /// Write a JSON value, creating parents
    pub fn write_json(&self, path: &Path, value: &Value) {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
        self.write_file(path, &content);
    }

    /// Write raw content, creating parents
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory under home
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.home.join(rel);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a git repository under home
    pub fn create_repo(&self, rel: &str) -> PathBuf {
        let path = self.create_dir(rel);
        git2::Repository::init(&path).expect("Failed to init git repository");
        path
    }

    /// `hop` with HOME, XDG_CONFIG_HOME and the working directory pointed
    /// into this machine, and no inherited override
    #[allow(deprecated)]
    pub fn hop(&self) -> Command {
        let mut cmd = Command::cargo_bin("hop").expect("hop binary");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("HOP_CONFIG")
            .env_remove("HOP_LOG")
            .current_dir(&self.home);
        cmd
    }
}

impl Default for TestMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// A descriptor exercising every section
#[allow(dead_code)]
pub fn sample_document() -> Value {
    json!({
        "schema_version": "1.0",
        "machine": {
            "id": "devbox",
            "name": "Dev Box",
            "type": "workstation",
            "agent_root": "~/dev"
        },
        "projects": [
            {"name": "api", "path": "~/dev/api", "type": "service", "system": "payments"},
            {"name": "web", "path": "~/dev/web", "type": "app", "system": "storefront"},
            {"name": "tools", "path": "~/dev/tools", "type": "library"}
        ],
        "bundles": [
            {"id": "checkout", "projects": ["api", "web", "ghost"]}
        ],
        "infra_repos": {
            "path": "~/infra",
            "sync": "pull",
            "repos": [
                "terraform-modules",
                {"name": "payments-sdk", "system": "payments"}
            ]
        },
        "accounts": {
            "github": [
                {"username": "ada", "email": "ada@example.com", "default": true}
            ]
        }
    })
}

/// Create the directories `sample_document` declares, so the audit is clean
#[allow(dead_code)]
pub fn materialize_sample(machine: &TestMachine) {
    machine.create_repo("dev/api");
    machine.create_repo("dev/web");
    machine.create_repo("dev/tools");
    machine.create_repo("infra/terraform-modules");
    machine.create_repo("infra/payments-sdk");
}
