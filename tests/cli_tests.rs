//! CLI integration tests using the real hop binary

mod common;

use common::{TestMachine, materialize_sample, sample_document};
use predicates::prelude::*;
use serde_json::{Value, json};

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_help_output() {
    let machine = TestMachine::new();
    machine
        .hop()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine environment descriptor"))
        .stdout(predicate::str::contains("where"))
        .stdout(predicate::str::contains("audit"));
}

#[test]
fn test_version_output() {
    let machine = TestMachine::new();
    machine
        .hop()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hop "))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_where_prints_default_path() {
    let machine = TestMachine::new();
    let path = machine.install_config(&sample_document());

    machine
        .hop()
        .arg("where")
        .assert()
        .success()
        .stdout(predicate::str::contains(path.to_string_lossy().to_string()));
}

#[test]
fn test_where_verbose_names_source() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .args(["where", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default path"));
}

#[test]
fn test_where_honors_env_override() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());
    let other = machine.home.join("elsewhere").join("hop.json");
    machine.write_json(&other, &sample_document());

    machine
        .hop()
        .env("HOP_CONFIG", &other)
        .args(["where", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere"))
        .stdout(predicate::str::contains("HOP_CONFIG"));
}

#[test]
fn test_settings_pin_beats_env_override() {
    let machine = TestMachine::new();
    let pinned = machine.home.join("pinned").join("hop.json");
    machine.write_json(&pinned, &sample_document());
    machine.write_json(
        &machine.config_dir().join("settings.json"),
        &json!({"hop_config": pinned}),
    );
    let other = machine.home.join("elsewhere").join("hop.json");
    machine.write_json(&other, &sample_document());

    machine
        .hop()
        .env("HOP_CONFIG", &other)
        .arg("where")
        .assert()
        .success()
        .stdout(predicate::str::contains("pinned"));
}

#[test]
fn test_not_located_exits_2() {
    let machine = TestMachine::new();
    machine
        .hop()
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No hop.json found"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_show_summary() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dev Box"))
        .stdout(predicate::str::contains("devbox"))
        .stdout(predicate::str::contains("projects: 3"));
}

#[test]
fn test_show_json() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    let output = machine
        .hop()
        .args(["show", "--format", "json"])
        .output()
        .expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["machine"]["id"], "devbox");
    assert_eq!(value["systems"], json!(["payments", "storefront"]));
}

#[test]
fn test_projects_filtered_by_type() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .args(["projects", "--type", "service"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("web").not());
}

#[test]
fn test_project_resolves_path_and_branch() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());
    let repo = machine.create_repo("dev/api");

    let output = machine
        .hop()
        .args(["project", "api", "-f", "json"])
        .output()
        .expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["name"], "api");
    assert_eq!(value["exists"], true);
    assert_eq!(
        value["resolved_path"].as_str().map(std::path::PathBuf::from),
        Some(repo)
    );
}

#[test]
fn test_project_miss_lists_available() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .args(["project", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project 'ghost' not found"))
        .stderr(predicate::str::contains("Available: api, web, tools"));
}

#[test]
fn test_system_groups_projects_and_infra() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    let output = machine
        .hop()
        .args(["system", "payments", "--format", "json"])
        .output()
        .expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["name"], "payments");
    assert_eq!(value["projects"][0]["name"], "api");
    assert_eq!(value["infra_repos"][0]["name"], "payments-sdk");
}

#[test]
fn test_systems_empty_when_untagged() {
    let machine = TestMachine::new();
    machine.install_config(&json!({
        "schema_version": "1.0",
        "machine": {"id": "m", "name": "M"},
        "projects": [{"name": "solo"}]
    }));

    machine
        .hop()
        .arg("systems")
        .assert()
        .success()
        .stdout(predicate::str::contains("No systems"));
}

#[test]
fn test_bundle_keeps_missing_member() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    let output = machine
        .hop()
        .args(["bundle", "checkout", "--format", "json"])
        .output()
        .expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["primary"], "api");
    let members = value["members"].as_array().expect("members array");
    assert_eq!(members.len(), 3);
    assert_eq!(members[2]["name"], "ghost");
    assert_eq!(members[2]["missing"], true);
}

#[test]
fn test_infra_yaml_lists_clone_paths() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .args(["infra", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("terraform-modules"))
        .stdout(predicate::str::contains("clone_path"));
}

#[test]
fn test_account_lookup() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .args(["account", "github:ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"));

    machine
        .hop()
        .args(["account", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("github:ada"));
}

#[test]
fn test_explicit_config_flag() {
    let machine = TestMachine::new();
    let path = machine.home.join("custom.json");
    machine.write_json(&path, &sample_document());

    machine
        .hop()
        .args(["--config"])
        .arg(&path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dev Box"));
}

#[test]
fn test_malformed_config() {
    let machine = TestMachine::new();
    machine.write_file(&machine.default_config(), "{ not json");

    machine
        .hop()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed configuration file"));
}

#[test]
fn test_missing_machine_id() {
    let machine = TestMachine::new();
    machine.install_config(&json!({
        "schema_version": "1.0",
        "machine": {"name": "M"}
    }));

    machine
        .hop()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("machine.id"));
}

#[test]
fn test_validate_reports_dangling_reference() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    machine
        .hop()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_validate_clean_document() {
    let machine = TestMachine::new();
    let mut doc = sample_document();
    doc["bundles"][0]["projects"] = json!(["api", "web"]);
    machine.install_config(&doc);

    machine
        .hop()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid."));
}

#[test]
fn test_normalize_rewrites_bare_infra_names() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());

    let output = machine.hop().arg("normalize").output().expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(
        value["infra_repos"]["repos"][0],
        json!({"name": "terraform-modules"})
    );
}

#[test]
fn test_audit_clean() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());
    materialize_sample(&machine);

    machine
        .hop()
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("All clear."));
}

#[test]
fn test_audit_drift_exits_1() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());
    materialize_sample(&machine);
    machine.create_repo("dev/forgotten");
    std::fs::remove_dir_all(machine.home.join("dev/tools")).expect("remove tools");

    machine
        .hop()
        .arg("audit")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("forgotten"))
        .stdout(predicate::str::contains("tools"))
        .stderr(predicate::str::contains("1 orphan(s) and 1 stale project(s)"));
}

#[test]
fn test_audit_strays_only_exits_0() {
    let machine = TestMachine::new();
    machine.install_config(&sample_document());
    materialize_sample(&machine);
    machine.create_repo("scratch/experiment");

    let output = machine
        .hop()
        .args(["audit", "--scan", "--format", "json"])
        .output()
        .expect("run hop");
    assert!(output.status.success());
    let value = stdout_json(&output);
    let strays = value["strays"].as_array().expect("strays array");
    assert_eq!(strays.len(), 1);
    assert_eq!(strays[0]["name"], "experiment");
    assert!(value["orphans"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn test_completions_bash() {
    let machine = TestMachine::new();
    machine
        .hop()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hop"));
}

#[test]
fn test_audit_reports_unregistered_nested_infra_dir() {
    let machine = TestMachine::new();
    machine.install_config(&json!({
        "schema_version": "1.0",
        "machine": {"id": "m", "name": "M", "agent_root": "~/dev"},
        "infra_repos": {"path": "~/dev/infra", "repos": []}
    }));
    machine.create_dir("dev/infra");

    let output = machine
        .hop()
        .args(["audit", "--format", "json"])
        .output()
        .expect("run hop");
    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(value["orphans"][0]["name"], "infra");
    assert_eq!(value["orphans"][0]["source"], "agent_root");
}
