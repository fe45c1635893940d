use assert_cmd::Command;
use predicates::prelude::*;

fn notez(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("notez").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir);
    cmd
}

#[test]
fn test_demo_runs_full_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    notez(temp_dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Notes App Demo ==="))
        .stdout(predicate::str::contains(
            "Added note: Note{id=1, title='Shopping List', content='Milk, Bread, Eggs'",
        ))
        .stdout(predicate::str::contains("- Meeting Notes"))
        .stdout(predicate::str::contains(
            "Updated note: Note{id=1, title='Updated Shopping List', content='Milk, Bread, Eggs, Butter'",
        ))
        .stdout(predicate::str::contains("Note deleted: true"))
        .stdout(predicate::str::contains("Final notes count: 2"))
        .stdout(predicate::str::contains("- Updated Shopping List (ID: 1)"))
        .stdout(predicate::str::contains("- Ideas (ID: 3)"))
        .stdout(predicate::str::contains("(ID: 2)").not());
}

#[test]
fn test_demo_is_the_default_command() {
    let temp_dir = tempfile::tempdir().unwrap();

    notez(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Final notes count: 2"));
}

#[test]
fn test_demo_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = notez(temp_dir.path())
        .arg("demo")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('[').unwrap();
    let notes: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    let titles: Vec<_> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Updated Shopping List", "Ideas"]);
}

#[test]
fn test_config_set_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    notez(temp_dir.path())
        .args(["config", "log-level", "INFO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log-level = info"));

    assert!(temp_dir.path().join("config.json").exists());

    notez(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("log-level = info"))
        .stdout(predicate::str::contains("color = true"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    notez(temp_dir.path())
        .args(["config", "theme", "dark"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: theme"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    notez(temp_dir.path())
        .arg("-v")
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("note added"))
        .stdout(predicate::str::contains("note added").not());
}
