use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn causelist() -> Command {
    Command::cargo_bin("causelist").unwrap()
}

#[test]
fn help_describes_the_workflow() {
    causelist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cause list"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_prints_package_version() {
    causelist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_config_writes_sample_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("causelist.toml");

    causelist()
        .current_dir(dir.path())
        .args(["--generate-config", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[portal]"));
    assert!(content.contains("[report]"));
}

#[test]
fn dry_run_prints_resolved_config_without_a_browser() {
    let dir = TempDir::new().unwrap();

    causelist()
        .current_dir(dir.path())
        .args(["--dry-run", "--output-format", "plain", "--output", "daily.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portal URL"))
        .stdout(predicate::str::contains("daily.pdf"));
}

#[test]
fn dry_run_applies_title_override() {
    let dir = TempDir::new().unwrap();

    causelist()
        .current_dir(dir.path())
        .args([
            "--dry-run",
            "--output-format",
            "plain",
            "--title",
            "Morning Board",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Board"));
}

#[test]
fn non_https_url_is_rejected_at_parse_time() {
    causelist()
        .args(["--url", "http://insecure.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTPS"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    causelist().args(["-q", "-v"]).assert().failure();
}
