//! CLI integration tests.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SAMPLE_CONFIG: &str = r#"
[feed]
source = "sample"
sample_latency_ms = 0

[logging]
level = "error"
"#;

fn butcher() -> Command {
    let mut cmd = cargo_bin_cmd!("butcher");
    cmd.env_remove("BUTCHER_ENDPOINT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn help_lists_commands() {
    butcher()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("screen"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn version_names_binary() {
    butcher()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("butcher"));
}

#[test]
fn dashboard_once_renders_sample_feed() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["dashboard", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's Slaughter"))
        .stdout(predicate::str::contains("Daily Kill Count"))
        .stdout(predicate::str::contains("LeBron James"))
        .stdout(predicate::str::contains("Live slaughter feed active"));
}

#[test]
fn dashboard_filters_by_sport() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["dashboard", "--once", "--sport", "nba"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Victor Wembanyama"))
        .stdout(predicate::str::contains("Cade Cunningham"))
        .stdout(predicate::str::contains("Josh Allen").not());
}

#[test]
fn dashboard_shows_empty_state() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["dashboard", "--once", "--min-edge", "90%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No slaughter matches your criteria"));
}

#[test]
fn unreachable_endpoint_falls_back_to_selections() {
    let config = config_file(
        r#"
[feed]
endpoint = "http://127.0.0.1:9/v1/predictions/today"
request_timeout_secs = 2

[logging]
level = "error"
"#,
    );
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["dashboard", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LeBron James"))
        .stdout(predicate::str::contains("Live slaughter feed active"));
}

#[test]
fn dashboard_json_emits_one_snapshot() {
    let config = config_file(SAMPLE_CONFIG);
    let output = butcher()
        .arg("--config")
        .arg(config.path())
        .args(["--json", "dashboard", "--once", "--tier", "meat"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["type"], "snapshot");
    let predictions = record["payload"]["predictions"].as_array().unwrap();
    let ids: Vec<_> = predictions
        .iter()
        .map(|p| p["prediction_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["bb-004", "bb-005"]);
    assert_eq!(record["payload"]["aggregates"]["count"], 5);
}

#[test]
fn screen_once_renders_cards() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["screen", "--once", "--tier", "execution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[🔥 EXECUTION]"))
        .stdout(predicate::str::contains("Butcher's Call: OVER"))
        .stdout(predicate::str::contains("Josh Allen").not());
}

#[test]
fn show_prints_analysis() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["show", "bb-002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Butcher Analysis"))
        .stdout(predicate::str::contains("Josh Allen"))
        .stdout(predicate::str::contains("Reasoning"));
}

#[test]
fn show_unknown_id_fails() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["show", "bb-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bb-999"));
}

#[test]
fn stats_json_reports_aggregates() {
    let config = config_file(SAMPLE_CONFIG);
    let output = butcher()
        .arg("--config")
        .arg(config.path())
        .args(["stats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["type"], "stats");
    assert_eq!(record["payload"]["aggregates"]["count"], 5);
    assert_eq!(record["payload"]["aggregates"]["execution_count"], 1);
    assert_eq!(record["payload"]["aggregates"]["demolition_count"], 2);
}

#[test]
fn check_config_accepts_valid_file() {
    let config = config_file(SAMPLE_CONFIG);
    butcher()
        .args(["check", "config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn check_config_reports_parse_error() {
    let config = config_file("[feed]\npoll_interval_secs = \"often\"\n");
    butcher()
        .args(["check", "config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("poll_interval_secs")
                .or(predicate::str::contains("invalid type")),
        );
}

#[test]
fn check_config_rejects_zero_interval() {
    let config = config_file("[feed]\npoll_interval_secs = 0\n");
    butcher()
        .args(["check", "config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("feed.poll_interval_secs"));
}

#[test]
fn invalid_config_blocks_dashboard() {
    let config = config_file("[feed]\nendpoint = \"ftp://example.com\"\n");
    butcher()
        .arg("--config")
        .arg(config.path())
        .args(["dashboard", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn quiet_views_print_nothing() {
    let config = config_file(SAMPLE_CONFIG);
    for args in [
        &["dashboard", "--once"][..],
        &["screen", "--once"][..],
        &["stats"][..],
    ] {
        butcher()
            .arg("--quiet")
            .arg("--config")
            .arg(config.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn verbose_stats_label_backup_loads_neutrally() {
    let config = config_file(
        r#"
[feed]
endpoint = "http://127.0.0.1:9/v1/predictions/today"
request_timeout_secs = 2
"#,
    );
    butcher()
        .arg("-v")
        .arg("--config")
        .arg(config.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("From backup"))
        .stdout(predicate::str::contains("Failed").not());
}
