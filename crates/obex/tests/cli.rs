use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn obex() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("obex").into();
    cmd.env_remove("WHO_REPORT");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bulletin.txt")
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    obex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("obex"));
}

// --- Extract ---

#[test]
fn extract_writes_csv_to_stdout() {
    obex()
        .args(["extract", fixture()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ISO3,COUNTRY,EVENT_NAME,GRADE",
        ))
        .stdout(predicate::str::contains(
            "COD,Democratic Republic of the Congo,Ebola virus disease,G3",
        ))
        .stdout(predicate::str::contains("SSD,South Sudan,Measles"))
        .stdout(predicate::str::contains("5542,98,,0.0%"));
}

#[test]
fn extract_writes_json_when_asked() {
    obex()
        .args(["extract", fixture(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ISO3\": \"CMR\""))
        .stdout(predicate::str::contains("\"EVENT_NAME\": \"COVID-19\""));
}

#[test]
fn extract_writes_to_output_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("events.csv");

    obex()
        .args(["extract", fixture(), "-o"])
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("ISO3,COUNTRY"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn extract_reads_report_from_environment() {
    obex()
        .arg("extract")
        .env("WHO_REPORT", fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("South Sudan"));
}

#[test]
fn extract_requires_a_report() {
    obex()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("REPORT"));
}

#[test]
fn extract_fails_on_missing_file() {
    obex()
        .args(["extract", "/no/such/bulletin.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to extract"));
}

// --- Countries ---

#[test]
fn countries_lists_dictionary() {
    obex()
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEN\tKenya"))
        .stdout(predicate::str::contains("COD"));
}
