use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const GOLDEN: &str = include_str!("fixtures/default_params.txt");

fn mht_params() -> Command {
    Command::cargo_bin("mht_params").unwrap()
}

#[test]
fn default_run_writes_golden_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("default.param");

    mht_params().arg(&path).assert().success().stdout("");

    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);
}

#[test]
fn pod_and_depth_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("override.param");

    mht_params()
        .arg(&path)
        .args(["--pod", "0.5", "--mxdpth", "7"])
        .assert()
        .success();

    let expected = GOLDEN
        .replacen("detection\n0.999900\n", "detection\n0.500000\n", 1)
        .replacen("track trees\n3\n", "track trees\n7\n", 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn integral_float_for_integer_flag_renders_as_integer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("frames.param");

    mht_params()
        .arg(&path)
        .args(["--frames", "120.0", "-C", "40"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("scans to make\n120\n"));
    assert!(text.contains("diagnostic C\n40\n"));
}

#[test]
fn fractional_integer_flag_is_an_argument_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.param");

    mht_params()
        .arg(&path)
        .args(["--mxdpth", "2.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer value"));

    assert!(!path.exists());
}

#[test]
fn missing_filename_fails() {
    mht_params()
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn unwritable_destination_fails_without_creating_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.param");

    mht_params()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not write"));

    assert!(!path.exists());
}

#[test]
fn second_run_replaces_first() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twice.param");

    mht_params().arg(&path).args(["--varvel", "50"]).assert().success();
    mht_params().arg(&path).assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);
}

#[test]
fn verify_logs_fields_when_asked() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("verified.param");

    mht_params()
        .env("RUST_LOG", "info")
        .arg(&path)
        .args(["--verify", "--mxdist", "9.5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("maxDist = 9.500000"));
}
