use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/small_town.json")
        .canonicalize()
        .expect("fixture network present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("roadroute");
    cmd.env("RUST_LOG", "error").env_remove("ROADROUTE_GRAPH");
    cmd
}

#[test]
fn nearest_reports_node_and_distance() {
    let mut cmd = cli();
    cmd.args(["--format", "plain", "nearest", "--graph"])
        .arg(fixture_path())
        .args(["--coord", "28.20905,83.98502"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Nearest node to (28.209050, 83.985020): 1001 at (28.209000, 83.985000) (5.9 meters away)",
        ));
}

#[test]
fn nearest_supports_json() {
    let mut cmd = cli();
    cmd.env("ROADROUTE_GRAPH", fixture_path())
        .args(["nearest", "--coord", "28.21098,83.98697", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(value["node"], 1009);
    assert_eq!(value["coordinate"]["lat"], 28.211);
    assert!(value["distance_meters"].as_f64().expect("number") < 5.0);
}

#[test]
fn nearest_on_empty_network_fails() {
    let dir = tempdir().expect("temp dir");
    let empty = dir.path().join("empty.json");
    fs::write(&empty, r#"{"nodes": []}"#).expect("write empty network");

    let mut cmd = cli();
    cmd.arg("nearest")
        .arg("--graph")
        .arg(&empty)
        .args(["--coord", "0,0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("road graph has no nodes to snap to"));
}

#[test]
fn nearest_accepts_southern_and_western_coordinates() {
    let dir = tempdir().expect("temp dir");
    let network = dir.path().join("sydney.json");
    fs::write(
        &network,
        r#"{"nodes": [{"id": -7, "lat": -33.8688, "lon": 151.2093},
                      {"id": 8, "lat": -33.8700, "lon": 151.2100}]}"#,
    )
    .expect("write network");

    let mut cmd = cli();
    cmd.args(["--format", "plain", "nearest", "--graph"])
        .arg(&network)
        .args(["--coord", "-33.8689,151.2094"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(": -7 at (-33.868800, 151.209300)"));
}
