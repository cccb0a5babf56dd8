//! cli_roundtrip.rs
//!
//! Black-box tests of the `sharedstreets` binary:
//! same input => same identifier, and JSON output carries the published vectors.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sharedstreets"))
}

fn run_json(args: &[&str]) -> Output {
    bin()
        .arg("--json")
        .args(args)
        .env_remove("SHAREDSTREETS_LOG")
        .output()
        .expect("failed to spawn sharedstreets")
}

fn json(out: &Output) -> Value {
    assert!(
        out.status.success(),
        "sharedstreets failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout is not json")
}

fn write(dir: &Path, name: &str, body: &str) -> String {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p.to_string_lossy().into_owned()
}

#[test]
fn hash_message() {
    let v = json(&run_json(&["hash", "Intersection 110.000000 45.000000"]));
    assert_eq!(v["id"], "F585H3jn72yicbJhf4791w");
    assert_eq!(v["kind"], "message");
}

#[test]
fn intersection_with_negative_lon() {
    let v = json(&run_json(&["intersection", "-74.003388", "40.634538"]));
    assert_eq!(v["id"], "31H4rsFQijyBvkTSfoRYKP");
    assert_eq!(v["message"], "Intersection -74.003388 40.634538");
}

#[test]
fn geometry_is_deterministic() {
    let args = ["geometry", "110", "45", "115", "50", "120", "55"];
    let a = json(&run_json(&args));
    let b = json(&run_json(&args));
    assert_eq!(a, b);
    assert_eq!(a["id"], "SWkr931VN89aHemb4L7MDS");
}

#[test]
fn geometry_odd_values_fail() {
    let out = run_json(&["geometry", "110", "45", "115"]);
    assert!(!out.status.success());
}

#[test]
fn reference_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "refs.json",
        r#"[
            {"lon": -74.0048213, "lat": 40.7416415,
             "outboundBearing": 208, "distanceToNextRef": 9279},
            {"lon": -74.0051265, "lat": 40.7408505, "inboundBearing": 188}
        ]"#,
    );
    let args = ["reference", "--form-of-way", "MultipleCarriageway", "--input", input.as_str()];
    let v = json(&run_json(&args));
    assert_eq!(v["id"], "WXejTYQvo2H5CJ8ZtsiapE");
}

#[test]
fn batch_reports_per_item_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "features.json",
        r#"[
            {"type": "intersection", "coordinates": [110, 45]},
            {"type": "geometry", "coordinates": []}
        ]"#,
    );
    let v = json(&run_json(&["batch", "--input", &input]));
    assert_eq!(v["total"], 2);
    assert_eq!(v["failed"], 1);
    assert_eq!(v["items"][0]["id"], "F585H3jn72yicbJhf4791w");
    assert_eq!(v["items"][1]["code"], "invalid_input");
    assert_eq!(v["items"][1]["index"], 1);
}

#[test]
fn fixtures_all_match() {
    let v = json(&run_json(&["fixtures"]));
    let items = v.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i["ok"] == true));
}
