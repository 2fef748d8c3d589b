//! CLI integration tests for the skelanim binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Two-bone rig. Clip 0 turns "Root" 90 degrees about Y over one second,
/// clip 1 holds the identity pose.
const RIG: &str = r#"{
    "nodes": [
        { "name": "Root" },
        { "name": "Child", "parent": "Root" },
        { "name": "Light", "parent": "Root" }
    ],
    "bones": [{ "name": "Root" }, { "name": "Child" }],
    "clips": [
        {
            "name": "Turn",
            "ticks_per_second": 24.0,
            "duration_ticks": 24.0,
            "channels": [{
                "node": "Root",
                "scale": [{ "time": 0.0, "value": [1.0, 1.0, 1.0] }],
                "rotation": [
                    { "time": 0.0, "value": [0.0, 0.0, 0.0, 1.0] },
                    { "time": 24.0, "value": [0.0, 0.70710677, 0.0, 0.70710677] }
                ],
                "translation": [{ "time": 0.0, "value": [0.0, 0.0, 0.0] }]
            }]
        },
        {
            "name": "Still",
            "ticks_per_second": 24.0,
            "duration_ticks": 24.0,
            "channels": [{
                "node": "Root",
                "scale": [{ "time": 0.0, "value": [1.0, 1.0, 1.0] }],
                "rotation": [{ "time": 0.0, "value": [0.0, 0.0, 0.0, 1.0] }],
                "translation": [{ "time": 0.0, "value": [0.0, 0.0, 0.0] }]
            }]
        }
    ]
}"#;

fn write_rig(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("rig.json");
    fs::write(&path, RIG).unwrap();
    path
}

fn skelanim() -> Command {
    Command::cargo_bin("skelanim").unwrap()
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .arg("info")
        .arg(&rig)
        .arg("--detailed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bones: 2"))
        .stdout(predicate::str::contains("Nodes: 3 (2 required)"))
        .stdout(predicate::str::contains("[0] Turn"))
        .stdout(predicate::str::contains("Light (pruned)"));
}

#[test]
fn test_sample_text() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .args(["sample", rig.to_str().unwrap(), "--clip", "0", "--time", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bone 0 'Root':"))
        .stdout(predicate::str::contains("Bone 1 'Child':"))
        .stdout(predicate::str::contains("0.70711"));
}

#[test]
fn test_sample_json() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    let output = skelanim()
        .args(["sample", rig.to_str().unwrap(), "--time", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bones = value["bones"].as_array().unwrap();
    assert_eq!(bones.len(), 2);
    assert_eq!(bones[1]["name"], "Child");
    assert_eq!(bones[0]["matrix"].as_array().unwrap().len(), 16);
}

#[test]
fn test_sample_invalid_clip() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .args(["sample", rig.to_str().unwrap(), "--clip", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid animation index 5"));
}

#[test]
fn test_blend() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .args([
            "blend",
            rig.to_str().unwrap(),
            "--from",
            "1",
            "--to",
            "0",
            "--factor",
            "0.5",
            "--time",
            "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bone 0 'Root':"));
}

#[test]
fn test_blend_rejects_factor() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .args([
            "blend",
            rig.to_str().unwrap(),
            "--from",
            "0",
            "--to",
            "1",
            "--factor",
            "1.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid blend factor"));
}

#[test]
fn test_sweep() {
    let dir = TempDir::new().unwrap();
    let rig = write_rig(&dir);

    skelanim()
        .args(["sweep", rig.to_str().unwrap(), "--frames", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame 0 (0.0000s)"))
        .stdout(predicate::str::contains("Frame 3 (0.7500s)"));
}

#[test]
fn test_missing_file() {
    skelanim()
        .args(["info", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open rig"));
}
