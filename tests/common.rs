#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated sandbox: its own HOME (so no real config is read), storage
/// file and map file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn storage(&self) -> PathBuf {
        self.dir.path().join("workouts.json")
    }

    pub fn map_file(&self) -> PathBuf {
        self.dir.path().join("map.geojson")
    }

    /// rmapty with sandbox paths and no location
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rmapty");
        cmd.env("HOME", self.dir.path())
            .env_remove("RMAPTY_LOCATION")
            .env_remove("RUST_LOG")
            .arg("--storage")
            .arg(self.storage())
            .arg("--map-file")
            .arg(self.map_file());
        cmd
    }

    /// rmapty with sandbox paths and a location, so the map loads
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.args(["--location", "51.5,-0.1"]);
        cmd
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let raw = std::fs::read_to_string(path).expect("read json file");
        serde_json::from_str(&raw).expect("parse json file")
    }
}

pub fn add_running(sb: &Sandbox, at: &str, distance: &str, duration: &str, cadence: &str) {
    sb.cmd()
        .args([
            "add", "--at", at, "--type", "running", "--distance", distance, "--duration",
            duration, "--cadence", cadence,
        ])
        .assert()
        .success();
}
