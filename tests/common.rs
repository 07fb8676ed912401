#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vk() -> Command {
    cargo_bin_cmd!("visitor-kiosk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_visitor_kiosk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty directory for export files
pub fn temp_export_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_visitor_kiosk_export", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Initialize DB through the binary and add two visitors
pub fn init_db_with_data(db_path: &str) {
    vk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vk().args([
        "--db",
        db_path,
        "add",
        "--first-name",
        "Anna",
        "--last-name",
        "Muller",
        "--location",
        "Wildeshausen",
        "--email",
        "a@b.de",
        "--hours",
        "1",
        "--minutes",
        "30",
        "--notes",
        "Schulklasse",
        "--at",
        "01.01.2024, 10:00:00",
    ])
    .assert()
    .success();

    vk().args([
        "--db",
        db_path,
        "add",
        "--first-name",
        "Ben",
        "--location",
        "Bremen",
        "--at",
        "02.01.2024, 11:15:00",
    ])
    .assert()
    .success();
}
