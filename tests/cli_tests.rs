use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_export_dir, vk};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    vk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_shows_added_visitors() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    vk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Anna Muller"))
        .stdout(contains("Wildeshausen"))
        .stdout(contains("1h 30m"))
        .stdout(contains("Ben"))
        .stdout(contains("2 visitor(s)"));
}

#[test]
fn test_list_json() {
    let db_path = setup_test_db("cli_list_json");
    init_db_with_data(&db_path);

    let out = vk()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("run list");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["first_name"], "Anna");
    assert_eq!(arr[1]["last_name"], "");
    assert_eq!(arr[1]["visited_at"], "02.01.2024, 11:15:00");
}

#[test]
fn test_add_without_fields_is_accepted() {
    let db_path = setup_test_db("cli_add_empty");

    vk().args(["--db", &db_path, "add"])
        .assert()
        .success()
        .stdout(contains("Visitor #1 saved"));
}

#[test]
fn test_export_writes_csv_without_header() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);
    let dir = temp_export_dir("cli_export");

    vk().args([
        "--db",
        &db_path,
        "export",
        "--dir",
        &dir.to_string_lossy(),
        "--no-share",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed (2 visitor(s))"));

    let content = fs::read_to_string(dir.join("Besucher_DEW.csv")).expect("read export");
    assert_eq!(
        content,
        "Anna,Muller,Wildeshausen,a@b.de,01.01.2024, 10:00:00,1,30,Schulklasse\n\
         Ben,,Bremen,,02.01.2024, 11:15:00,,,"
    );
}

#[test]
fn test_reset_requires_confirmation() {
    let db_path = setup_test_db("cli_reset_cancel");
    init_db_with_data(&db_path);

    vk().args(["--db", &db_path, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    vk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2 visitor(s)"));
}

#[test]
fn test_reset_confirmed_deletes_all() {
    let db_path = setup_test_db("cli_reset_yes");
    init_db_with_data(&db_path);

    vk().args(["--db", &db_path, "reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("2 visitor(s) deleted"));

    vk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No visitors registered yet"))
        .stdout(contains("Anna").not());
}

#[test]
fn test_reset_yes_flag_skips_prompt() {
    let db_path = setup_test_db("cli_reset_flag");
    init_db_with_data(&db_path);

    vk().args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Confirm [y/N]").not());

    vk().args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    vk().args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success();

    vk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add (visitor #1)"))
        .stdout(contains("Deleted 2 visitor(s)"));
}

#[test]
fn test_unusable_database_path_fails() {
    let blocker = std::env::temp_dir().join("visitor_kiosk_cli_blocker");
    fs::write(&blocker, "x").unwrap();
    let db = blocker.join("db.sqlite");

    vk().args(["--db", &db.to_string_lossy(), "list"])
        .assert()
        .failure()
        .stderr(contains("Storage unavailable"));
}
