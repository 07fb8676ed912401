mod common;
use common::temp_export_dir;

use std::fs;
use visitor_kiosk::config::{Config, EXPORT_FILE_NAME};
use visitor_kiosk::export::{ExportLogic, ExportSettings, ShareMode, ShareStatus};
use visitor_kiosk::models::visitor::VisitorRecord;

fn record(id: i64, first: &str) -> VisitorRecord {
    VisitorRecord {
        id,
        first_name: first.to_string(),
        last_name: "Muller".into(),
        location: "Wildeshausen".into(),
        email: "a@b.de".into(),
        visited_at: "01.01.2024, 10:00:00".into(),
        duration_hours: "1".into(),
        duration_minutes: "30".into(),
        notes: "Schulklasse".into(),
    }
}

fn settings(name: &str, share: ShareMode) -> ExportSettings {
    ExportSettings {
        dir: temp_export_dir(name),
        file_name: EXPORT_FILE_NAME.to_string(),
        share,
    }
}

#[test]
fn writes_fixed_name_file() {
    let s = settings("export_fixed_name", ShareMode::Disabled);
    let report = ExportLogic::export_and_share(&[record(1, "Anna")], &s).expect("export");

    assert_eq!(report.path, s.dir.join("Besucher_DEW.csv"));
    assert_eq!(report.records, 1);
    assert_eq!(report.share, ShareStatus::Skipped);

    let content = fs::read_to_string(&report.path).unwrap();
    assert_eq!(
        content,
        "Anna,Muller,Wildeshausen,a@b.de,01.01.2024, 10:00:00,1,30,Schulklasse"
    );
}

#[test]
fn overwrites_previous_export() {
    let s = settings("export_overwrite", ShareMode::Disabled);
    ExportLogic::export_and_share(&[record(1, "Anna"), record(2, "Ben")], &s).unwrap();
    let report = ExportLogic::export_and_share(&[record(3, "Carla")], &s).unwrap();

    let content = fs::read_to_string(&report.path).unwrap();
    assert!(content.starts_with("Carla,"));
    assert_eq!(content.lines().count(), 1);

    // no temp file left behind
    let names: Vec<_> = fs::read_dir(&s.dir).unwrap().collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn empty_snapshot_writes_empty_file() {
    let s = settings("export_empty", ShareMode::Disabled);
    let report = ExportLogic::export_and_share(&[], &s).unwrap();
    assert_eq!(fs::read_to_string(&report.path).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn failed_share_keeps_written_file() {
    let s = settings("export_share_fails", ShareMode::Command("false".into()));
    let report = ExportLogic::export_and_share(&[record(1, "Anna")], &s).expect("write ok");

    assert!(matches!(report.share, ShareStatus::Failed(_)));
    assert!(report.path.exists());
}

#[cfg(unix)]
#[test]
fn share_command_receives_file() {
    let s = settings("export_share_ok", ShareMode::Command("test -f".into()));
    let report = ExportLogic::export_and_share(&[record(1, "Anna")], &s).unwrap();
    assert_eq!(report.share, ShareStatus::Shared);
}

#[test]
fn unwritable_directory_is_export_error() {
    let blocker = std::env::temp_dir().join("visitor_kiosk_export_blocker");
    fs::write(&blocker, "file, not dir").unwrap();

    let s = ExportSettings {
        dir: blocker.join("exports"),
        file_name: EXPORT_FILE_NAME.to_string(),
        share: ShareMode::Disabled,
    };
    let err = ExportLogic::export_and_share(&[record(1, "Anna")], &s).unwrap_err();
    assert!(matches!(err, visitor_kiosk::errors::AppError::Export(_)));
}

#[test]
fn settings_follow_config() {
    let cfg = Config {
        export_dir: "/tmp/vk-exports".into(),
        share_command: Some("kdeconnect-cli --share".into()),
        ..Config::default()
    };
    let s = ExportSettings::from_config(&cfg);
    assert_eq!(s.path(), std::path::Path::new("/tmp/vk-exports/Besucher_DEW.csv"));
    assert_eq!(s.share, ShareMode::Command("kdeconnect-cli --share".into()));

    let s = ExportSettings::from_config(&Config::default());
    assert_eq!(s.share, ShareMode::Platform);
}
