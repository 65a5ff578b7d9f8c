use crate::cli::support::{
    create_note, ids_of, init_flat_store, init_store, json_output, myos_in, note_json, seed_notes,
};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_writes_dated_file() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "Exported thought", &[]);

    let json = json_output(dir.path(), &["export"]);
    let path = std::path::PathBuf::from(json["path"].as_str().unwrap());
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("myos-export-"));
    assert!(name.ends_with(".json"));
    assert_eq!(path.parent().unwrap(), dir.path());

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["notes"][0]["content"], "Exported thought");
}

#[test]
fn test_export_to_stdout() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "On stdout", &[]);

    myos_in(dir.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notes\""))
        .stdout(predicate::str::contains("On stdout"));
}

#[test]
fn test_export_output_dir() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    std::fs::create_dir_all(dir.path().join("backups")).unwrap();

    myos_in(dir.path())
        .args(["export", "--output-dir", "backups", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backups"));

    let count = std::fs::read_dir(dir.path().join("backups")).unwrap().count();
    assert_eq!(count, 1);
}

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_export_import_between_backends() {
    let src = tempdir().unwrap();
    init_store(src.path());
    let a = create_note(src.path(), "Moves between stores", &["--tag", "portable"]);
    create_note(src.path(), "Links back", &["--link", &a]);

    let output = myos_in(src.path())
        .args(["export", "--stdout"])
        .output()
        .unwrap();

    let dst = tempdir().unwrap();
    init_flat_store(dst.path());
    std::fs::write(dst.path().join("in.json"), &output.stdout).unwrap();

    let report = json_output(dst.path(), &["import", "in.json"]);
    assert_eq!(report["received"], 2);
    assert_eq!(report["skipped"], 0);
    assert_eq!(report["merged_total"], 2);

    let shown = json_output(dst.path(), &["show", &a]);
    assert_eq!(shown["backlinks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_import_keeps_newer_local_copy() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![note_json("note_x", "Local newer", "Idea", &[], &[], 0)],
    );
    seed_notes(
        dir.path(),
        vec![
            note_json("note_x", "Incoming older", "Idea", &[], &[], 5),
            note_json("note_y", "Brand new", "Idea", &[], &[], 5),
        ],
    );

    let list = json_output(dir.path(), &["list"]);
    assert_eq!(ids_of(&list), ["note_x", "note_y"]);
    assert_eq!(list[0]["content"], "Local newer");
}

#[test]
fn test_import_malformed_payload_is_noop() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "Still here", &[]);
    std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

    myos_in(dir.path())
        .args(["import", "bad.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read"));

    myos_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Still here"));
}

#[test]
fn test_import_skips_bad_records() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let payload = serde_json::json!({
        "notes": [
            note_json("note_ok", "Good record", "Idea", &[], &[], 1),
            { "title": "no id or timestamps" },
            42
        ]
    });
    std::fs::write(dir.path().join("mixed.json"), payload.to_string()).unwrap();

    let report = json_output(dir.path(), &["import", "mixed.json"]);
    assert_eq!(report["received"], 3);
    assert_eq!(report["skipped"], 2);
    assert_eq!(report["merged_total"], 1);
}

#[test]
fn test_import_missing_file() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    myos_in(dir.path())
        .args(["import", "nope.json"])
        .assert()
        .code(1);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_requires_confirmation() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "Precious", &[]);

    myos_in(dir.path()).arg("reset").assert().code(2);
    myos_in(dir.path())
        .args(["reset", "--confirm", "reset"])
        .assert()
        .code(2);

    myos_in(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Precious"));
}

#[test]
fn test_reset_clears_everything() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "One", &[]);
    create_note(dir.path(), "Two", &[]);

    myos_in(dir.path())
        .args(["reset", "--confirm", "RESET"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 notes"));

    myos_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}
