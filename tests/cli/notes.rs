use crate::cli::support::{create_note, init_store, json_output, myos_in};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Create
// ============================================================================

#[test]
fn test_create_prints_id_and_title() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["create", "Walking helps me think\nmore below"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created note_"))
        .stdout(predicate::str::contains("Walking helps me think"));
}

#[test]
fn test_capture_alias() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["capture", "Quick capture"])
        .assert()
        .success();
}

#[test]
fn test_create_from_stdin() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let note = json_output_with_stdin(dir.path(), "Piped in from elsewhere");
    assert_eq!(note["content"], "Piped in from elsewhere");
}

fn json_output_with_stdin(dir: &std::path::Path, input: &str) -> serde_json::Value {
    let output = myos_in(dir)
        .args(["--format", "json", "create"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_create_with_metadata() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let note = json_output(
        dir.path(),
        &[
            "create",
            "The obstacle is the way",
            "--type",
            "quote",
            "--tag",
            "stoic",
            "--tag",
            " stoic ",
            "--source",
            "Marcus Aurelius",
            "--mood",
            "calm",
            "--title",
            "Obstacles",
        ],
    );

    assert_eq!(note["type"], "Quote");
    assert_eq!(note["title"], "Obstacles");
    assert_eq!(note["source"], "Marcus Aurelius");
    assert_eq!(note["mood"], "Calm");
    assert_eq!(note["tags"], serde_json::json!(["stoic"]));
    assert_eq!(note["pinned"], false);
    assert_eq!(note["createdAt"], note["updatedAt"]);
}

#[test]
fn test_create_empty_is_usage_error() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["create", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_create_invalid_type_rejected() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["create", "Hello", "--type", "memo"])
        .assert()
        .code(2);
}

#[test]
fn test_create_with_missing_link_target() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["create", "Points nowhere", "--link", "note_missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found"));

    myos_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

// ============================================================================
// Edit and show
// ============================================================================

#[test]
fn test_edit_changes_fields() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Draft thought", &["--tag", "draft"]);

    myos_in(dir.path())
        .args(["edit", &id, "--content", "Refined thought", "--type", "observation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let shown = json_output(dir.path(), &["show", &id]);
    assert_eq!(shown["note"]["content"], "Refined thought");
    assert_eq!(shown["note"]["type"], "Observation");
    assert_eq!(shown["note"]["tags"], serde_json::json!(["draft"]));
}

#[test]
fn test_edit_clear_flags() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(
        dir.path(),
        "Has extras",
        &["--tag", "x", "--mood", "focused", "--source", "podcast"],
    );

    let note = json_output(
        dir.path(),
        &["edit", &id, "--clear-tags", "--clear-mood", "--clear-source"],
    );
    assert_eq!(note["tags"], serde_json::json!([]));
    assert!(note.get("mood").is_none());
    assert!(note.get("source").is_none());
}

#[test]
fn test_edit_requires_a_change() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Unchanged", &[]);

    myos_in(dir.path()).args(["edit", &id]).assert().code(2);
}

#[test]
fn test_edit_unknown_note() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["edit", "note_nope", "--title", "x"])
        .assert()
        .code(3);
}

#[test]
fn test_show_human_output() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Body of the note", &["--tag", "alpha"]);

    myos_in(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("id:      {}", id)))
        .stdout(predicate::str::contains("type:    Idea"))
        .stdout(predicate::str::contains("tags:    alpha"))
        .stdout(predicate::str::contains("Body of the note"));
}

#[test]
fn test_show_unknown_note_json_error() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .args(["--format", "json", "show", "note_nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note_not_found"));
}

// ============================================================================
// Pin, archive, delete
// ============================================================================

#[test]
fn test_pin_toggles() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Keep me on top", &[]);

    myos_in(dir.path())
        .args(["pin", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pinned"));
    myos_in(dir.path())
        .args(["pin", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpinned"));
}

#[test]
fn test_archive_hides_from_list() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Old business", &[]);

    myos_in(dir.path())
        .args(["archive", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived"));

    myos_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old business").not());

    myos_in(dir.path())
        .args(["list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old business"));
}

#[test]
fn test_delete_removes_note() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let id = create_note(dir.path(), "Short-lived", &[]);

    myos_in(dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    myos_in(dir.path()).args(["show", &id]).assert().code(3);
    myos_in(dir.path()).args(["delete", &id]).assert().code(3);
}
