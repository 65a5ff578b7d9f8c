use crate::cli::support::{
    create_note, ids_of, init_store, json_output, myos_in, note_json, seed_notes,
};
use predicates::prelude::*;
use tempfile::tempdir;

fn seeded() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_a", "Morning pages habit", "Journal", &["habits"], &[], 0),
            note_json("note_b", "Compound interest of small wins", "Idea", &["habits", "growth"], &["note_a"], 10),
            note_json("note_c", "Bridges sway in wind", "Observation", &[], &[], 40),
            note_json("note_d", "Every act is a vote", "Quote", &["habits"], &[], 120),
        ],
    );
    dir
}

// ============================================================================
// List
// ============================================================================

#[test]
fn test_list_empty_store() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_list_newest_first() {
    let dir = seeded();
    let json = json_output(dir.path(), &["list"]);
    assert_eq!(ids_of(&json), ["note_a", "note_b", "note_c", "note_d"]);
}

#[test]
fn test_list_sort_orders() {
    let dir = seeded();

    let oldest = json_output(dir.path(), &["list", "--sort", "oldest"]);
    assert_eq!(ids_of(&oldest), ["note_d", "note_c", "note_b", "note_a"]);

    let linked = json_output(dir.path(), &["list", "--sort", "linked"]);
    let ids = ids_of(&linked);
    assert_eq!(&ids[..2], ["note_a", "note_b"]);
}

#[test]
fn test_list_filters() {
    let dir = seeded();

    let quotes = json_output(dir.path(), &["list", "--type", "quote"]);
    assert_eq!(ids_of(&quotes), ["note_d"]);

    let tagged = json_output(dir.path(), &["list", "--tag", "habits", "--tag", "growth"]);
    assert_eq!(ids_of(&tagged), ["note_b"]);

    let month = json_output(dir.path(), &["list", "--range", "30"]);
    assert_eq!(ids_of(&month), ["note_a", "note_b"]);

    let connected = json_output(dir.path(), &["list", "--connected"]);
    assert_eq!(ids_of(&connected), ["note_a", "note_b"]);

    let limited = json_output(dir.path(), &["list", "-n", "1"]);
    assert_eq!(ids_of(&limited), ["note_a"]);
}

#[test]
fn test_list_json_includes_backlinks() {
    let dir = seeded();
    let json = json_output(dir.path(), &["list", "--type", "journal"]);
    assert_eq!(json[0]["backlinks"], serde_json::json!(["note_b"]));
    assert_eq!(json[0]["linkScore"], 1);
}

#[test]
fn test_list_today() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    create_note(dir.path(), "Captured just now", &[]);

    myos_in(dir.path())
        .args(["list", "--today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured just now"));
}

#[test]
fn test_list_pinned_only() {
    let dir = seeded();
    myos_in(dir.path())
        .args(["pin", "note_c"])
        .assert()
        .success();

    let pinned = json_output(dir.path(), &["list", "--pinned"]);
    assert_eq!(ids_of(&pinned), ["note_c"]);
}

#[test]
fn test_list_invalid_range() {
    let dir = seeded();
    myos_in(dir.path())
        .args(["list", "--range", "14"])
        .assert()
        .code(2);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_fuzzy_tokens() {
    let dir = seeded();

    let json = json_output(dir.path(), &["search", "brdg wnd"]);
    assert_eq!(ids_of(&json), ["note_c"]);
}

#[test]
fn test_search_matches_tags() {
    let dir = seeded();
    let json = json_output(dir.path(), &["search", "growth"]);
    assert_eq!(ids_of(&json), ["note_b"]);
}

#[test]
fn test_search_no_results() {
    let dir = seeded();
    myos_in(dir.path())
        .args(["search", "zyzzyva"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_archived_only_when_asked() {
    let dir = seeded();
    myos_in(dir.path())
        .args(["archive", "note_c"])
        .assert()
        .success();

    let live = json_output(dir.path(), &["search", "bridges"]);
    assert!(ids_of(&live).is_empty());

    let all = json_output(dir.path(), &["search", "bridges", "--include-archived"]);
    assert_eq!(ids_of(&all), ["note_c"]);
}

#[test]
fn test_search_blank_query_lists_every_live_note() {
    let dir = seeded();
    myos_in(dir.path())
        .args(["archive", "note_c"])
        .assert()
        .success();

    let json = json_output(dir.path(), &["search", " "]);
    assert_eq!(ids_of(&json), ["note_a", "note_b", "note_d"]);

    let habits = json_output(dir.path(), &["search", "", "--tag", "habits", "--limit", "2"]);
    assert_eq!(ids_of(&habits), ["note_a", "note_b"]);
}
