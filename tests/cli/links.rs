use crate::cli::support::{create_note, ids_of, init_store, json_output, myos_in, note_json, seed_notes};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Link and unlink
// ============================================================================

#[test]
fn test_link_creates_backlink() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Source note", &[]);
    let b = create_note(dir.path(), "Target note", &[]);

    myos_in(dir.path())
        .args(["link", &a, &b])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Linked {} -> {}", a, b)));

    let shown = json_output(dir.path(), &["show", &b]);
    assert_eq!(shown["backlinks"][0]["id"], a.as_str());
    assert_eq!(shown["note"]["linkScore"], 1);
}

#[test]
fn test_link_twice_is_noop() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Source", &[]);
    let b = create_note(dir.path(), "Target", &[]);

    myos_in(dir.path()).args(["link", &a, &b]).assert().success();

    let json = json_output(dir.path(), &["link", &a, &b]);
    assert_eq!(json["changed"], false);
    assert_eq!(json["note"]["links"], serde_json::json!([b]));
}

#[test]
fn test_link_to_self_rejected() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Lonely", &[]);

    myos_in(dir.path()).args(["link", &a, &a]).assert().code(2);
}

#[test]
fn test_link_to_missing_target() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Source", &[]);

    myos_in(dir.path())
        .args(["link", &a, "note_ghost"])
        .assert()
        .code(3);
}

#[test]
fn test_unlink_removes_edge() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Source", &[]);
    let b = create_note(dir.path(), "Target", &["--link", &a]);

    myos_in(dir.path())
        .args(["unlink", &b, &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unlinked"));

    myos_in(dir.path())
        .args(["unlink", &b, &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not link to"));

    let shown = json_output(dir.path(), &["show", &a]);
    assert_eq!(shown["backlinks"], serde_json::json!([]));
}

#[test]
fn test_delete_leaves_dangling_link() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let a = create_note(dir.path(), "Will be deleted", &[]);
    let b = create_note(dir.path(), "Points at it", &["--link", &a]);

    myos_in(dir.path()).args(["delete", &a]).assert().success();

    myos_in(dir.path())
        .args(["show", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("(missing)"));

    myos_in(dir.path())
        .args(["graph", "--dangling"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} -> {}", b, a)));

    // the dangling edge can still be removed
    myos_in(dir.path())
        .args(["unlink", &b, &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unlinked"));
}

// ============================================================================
// Graph
// ============================================================================

fn seeded_graph() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_a", "Alpha", "Idea", &[], &["note_b"], 3),
            note_json("note_b", "Beta", "Idea", &[], &["note_a", "note_gone"], 2),
            note_json("note_c", "Gamma", "Idea", &[], &["note_b"], 1),
            note_json("note_d", "Delta", "Idea", &[], &[], 0),
        ],
    );
    dir
}

#[test]
fn test_graph_summary() {
    let dir = seeded_graph();
    let json = json_output(dir.path(), &["graph"]);

    assert_eq!(json["summary"]["notes"], 4);
    assert_eq!(json["summary"]["edges"], 4);
    assert_eq!(json["summary"]["resolved_edges"], 3);
    assert_eq!(json["summary"]["dangling_edges"], 1);
    assert_eq!(json["summary"]["isolated"], 1);
}

#[test]
fn test_graph_focus() {
    let dir = seeded_graph();
    let json = json_output(dir.path(), &["graph", "--focus", "note_a"]);

    let mut ids = ids_of(&json["nodes"]);
    ids.sort();
    assert_eq!(ids, ["note_a", "note_b"]);
}

#[test]
fn test_graph_focus_unknown() {
    let dir = seeded_graph();
    myos_in(dir.path())
        .args(["graph", "--focus", "note_zz"])
        .assert()
        .code(3);
}

#[test]
fn test_graph_connected_excludes_isolated() {
    let dir = seeded_graph();
    let json = json_output(dir.path(), &["graph", "--connected"]);
    assert!(!ids_of(&json["nodes"]).contains(&"note_d".to_string()));
    assert_eq!(ids_of(&json["nodes"]).len(), 3);
}

#[test]
fn test_graph_human_summary_line() {
    let dir = seeded_graph();
    myos_in(dir.path())
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "4 notes, 4 edges (3 resolved, 1 dangling), 1 isolated",
        ));
}

// ============================================================================
// Suggest
// ============================================================================

#[test]
fn test_suggest_by_tag_and_type() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_src", "Sourdough starter ratios", "Observation", &["baking"], &["note_tag"], 0),
            note_json("note_tag", "Oven spring notes", "Idea", &["baking"], &[], 1),
            note_json("note_type", "Frost on windows", "Observation", &[], &[], 2),
            note_json("note_none", "Quarterly taxes", "Quote", &[], &[], 3),
        ],
    );

    let json = json_output(dir.path(), &["suggest", "note_src"]);
    let ids = ids_of(&json);
    assert!(ids.contains(&"note_tag".to_string()));
    assert!(ids.contains(&"note_type".to_string()));
    assert!(!ids.contains(&"note_none".to_string()));
    assert!(!ids.contains(&"note_src".to_string()));

    let tagged = json
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "note_tag")
        .unwrap();
    assert_eq!(tagged["already_linked"], true);
}

#[test]
fn test_suggest_with_query_and_limit() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_1", "Tide pools", "Idea", &[], &[], 0),
            note_json("note_2", "Tidal energy", "Idea", &[], &[], 1),
            note_json("note_3", "Tidy desk", "Idea", &[], &[], 2),
        ],
    );

    let json = json_output(dir.path(), &["suggest", "note_1", "--query", "tidal"]);
    assert_eq!(ids_of(&json), ["note_2"]);

    let json = json_output(dir.path(), &["suggest", "note_1", "-n", "1"]);
    assert_eq!(ids_of(&json).len(), 1);
}

#[test]
fn test_suggest_unknown_note() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    myos_in(dir.path())
        .args(["suggest", "note_nope"])
        .assert()
        .code(3);
}
