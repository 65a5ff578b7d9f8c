use crate::cli::support::{ids_of, init_store, json_output, myos_in, note_json, seed_notes};
use predicates::prelude::*;
use tempfile::tempdir;

fn garden_store() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_r1", "Gardening before work", "Journal", &["garden"], &[], 0),
            note_json("note_r2", "Gardening with compost", "Journal", &["garden"], &[], 1),
            note_json("note_r3", "Compost needs turning", "Journal", &[], &[], 2),
            note_json("note_r4", "Gardening gloves wore out", "Journal", &[], &[], 3),
            note_json("note_r5", "Seedlings under lights", "Journal", &[], &[], 4),
            note_json("note_old_quote", "Markets are efficient", "Quote", &[], &[], 60),
            note_json("note_old_garden", "Gardening compost tomatoes", "Journal", &["garden"], &[], 90),
        ],
    );
    dir
}

// ============================================================================
// Resurface
// ============================================================================

#[test]
fn test_resurface_ranks_related_first() {
    let dir = garden_store();
    let json = json_output(dir.path(), &["resurface"]);

    let ids: Vec<String> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["note"]["id"].as_str().map(str::to_string))
        .collect();
    assert_eq!(ids, ["note_old_garden", "note_old_quote"]);
    assert!(json[0]["score"].as_u64().unwrap() > json[1]["score"].as_u64().unwrap());
    assert_eq!(json[0]["breakdown"]["type_affinity"], 2);
}

#[test]
fn test_resurface_limit_and_explain() {
    let dir = garden_store();

    let json = json_output(dir.path(), &["resurface", "-n", "1"]);
    assert_eq!(json.as_array().unwrap().len(), 1);

    myos_in(dir.path())
        .args(["resurface", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note_old_garden"))
        .stdout(predicate::str::contains("keywords"));
}

#[test]
fn test_resurface_empty_store() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    myos_in(dir.path())
        .arg("resurface")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to resurface"));
}

// ============================================================================
// Digest
// ============================================================================

#[test]
fn test_digest_window() {
    let dir = garden_store();
    let json = json_output(dir.path(), &["digest"]);

    assert_eq!(json["window_days"], 7);
    assert_eq!(ids_of(&json["window"]).len(), 5);
    assert_eq!(json["counts_by_type"][0]["type"], "Journal");
    assert_eq!(json["counts_by_type"][0]["count"], 5);
    let keywords = json["keywords"].as_array().unwrap();
    assert!(keywords.iter().any(|k| k == "gardening"));
}

#[test]
fn test_digest_days_override() {
    let dir = garden_store();
    let json = json_output(dir.path(), &["digest", "--days", "70"]);
    assert_eq!(ids_of(&json["window"]).len(), 6);

    myos_in(dir.path())
        .args(["digest", "--days", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_digest_human_sections() {
    let dir = garden_store();
    myos_in(dir.path())
        .arg("digest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 7 days: 5 notes"))
        .stdout(predicate::str::contains("Themes:"))
        .stdout(predicate::str::contains("Worth revisiting:"));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords_ranked() {
    let dir = garden_store();
    let json = json_output(dir.path(), &["keywords"]);

    assert_eq!(json[0]["term"], "garden");
    assert_eq!(json[1]["term"], "gardening");
    assert!(json.as_array().unwrap().len() <= 8);
}

#[test]
fn test_keywords_window_and_counts() {
    let dir = garden_store();

    let json = json_output(dir.path(), &["keywords", "--days", "30"]);
    let terms: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["term"].as_str())
        .collect();
    assert!(!terms.contains(&"tomatoes"));

    myos_in(dir.path())
        .args(["keywords", "--counts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("garden"));
}

#[test]
fn test_tags_sorted_distinct() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    seed_notes(
        dir.path(),
        vec![
            note_json("note_1", "One", "Idea", &["zeta", "alpha"], &[], 0),
            note_json("note_2", "Two", "Idea", &["alpha", "mid"], &[], 1),
        ],
    );

    let json = json_output(dir.path(), &["tags"]);
    assert_eq!(json, serde_json::json!(["alpha", "mid", "zeta"]));
}
