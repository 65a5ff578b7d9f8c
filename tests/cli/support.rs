use std::path::Path;
use std::process::Output;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for myos
pub fn myos() -> Command {
    cargo_bin_cmd!("myos")
}

/// A myos command rooted at `dir`
pub fn myos_in(dir: &Path) -> Command {
    let mut cmd = myos();
    cmd.arg("--root").arg(dir).env_remove("MYOS_STORE");
    cmd
}

/// Initialize a store under `dir`
pub fn init_store(dir: &Path) {
    myos_in(dir).arg("init").assert().success();
}

/// Initialize a store under `dir` with the flat-file backend
pub fn init_flat_store(dir: &Path) {
    myos_in(dir)
        .args(["init", "--backend", "flat"])
        .assert()
        .success();
}

/// First stdout line, trimmed
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Create a note and return its id. `extra` is appended after the content.
pub fn create_note(dir: &Path, content: &str, extra: &[&str]) -> String {
    let output = myos_in(dir)
        .args(["create", "--quiet", content])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "create failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    extract_id(&output)
}

/// Run a command with `--format json` and parse stdout
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = myos_in(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Current wall clock in milliseconds
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// A note record in export format, created `days_ago` days before now
pub fn note_json(
    id: &str,
    content: &str,
    note_type: &str,
    tags: &[&str],
    links: &[&str],
    days_ago: i64,
) -> serde_json::Value {
    let at = now_ms() - days_ago * DAY_MS;
    serde_json::json!({
        "id": id,
        "title": content.lines().next().unwrap_or(""),
        "content": content,
        "type": note_type,
        "tags": tags,
        "createdAt": at,
        "updatedAt": at,
        "pinned": false,
        "archived": false,
        "links": links,
    })
}

/// Import `notes` into the store under `dir` through an export file
pub fn seed_notes(dir: &Path, notes: Vec<serde_json::Value>) {
    let file = dir.join("seed.json");
    let payload = serde_json::json!({ "notes": notes });
    std::fs::write(&file, serde_json::to_string_pretty(&payload).unwrap()).unwrap();
    myos_in(dir)
        .args(["import", "seed.json"])
        .assert()
        .success();
}

/// Ids in a JSON array of notes, in order
pub fn ids_of(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|n| n["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
