//! Integration tests for the `dialcodes-cli` binary.

mod common;

use common::dialcodes_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn help_lists_commands() {
    dialcodes_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("search"))
            .and(predicate::str::contains("country"))
            .and(predicate::str::contains("dial"))
            .and(predicate::str::contains("snapshot")),
    );
}

#[test]
fn search_excluding_us() {
    dialcodes_cmd()
        .args(["--exclude", "us", "search", "mex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+52 Mexico"));
}

#[test]
fn search_by_dial_code() {
    dialcodes_cmd()
        .args(["search", "+44"])
        .assert()
        .success()
        .stdout(predicate::str::contains("United Kingdom"));
}

#[test]
fn search_without_hits() {
    dialcodes_cmd()
        .args(["search", "atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No countries found matching: atlantis"));
}

#[test]
fn list_uses_language_env() {
    dialcodes_cmd()
        .env("DIALCODES_LANG", "de")
        .args(["--only", "de,at", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deutschland").and(predicate::str::contains("Österreich")));
}

#[test]
fn list_with_popular_header() {
    let out = dialcodes_cmd()
        .args(["--only", "fr,de", "--popular", "us", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4, "{text}");
    assert!(lines[0].ends_with("+1 United States"));
    assert_eq!(lines[1], "-- Other Countries --");
    assert!(lines[2].ends_with("+33 France"));
    assert!(lines[3].ends_with("+49 Germany"));
}

#[test]
fn list_json_shape() {
    let out = dialcodes_cmd()
        .args(["--only", "fr,mx", "--json", "list", "--search", "mex"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["language"], "en");
    assert_eq!(v["items"].as_array().unwrap().len(), 1);
    assert_eq!(v["items"][0]["code"], "MX");
    assert_eq!(v["items"][0]["dial_code"], "+52");
    assert!(v.get("popular").is_none());
}

#[test]
fn list_reports_empty_result() {
    dialcodes_cmd()
        .args(["list", "--search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry we cant find your dialer :("));
}

#[test]
fn country_by_code_and_name() {
    dialcodes_cmd()
        .args(["country", "jp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dial code: +81"));

    dialcodes_cmd()
        .args(["--lang", "fr", "country", "allemagne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: DE"));
}

#[test]
fn unknown_country_fails() {
    dialcodes_cmd()
        .args(["country", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No country found for: xx"));
}

#[test]
fn dial_lists_sharers() {
    dialcodes_cmd()
        .args(["dial", "+7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Russia").and(predicate::str::contains("Kazakhstan")));
}

#[test]
fn popular_requires_codes() {
    dialcodes_cmd().arg("popular").assert().failure();
}

#[test]
fn snapshot_round_trip_through_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subset.bin");

    dialcodes_cmd()
        .args(["--only", "fr,de,it", "snapshot"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 countries"));

    dialcodes_cmd()
        .arg("--input")
        .arg(&path)
        .args(["--json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"countries\": 3"));
}

#[test]
fn custom_json_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"[{"code":"zz","dial_code":"+999","flag":"","name":{"en":"Zedland"}}]"#,
    )
    .unwrap();

    dialcodes_cmd()
        .env("DIALCODES_INPUT", &path)
        .arg("languages")
        .assert()
        .success()
        .stdout("en\n");
}

#[test]
fn bad_input_path_fails() {
    dialcodes_cmd()
        .args(["--input", "/nope/missing.json", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}
