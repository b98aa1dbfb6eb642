// end-to-end tests running the relkit binary

use relkit::utils::testing::TestGitRepo;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = "[package]\nname = \"orbit\"\nversion = \"1.0.0\"\nedition = \"2024\"\n";

fn relkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relkit"))
        .arg("--path")
        .arg(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn project_with_changelog(changelog: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Cargo.toml"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), changelog).unwrap();
    temp_dir
}

#[test]
fn test_evalver_outside_repository_uses_zero_baseline() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    let output = relkit(temp_dir.path(), &["evalver"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\n");
    assert!(stderr(&output).contains("info: no release tags available"));
}

#[test]
fn test_evalver_against_tags() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TestGitRepo::init(temp_dir.path()).unwrap();
    repo.write_file("Cargo.toml", MANIFEST).unwrap();
    repo.commit("feat: initial release").unwrap();
    repo.tag("v0.9.0").unwrap();

    let output = relkit(repo.path(), &["evalver"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\n");

    repo.annotated_tag("v1.0.0", "release 1.0.0").unwrap();
    let output = relkit(repo.path(), &["evalver"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn test_evalver_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Cargo.toml"), MANIFEST).unwrap();

    let output = relkit(temp_dir.path(), &["--format", "json", "evalver"]);
    assert!(output.status.success());

    let gate: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(gate["proceed"], serde_json::json!(true));
    assert_eq!(gate["previous"], serde_json::Value::Null);
}

#[test]
fn test_notes_prints_body() {
    let temp_dir = project_with_changelog(
        "# Changelog\n\n## 1.0.0\n\n### Features\n- stable lockfile format\n\n## 0.9.0\n\n- beta\n",
    );

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "### Features\n- stable lockfile format\n");
}

#[test]
fn test_notes_not_finalized() {
    let temp_dir = project_with_changelog("## 1.0.0 - Unreleased\n\n- stable lockfile format\n");

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(
        "error: most recent changelog entry is not finalized (marked unreleased): '## 1.0.0 - Unreleased'"
    ));
}

#[test]
fn test_notes_version_mismatch() {
    let temp_dir = project_with_changelog("## v0.9.0\n\n- beta\n");

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(
        "error: most recent changelog entry is for version '0.9.0', but '1.0.0' was requested"
    ));
}

#[test]
fn test_notes_no_entry() {
    let temp_dir = project_with_changelog("# Changelog\n\nnothing yet\n");

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("error: changelog has no version entry"));
}

#[test]
fn test_notes_empty_entry() {
    let temp_dir = project_with_changelog("## 1.0.0\n\n   \n## 0.9.0\n- beta\n");

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("error: changelog entry for version 1.0.0 has no notes"));
}

#[test]
fn test_notes_missing_changelog() {
    let temp_dir = TempDir::new().unwrap();

    let output = relkit(temp_dir.path(), &["notes", "1.0.0"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read changelog"));
}

#[test]
fn test_pack_uses_manifest_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("Cargo.toml"), MANIFEST).unwrap();
    fs::write(root.join("LICENSE"), "GPL-3.0\n").unwrap();
    fs::create_dir_all(root.join("target/release")).unwrap();
    fs::write(root.join("target/release/orbit"), "binary").unwrap();

    let output = relkit(root, &["pack", "x86_64-linux"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(root.join("orbit-x86_64-linux.zip").is_file());
    assert!(root.join("target/orbit/bin/orbit").is_file());
    assert!(stdout(&output).contains("info: packed bin/orbit"));
}

#[test]
fn test_mansync_writes_pages() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("Cargo.toml"), MANIFEST).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(
        root.join("docs/commands.toml"),
        r#"
[orbit]
summary = "an hdl package manager"
synopsis = "orbit [options] <command>"

[orbit.options]
"--version" = "print version information and exit"

[get]
name = "get"
summary = "fetch an hdl entity"
synopsis = "orbit get [options] <unit>"
description = "Fetches an entity."
examples = "orbit get and_gate"
"#,
    )
    .unwrap();

    let output = relkit(root, &["mansync"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("info: documentation score: 4 / 4"));
    assert!(root.join("docs/src/commands/get.md").is_file());
    assert!(root.join("src/commands/manuals/get.rs").is_file());
    let help = fs::read_to_string(root.join("src/commands/helps/orbit.rs")).unwrap();
    assert!(help.contains("    get                   fetch an hdl entity\n"));
}
