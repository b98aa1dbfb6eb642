// integration tests for the release gate and release notes workflow

use relkit::utils::changelog::read_changelog;
use relkit::utils::testing::TestGitRepo;
use relkit::{
    ChangelogConfig, CommitRange, Error, GitOps, ReleaseGate, SemanticVersion, build_draft,
    read_manifest_version, validate_changelog_content,
};
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = "[package]\nname = \"orbit\"\nversion = \"1.0.0\"\nedition = \"2024\"\n";

fn write_project(dir: &std::path::Path, changelog: &str) {
    fs::write(dir.join("Cargo.toml"), MANIFEST).unwrap();
    fs::write(dir.join("CHANGELOG.md"), changelog).unwrap();
}

#[test]
fn test_release_notes_for_manifest_version() {
    let temp_dir = TempDir::new().unwrap();
    write_project(
        temp_dir.path(),
        "# Changelog\n\n## 1.0.0\n\n### Features\n- stable lockfile format\n\n## 0.9.0\n\n- beta\n",
    );

    let version = read_manifest_version(temp_dir.path().join("Cargo.toml")).unwrap();
    let content = read_changelog(temp_dir.path().join("CHANGELOG.md")).unwrap();
    let notes = validate_changelog_content(&content, &version).unwrap();

    assert_eq!(notes.version, "1.0.0");
    assert_eq!(notes.body, "### Features\n- stable lockfile format");
}

#[test]
fn test_release_notes_unreleased_entry_blocked() {
    let temp_dir = TempDir::new().unwrap();
    write_project(
        temp_dir.path(),
        "# Changelog\n\n## 1.0.0 - unreleased\n\n- stable lockfile format\n",
    );

    let version = read_manifest_version(temp_dir.path().join("Cargo.toml")).unwrap();
    let content = read_changelog(temp_dir.path().join("CHANGELOG.md")).unwrap();
    let err = validate_changelog_content(&content, &version).unwrap_err();

    assert!(matches!(err, Error::NotFinalized { .. }));
    assert!(err.to_string().contains("## 1.0.0 - unreleased"));
}

#[test]
fn test_release_gate_against_repository_tags() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TestGitRepo::init(temp_dir.path()).unwrap();
    write_project(repo.path(), "## 1.0.0\n- notes\n");
    repo.commit("feat: initial release").unwrap();
    repo.tag("v0.9.0").unwrap();
    repo.tag("latest").unwrap();

    let version = read_manifest_version(repo.path().join("Cargo.toml")).unwrap();
    let tags = GitOps::list_tags(repo.path()).unwrap();

    let gate = ReleaseGate::evaluate(&version, &tags).unwrap();
    assert_eq!(gate.previous, Some(SemanticVersion::new(0, 9, 0)));
    assert_eq!(gate.as_flag(), "1");

    // once 1.0.0 is tagged the same manifest version is blocked
    repo.tag("v1.0.0").unwrap();
    let tags = GitOps::list_tags(repo.path()).unwrap();
    let gate = ReleaseGate::evaluate(&version, &tags).unwrap();
    assert_eq!(gate.as_flag(), "0");
}

#[test]
fn test_draft_from_commits_since_release() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TestGitRepo::init(temp_dir.path()).unwrap();
    repo.write_file("src/main.rs", "fn main() {}\n").unwrap();
    repo.commit("feat: initial release").unwrap();
    repo.tag("v0.1.0").unwrap();
    repo.commit("feat: adds auto-changelog script (close #1)").unwrap();
    repo.commit("wip").unwrap();
    repo.commit("docs: adds section additional help text (#3)").unwrap();

    let (tag, _) = GitOps::latest_release_tag(repo.path()).unwrap().unwrap();
    let subjects =
        GitOps::commit_subjects(repo.path(), &CommitRange::since_tag(Some(tag))).unwrap();
    let draft = build_draft(&subjects, &ChangelogConfig::default());

    assert_eq!(draft.skipped, vec!["wip"]);
    assert_eq!(
        draft.render(),
        "\n### Features\n- adds auto-changelog script (#1)\n\n### Documentation\n- adds section additional help text (#3)\n"
    );
}
