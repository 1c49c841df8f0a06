//! Tests for loading configuration from a repository

use pct_core::{Config, Error, Settings};
use pct_fs::NormalizedPath;
use pct_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use serde_json::json;

fn root(repo: &TestRepo) -> NormalizedPath {
    NormalizedPath::new(repo.canonical_root())
}

#[test]
fn test_missing_manifest_yields_defaults() {
    let repo = TestRepo::new();

    let config = Config::load(root(&repo)).unwrap();

    assert_eq!(config.settings(), &Settings::default());
    assert_eq!(config.template_root(), &root(&repo).join("templates"));
    assert_eq!(config.target_root(), &root(&repo));
}

#[test]
fn test_manifest_without_section_yields_defaults() {
    let repo = TestRepo::new();
    repo.write_manifest("[project]\nname = \"demo\"\n\n[tool.black]\nline-length = 88\n");

    let config = Config::load(root(&repo)).unwrap();

    assert_eq!(config.settings(), &Settings::default());
}

#[test]
fn test_section_is_loaded() {
    let repo = TestRepo::new();
    repo.write_settings(
        "template_directory = \".templates\"\ntarget_directory = \"build/../docs\"\n\n[tool.pre_commit_templates.data]\nproject = \"demo\"\n",
    );

    let config = Config::load(root(&repo)).unwrap();

    assert_eq!(config.template_root(), &root(&repo).join(".templates"));
    assert_eq!(config.target_root(), &root(&repo).join("docs"));
    assert_eq!(
        serde_json::Value::Object(config.data().clone()),
        json!({"project": "demo"})
    );
}

#[test]
fn test_malformed_section_is_fatal() {
    let repo = TestRepo::new();
    repo.write_manifest("[tool]\npre_commit_templates = [1, 2]\n");

    let err = Config::load(root(&repo)).unwrap_err();

    assert!(matches!(err, Error::ConfigParse { .. }), "got: {err}");
    assert!(err.to_string().contains("pyproject.toml"), "got: {err}");
}

#[test]
fn test_configs_do_not_leak_between_roots() {
    let first = TestRepo::new();
    first.write_settings("[tool.pre_commit_templates.data]\nname = \"first\"\n");
    let second = TestRepo::new();

    let first_config = Config::load(root(&first)).unwrap();
    let second_config = Config::load(root(&second)).unwrap();

    assert_eq!(first_config.data()["name"], "first");
    assert!(second_config.data().is_empty());
    assert_ne!(first_config.root(), second_config.root());
}

#[test]
fn test_relative_input_joins_root() {
    let repo = TestRepo::new();
    let config = Config::load(root(&repo)).unwrap();

    assert_eq!(
        config.resolve_input("templates/../templates/a.txt"),
        root(&repo).join("templates/a.txt")
    );
}

#[cfg(unix)]
#[test]
fn test_absolute_input_through_symlink_lands_under_root() {
    let repo = TestRepo::new();
    repo.write_file("templates/a.txt", "x");
    let elsewhere = tempfile::tempdir().unwrap();
    let link = elsewhere.path().join("link");
    std::os::unix::fs::symlink(repo.canonical_root(), &link).unwrap();
    let config = Config::load(root(&repo)).unwrap();

    let resolved = config.resolve_input(link.join("templates/a.txt"));

    assert_eq!(resolved, root(&repo).join("templates/a.txt"));
}

#[cfg(unix)]
#[test]
fn test_absolute_input_with_missing_parent_stays_lexical() {
    let repo = TestRepo::new();
    let elsewhere = tempfile::tempdir().unwrap();
    let input = elsewhere.path().join("missing/../gone/a.txt");
    let config = Config::load(root(&repo)).unwrap();

    let resolved = config.resolve_input(&input);

    assert_eq!(resolved, NormalizedPath::new(elsewhere.path()).join("gone/a.txt"));
}
