use pct_fs::NormalizedPath;
use pct_git::{Error, discover_root};
use pct_test_utils::git::real_git_repo;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_discover_root_from_top_level() {
    let temp = TempDir::new().unwrap();
    real_git_repo(temp.path());

    let root = discover_root(temp.path()).unwrap();

    assert_eq!(root, NormalizedPath::canonicalize(temp.path()).unwrap());
}

#[test]
fn test_discover_root_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    real_git_repo(temp.path());
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let root = discover_root(&nested).unwrap();

    assert_eq!(root, NormalizedPath::canonicalize(temp.path()).unwrap());
}

#[test]
fn test_discovered_root_has_no_trailing_noise() {
    let temp = TempDir::new().unwrap();
    real_git_repo(temp.path());

    let root = discover_root(temp.path()).unwrap();
    let name = root.file_name().unwrap();

    assert!(!root.as_str().ends_with('/'));
    assert_eq!(name, name.trim_end());
}

#[test]
fn test_bare_repository_has_no_root() {
    let temp = TempDir::new().unwrap();
    git2::Repository::init_bare(temp.path()).unwrap();

    let err = discover_root(temp.path()).unwrap_err();

    assert!(matches!(err, Error::BareRepository { .. }), "got: {err}");
}
