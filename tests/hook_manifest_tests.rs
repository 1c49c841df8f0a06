//! The pre-commit framework installs rust hooks with
//! `cargo install --bins --path .` from the repository root, so the root
//! manifest must be a package that builds the hook's entry binary.

use std::fs;
use std::path::Path;

fn repo_file(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Could not read {}: {e}", path.display()))
}

fn root_manifest() -> toml::Table {
    toml::from_str(&repo_file("Cargo.toml")).unwrap()
}

#[test]
fn test_root_manifest_is_an_installable_package() {
    let manifest = root_manifest();

    let package = manifest
        .get("package")
        .and_then(|p| p.as_table())
        .expect("root Cargo.toml must declare [package], not only [workspace]");
    assert_eq!(package["name"].as_str(), Some("pre-commit-templates"));
    assert!(manifest.contains_key("workspace"));
}

#[test]
fn test_hook_entry_is_a_binary_of_the_root_package() {
    let manifest = root_manifest();
    let bins: Vec<&str> = manifest["bin"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|bin| bin.get("name").and_then(|n| n.as_str()))
        .collect();

    let hooks = repo_file(".pre-commit-hooks.yaml");
    let entry = hooks
        .lines()
        .find_map(|line| line.trim().strip_prefix("entry:"))
        .map(str::trim)
        .expect("hook definition has an entry");

    assert!(hooks.contains("language: rust"));
    assert!(bins.contains(&entry), "entry {entry} not in {bins:?}");
}

#[test]
fn test_binary_is_built_for_the_hook() {
    let bin = Path::new(env!("CARGO_BIN_EXE_pre-commit-templates"));
    assert!(bin.is_file());
}
