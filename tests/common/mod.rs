// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use rootball::Recipe;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a recipe list from `(id, dependencies)` pairs.
pub fn recipes(defs: &[(&str, &[&str])]) -> Vec<Recipe> {
    defs.iter().map(|(id, deps)| Recipe::new(*id, deps)).collect()
}

/// A straight chain `r0 -> r1 -> ... -> r{count-1}`.
pub fn chain(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let id = format!("r{}", i);
            if i + 1 < count {
                Recipe::new(id, &[format!("r{}", i + 1).as_str()])
            } else {
                Recipe::leaf(id)
            }
        })
        .collect()
}

/// Write a recipe file into `dir`, creating parent directories.
///
/// Returns the full path of the written file.
pub fn write_recipe_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A small bootstrap-style recipe tree spread over three files.
///
/// Returns (TempDir, entry path) - keep the TempDir alive to prevent cleanup.
pub fn setup_toolchain_files() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();

    let entry = write_recipe_file(
        &dir,
        "system.toml",
        r#"
include = ["toolchain.toml", "services/web.toml"]

[[recipe]]
id = "base-system"
dependencies = ["gcc", "coreutils"]

[[recipe]]
id = "coreutils"
dependencies = ["glibc"]
"#,
    );

    write_recipe_file(
        &dir,
        "toolchain.toml",
        r#"
[[recipe]]
id = "gcc"
dependencies = ["glibc", "binutils"]

[[recipe]]
id = "binutils"
requires = ["glibc"]

[[recipe]]
id = "glibc"
dependencies = ["linux-headers"]

[[recipe]]
id = "linux-headers"
"#,
    );

    write_recipe_file(
        &dir,
        "services/web.toml",
        r#"
include = ["../toolchain.toml"]

[[recipe]]
id = "nginx"
dependencies = ["glibc"]
"#,
    );

    (dir, entry)
}
