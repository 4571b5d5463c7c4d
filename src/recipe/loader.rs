// src/recipe/loader.rs

//! Gathering recipes across included recipe files

use crate::error::{Error, Result};
use crate::recipe::parser::{parse_recipe_file, validate_recipe_file};
use crate::recipe::Recipe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The flat recipe list gathered from an entry file and its includes
#[derive(Debug, Clone, Default)]
pub struct RecipeSet {
    /// All recipes, in load order
    pub recipes: Vec<Recipe>,
    /// Every file that was loaded, in load order (canonical paths)
    pub files: Vec<PathBuf>,
    /// Warnings collected from every loaded file
    pub warnings: Vec<String>,
}

impl RecipeSet {
    /// Number of recipes gathered
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if no recipes were gathered
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Load a recipe file and everything it includes
///
/// Includes resolve relative to the including file and are followed
/// depth-first in declared order; a file's own recipes come before those of
/// its includes. Files may include each other in a loop: every file is read
/// once. Definitions are concatenated as-is, so a recipe defined in two files
/// shows up twice.
pub fn load_recipe_set(entry: &Path) -> Result<RecipeSet> {
    let entry = canonical(entry)?;
    info!("Loading recipes from {}", entry.display());

    let mut set = RecipeSet::default();
    let mut visited = HashSet::new();
    visited.insert(entry.clone());
    gather(&entry, &mut visited, &mut set)?;

    info!(
        "Loaded {} recipe(s) from {} file(s)",
        set.recipes.len(),
        set.files.len()
    );
    Ok(set)
}

fn gather(path: &Path, visited: &mut HashSet<PathBuf>, set: &mut RecipeSet) -> Result<()> {
    debug!("Reading recipe file {}", path.display());
    let file = parse_recipe_file(path)?;

    for warning in validate_recipe_file(&file)? {
        set.warnings.push(format!("{}: {}", path.display(), warning));
    }

    debug!("{}: defines [{}]", path.display(), file.recipe_ids().join(", "));
    if file.has_includes() {
        debug!("{}: following {} include(s)", path.display(), file.include.len());
    }

    set.files.push(path.to_path_buf());
    set.recipes.extend(file.recipes);

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for include in &file.include {
        let included = canonical(&base.join(include)).map_err(|_| {
            Error::IncludeNotFound(format!("{} (included from {})", include, path.display()))
        })?;

        if !visited.insert(included.clone()) {
            debug!("Skipping already loaded include {}", included.display());
            continue;
        }

        gather(&included, visited, set)?;
    }

    Ok(())
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|e| Error::IoError(format!("Failed to resolve {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn ids(set: &RecipeSet) -> Vec<&str> {
        set.recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_single_file() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.toml", "[[recipe]]\nid = \"a\"\n");

        let set = load_recipe_set(&entry).unwrap();
        assert_eq!(ids(&set), vec!["a"]);
        assert_eq!(set.files.len(), 1);
        assert!(set.warnings.is_empty());
    }

    #[test]
    fn test_includes_depth_first() {
        let dir = TempDir::new().unwrap();
        let entry = write(
            &dir,
            "main.toml",
            "include = [\"one.toml\", \"sub/two.toml\"]\n[[recipe]]\nid = \"main\"\n",
        );
        write(&dir, "one.toml", "include = [\"three.toml\"]\n[[recipe]]\nid = \"one\"\n");
        write(&dir, "three.toml", "[[recipe]]\nid = \"three\"\n");
        write(&dir, "sub/two.toml", "[[recipe]]\nid = \"two\"\n");

        let set = load_recipe_set(&entry).unwrap();
        assert_eq!(ids(&set), vec!["main", "one", "three", "two"]);
        assert_eq!(set.files.len(), 4);
    }

    #[test]
    fn test_include_cycle_loads_each_file_once() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "a.toml", "include = [\"b.toml\"]\n[[recipe]]\nid = \"a\"\n");
        write(&dir, "b.toml", "include = [\"a.toml\", \"b.toml\"]\n[[recipe]]\nid = \"b\"\n");

        let set = load_recipe_set(&entry).unwrap();
        assert_eq!(ids(&set), vec!["a", "b"]);
        assert_eq!(set.files.len(), 2);
    }

    #[test]
    fn test_missing_include() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.toml", "include = [\"gone.toml\"]\n");

        let result = load_recipe_set(&entry);
        assert!(matches!(result, Err(Error::IncludeNotFound(_))));
    }

    #[test]
    fn test_warnings_are_prefixed_with_file() {
        let dir = TempDir::new().unwrap();
        let entry = write(&dir, "main.toml", "include = [\"empty.toml\"]\n");
        write(&dir, "empty.toml", "");

        let set = load_recipe_set(&entry).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.warnings.len(), 1);
        assert!(set.warnings[0].contains("empty.toml"));
    }
}
