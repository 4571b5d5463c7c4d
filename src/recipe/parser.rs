// src/recipe/parser.rs

//! Recipe file parsing

use crate::error::{Error, Result};
use crate::recipe::format::RecipeFile;
use std::collections::HashSet;
use std::path::Path;

/// Parse a recipe file from a TOML string
pub fn parse_recipe_file_str(content: &str) -> Result<RecipeFile> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe file: {}", e)))
}

/// Parse a recipe file from disk
pub fn parse_recipe_file(path: &Path) -> Result<RecipeFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!("Failed to read recipe file {}: {}", path.display(), e))
    })?;

    parse_recipe_file_str(&content)
}

/// Sanity-check a single recipe file
///
/// Only looks at the file on its own. Duplicate identifiers, undefined
/// dependencies and cycles span files and are caught by
/// [`crate::forest::generate_forest`].
///
/// Returns warnings for suspicious but harmless content.
pub fn validate_recipe_file(file: &RecipeFile) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    for include in &file.include {
        if include.trim().is_empty() {
            return Err(Error::ParseError("Include path cannot be empty".to_string()));
        }
    }

    for recipe in &file.recipes {
        if recipe.id.trim().is_empty() {
            return Err(Error::ParseError("Recipe identifier cannot be empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut repeated = HashSet::new();
        for dep in &recipe.dependencies {
            if dep.trim().is_empty() {
                return Err(Error::ParseError(format!(
                    "Recipe {} has an empty dependency identifier",
                    recipe.id
                )));
            }
            if !seen.insert(dep.as_str()) && repeated.insert(dep.as_str()) {
                warnings.push(format!(
                    "Recipe {} lists dependency {} more than once",
                    recipe.id, dep
                ));
            }
        }
    }

    if file.is_empty() {
        warnings.push("Recipe file defines no recipes and no includes".to_string());
    }

    Ok(warnings)
}
