// src/recipe/format.rs

//! Recipe file format definitions

use super::Recipe;
use serde::{Deserialize, Serialize};

/// One recipe file: a list of recipes plus the files it includes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFile {
    /// Other recipe files to pull in, relative to this file's directory
    #[serde(default)]
    pub include: Vec<String>,

    /// Recipes defined in this file, in declared order
    #[serde(default, rename = "recipe")]
    pub recipes: Vec<Recipe>,
}

impl RecipeFile {
    /// Check if this file includes other recipe files
    pub fn has_includes(&self) -> bool {
        !self.include.is_empty()
    }

    /// Check if this file defines nothing at all
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.recipes.is_empty()
    }

    /// Identifiers of the recipes defined in this file
    pub fn recipe_ids(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.id.as_str()).collect()
    }
}
