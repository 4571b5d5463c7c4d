// src/recipe/mod.rs

//! Recipe definitions and recipe files
//!
//! A recipe is a named unit of provisioning work that declares, by
//! identifier, the other recipes it depends on. Recipes live in TOML recipe
//! files which may pull in further files through `include`.
//!
//! This module only reads and gathers definitions. Checking that a set of
//! recipes forms valid dependency trees is the job of [`crate::forest`].
//!
//! # Example Recipe File
//!
//! ```toml
//! include = ["toolchain.toml"]
//!
//! [[recipe]]
//! id = "nginx"
//! dependencies = ["openssl", "pcre"]
//!
//! [[recipe]]
//! id = "pcre"
//! ```

mod format;
mod loader;
pub mod parser;

pub use format::RecipeFile;
pub use loader::{load_recipe_set, RecipeSet};
pub use parser::{parse_recipe_file, parse_recipe_file_str, validate_recipe_file};

use serde::{Deserialize, Serialize};

/// A single recipe as declared in a recipe file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier, unique within one validation run
    pub id: String,

    /// Identifiers of the recipes this one depends on, in declared order
    ///
    /// May be empty and may repeat an identifier.
    #[serde(default, alias = "requires")]
    pub dependencies: Vec<String>,
}

impl Recipe {
    /// Create a recipe with its dependencies
    pub fn new(id: impl Into<String>, dependencies: &[&str]) -> Self {
        Self {
            id: id.into(),
            dependencies: dependencies.iter().map(|dep| dep.to_string()).collect(),
        }
    }

    /// Create a recipe with no dependencies
    pub fn leaf(id: impl Into<String>) -> Self {
        Self::new(id, &[])
    }

    /// Check whether this recipe declares `id` as a dependency
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == id)
    }
}
