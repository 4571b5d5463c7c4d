// src/lib.rs

//! Rootball
//!
//! Validates sets of interdependent provisioning recipes and shapes them into
//! dependency trees before anything tries to run them.
//!
//! # Architecture
//!
//! - `recipe`: recipe definitions, TOML recipe files and include gathering
//! - `forest`: the validation pipeline (duplicates, undefined dependencies,
//!   cycles) and the resulting forest of dependency trees with its renderer
//!
//! The `forest` layer is pure: it takes an already gathered recipe list and
//! returns either a forest or a structured error.

pub mod forest;
pub mod recipe;
mod error;

pub use error::{Error, Result};
pub use forest::{
    generate_forest, render, render_with_style, Cycle, ErrorKind, Forest, NodeRef, TreeStyle,
    ValidationError,
};
pub use recipe::{load_recipe_set, Recipe, RecipeFile, RecipeSet};
