// src/commands/mod.rs
//! Command handlers for the rootball CLI

mod check;
mod tree;

pub use check::cmd_check;
pub use tree::cmd_tree;

use anyhow::{Context, Result};
use rootball::{
    generate_forest, load_recipe_set, Error, Forest, RecipeSet, TreeStyle, ValidationError,
};
use std::path::Path;
use tracing::{debug, warn};

/// Pick the drawing style from the `--ascii` flag
pub fn tree_style(ascii: bool) -> TreeStyle {
    if ascii {
        TreeStyle::Ascii
    } else {
        TreeStyle::Unicode
    }
}

/// Load an entry recipe file with its includes and print any warnings
fn load_recipes(recipe_path: &str) -> Result<RecipeSet> {
    let path = Path::new(recipe_path);
    let set = load_recipe_set(path)
        .with_context(|| format!("Failed to load recipes: {}", path.display()))?;

    for warning in &set.warnings {
        println!("Warning: {}", warning);
    }

    Ok(set)
}

/// Validate a gathered recipe set, printing every problem if it fails
fn forest_or_report(set: RecipeSet, style: TreeStyle) -> Result<Forest> {
    debug!("Validating {} recipe(s)", set.len());

    match generate_forest(set.recipes) {
        Ok(forest) => Ok(forest),
        Err(err) => {
            warn!("Recipe validation failed: {}", err.kind());
            report_validation_error(&err, style);
            let kind = err.kind();
            Err(Error::from(err)).with_context(|| format!("Recipe validation failed: {}", kind))
        }
    }
}

/// Print one line per offending identifier, and the loop for cycles
fn report_validation_error(err: &ValidationError, style: TreeStyle) {
    for message in err.messages() {
        println!("Error: {}", message);
    }

    if let ValidationError::DependencyCycle(cycle) = err {
        println!();
        println!("{}", cycle.render(style));
    }
}
