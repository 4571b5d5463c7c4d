// src/commands/check.rs

//! Check command - validate a recipe file and its includes

use super::{forest_or_report, load_recipes};
use anyhow::Result;
use rootball::TreeStyle;
use tracing::info;

/// Check recipes for duplicate identifiers, undefined dependencies and cycles
///
/// # Arguments
/// * `recipe_path` - Path to the entry recipe file
/// * `style` - How to draw a reported cycle
pub fn cmd_check(recipe_path: &str, style: TreeStyle) -> Result<()> {
    info!("Checking recipes: {}", recipe_path);
    let set = load_recipes(recipe_path)?;
    let file_count = set.files.len();

    let forest = forest_or_report(set, style)?;

    println!(
        "[OK] {} recipe(s) from {} file(s), {} root(s)",
        forest.len(),
        file_count,
        forest.root_count()
    );
    Ok(())
}
