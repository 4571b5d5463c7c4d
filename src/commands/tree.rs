// src/commands/tree.rs

//! Dependency tree visualization

use super::{forest_or_report, load_recipes};
use anyhow::{anyhow, Result};
use rootball::forest::{render_tree, render_with_style};
use rootball::TreeStyle;
use tracing::info;

/// Show the dependency trees of a recipe file
///
/// Prints every root's tree, or only the tree below `root` when given.
/// `root` may name any recipe, not just a root.
pub fn cmd_tree(recipe_path: &str, style: TreeStyle, root: Option<&str>) -> Result<()> {
    info!("Building dependency trees for: {}", recipe_path);
    let set = load_recipes(recipe_path)?;
    let forest = forest_or_report(set, style)?;

    match root {
        Some(id) => {
            let node = forest
                .get(id)
                .ok_or_else(|| anyhow!("Recipe '{}' is not defined", id))?;
            println!("{}", render_tree(node, style));
        }
        None => print!("{}", render_with_style(&forest, style)),
    }

    println!();
    println!("{} recipe(s), {} tree(s)", forest.len(), forest.root_count());
    Ok(())
}
