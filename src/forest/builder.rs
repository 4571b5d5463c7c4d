// src/forest/builder.rs

//! Linking a validated recipe set into a forest

use super::graph::{Forest, RecipeIndex, RecipeNode};
use crate::recipe::Recipe;

/// Link every recipe to its dependencies and collect the roots
///
/// Expects a set that already passed [`super::validate()`] and
/// [`super::detect_cycle()`]; `index` must be the index built for `recipes`.
/// Roots keep their input order.
pub fn build_forest(recipes: Vec<Recipe>, index: RecipeIndex) -> Forest {
    let mut nodes: Vec<RecipeNode> = recipes.into_iter().map(RecipeNode::new).collect();

    for parent in 0..nodes.len() {
        let requires: Vec<usize> = nodes[parent]
            .recipe
            .dependencies
            .iter()
            .filter_map(|dep| index.position(dep))
            .collect();

        for &child in &requires {
            let node = &mut nodes[child];
            node.is_requisite = true;
            // Parents are visited in order, so a repeated dependency shows up
            // as the same parent twice in a row
            if node.required_by.last() != Some(&parent) {
                node.required_by.push(parent);
            }
        }

        nodes[parent].requires = requires;
    }

    let roots = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| !node.is_requisite)
        .map(|(position, _)| position)
        .collect();

    Forest::from_parts(nodes, roots, index)
}
