// src/forest/validate.rs

//! Structural checks: duplicate identifiers and undefined dependencies

use super::error::{ValidationError, ValidationResult};
use super::graph::RecipeIndex;
use crate::recipe::Recipe;
use std::collections::HashSet;

/// Identifiers that occur more than once
///
/// Each identifier is reported once, in the order its second occurrence
/// appears in the input.
pub fn find_duplicates(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for recipe in recipes {
        let id = recipe.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(recipe.id.clone());
        }
    }

    duplicates
}

/// Dependency identifiers that name no recipe in the set
///
/// Listed in declaration order; an identifier referenced from several places
/// is listed for each reference.
pub fn find_undefined(recipes: &[Recipe], index: &RecipeIndex) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.dependencies.iter())
        .filter(|dep| !index.contains(dep))
        .cloned()
        .collect()
}

/// Run both structural checks, duplicates first
///
/// Returns the identifier index on success so later stages can reuse it.
pub fn validate(recipes: &[Recipe]) -> ValidationResult<RecipeIndex> {
    let duplicates = find_duplicates(recipes);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateIdentifier(duplicates));
    }

    let index = RecipeIndex::new(recipes);
    let undefined = find_undefined(recipes, &index);
    if !undefined.is_empty() {
        return Err(ValidationError::UndefinedDependency(undefined));
    }

    Ok(index)
}
