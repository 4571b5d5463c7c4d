// src/forest/graph.rs

//! Arena holding the recipes of one validation run
//!
//! Recipes may share dependencies, so the linked structure is a DAG rather
//! than a tree. Nodes are owned by a single [`Forest`] and link to each other
//! through positions in that arena, never through ownership.

use crate::recipe::Recipe;
use std::collections::HashMap;
use std::fmt;

/// Lookup from recipe identifier to its position in the input list
///
/// When an identifier occurs more than once the first occurrence wins;
/// validation rejects such sets before the index is used for linking.
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex {
    positions: HashMap<String, usize>,
}

impl RecipeIndex {
    /// Build the index for a recipe list
    pub fn new(recipes: &[Recipe]) -> Self {
        let mut positions = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            positions.entry(recipe.id.clone()).or_insert(position);
        }
        Self { positions }
    }

    /// Position of the recipe with this identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Check if a recipe with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }
}

/// A recipe together with its resolved links
#[derive(Debug, Clone)]
pub(crate) struct RecipeNode {
    pub(crate) recipe: Recipe,
    /// Positions of the recipes named by `recipe.dependencies`, same order
    pub(crate) requires: Vec<usize>,
    /// Positions of the recipes that depend on this one, in input order
    pub(crate) required_by: Vec<usize>,
    pub(crate) is_requisite: bool,
}

impl RecipeNode {
    pub(crate) fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            requires: Vec::new(),
            required_by: Vec::new(),
            is_requisite: false,
        }
    }
}

/// A validated, acyclic recipe set linked into dependency trees
///
/// Produced by [`super::generate_forest`]. Roots are the recipes no other
/// recipe depends on, kept in input order.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<RecipeNode>,
    roots: Vec<usize>,
    index: RecipeIndex,
}

impl Forest {
    pub(crate) fn from_parts(nodes: Vec<RecipeNode>, roots: Vec<usize>, index: RecipeIndex) -> Self {
        Self { nodes, roots, index }
    }

    /// Number of recipes in the forest
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the forest holds no recipes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of dependency trees
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// The root of every dependency tree, in input order
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().map(move |&position| self.node(position))
    }

    /// Identifiers of the roots, in input order
    pub fn root_ids(&self) -> Vec<&str> {
        self.roots().map(|root| root.id()).collect()
    }

    /// Every recipe in the forest, in input order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |position| self.node(position))
    }

    /// Look up any recipe, root or not, by identifier
    pub fn get(&self, id: &str) -> Option<NodeRef<'_>> {
        self.index.position(id).map(|position| self.node(position))
    }

    fn node(&self, position: usize) -> NodeRef<'_> {
        NodeRef {
            forest: self,
            position,
        }
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render(self))
    }
}

/// Borrowed view of one recipe inside a [`Forest`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    forest: &'a Forest,
    position: usize,
}

impl<'a> NodeRef<'a> {
    fn inner(&self) -> &'a RecipeNode {
        let forest = self.forest;
        &forest.nodes[self.position]
    }

    /// The recipe identifier
    pub fn id(&self) -> &'a str {
        &self.inner().recipe.id
    }

    /// The recipe as it was supplied
    pub fn recipe(&self) -> &'a Recipe {
        &self.inner().recipe
    }

    /// Linked dependencies, in declared order (repeats included)
    pub fn dependencies(
        self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let forest = self.forest;
        self.inner()
            .requires
            .iter()
            .map(move |&position| NodeRef { forest, position })
    }

    /// Recipes that list this one as a dependency, in input order
    pub fn dependents(
        self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let forest = self.forest;
        self.inner()
            .required_by
            .iter()
            .map(move |&position| NodeRef { forest, position })
    }

    /// True if at least one other recipe depends on this one
    pub fn is_requisite(&self) -> bool {
        self.inner().is_requisite
    }

    /// True if nothing depends on this recipe
    pub fn is_root(&self) -> bool {
        !self.is_requisite()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({})", self.id())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.forest, other.forest) && self.position == other.position
    }
}

impl Eq for NodeRef<'_> {}
