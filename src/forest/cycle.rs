// src/forest/cycle.rs

//! Dependency cycle detection
//!
//! Depth-first search with an explicit per-recipe visit state:
//!
//! - `Unvisited`: not reached yet
//! - `OnStack`: on the path currently being explored
//! - `Settled`: fully explored, cannot reach a cycle
//!
//! Reaching an `OnStack` recipe again closes a loop. The loop is read off the
//! current search path, so reconstructing it costs only its own length.
//!
//! Recipes are started in input order and dependencies are followed in
//! declared order. When a graph holds several cycles, the one reported is the
//! first one this search runs into, and it is the same one on every run over
//! the same input.

use super::graph::RecipeIndex;
use super::render::TreeStyle;
use crate::recipe::Recipe;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    OnStack,
    Settled,
}

/// A closed chain of dependency edges
///
/// The path starts and ends on the same identifier, so `a -> b -> a` is
/// stored as `["a", "b", "a"]` and a recipe depending on itself as
/// `["a", "a"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    path: Vec<String>,
}

impl Cycle {
    /// Wrap an already closed path
    pub fn from_path(path: Vec<String>) -> Self {
        Self { path }
    }

    /// The closed path, first and last entries equal
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Number of edges in the loop (a self-dependency has length 1)
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Check if the cycle has no edges
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The identifier the loop opens and closes on
    pub fn start(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    /// Each edge of the loop as `(dependent, dependency)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Take the path out of the cycle
    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    /// Draw the loop, one identifier per line
    ///
    /// ```text
    /// ┌─> gcc
    /// │   glibc
    /// └── gcc
    /// ```
    pub fn render(&self, style: TreeStyle) -> String {
        let last = self.path.len().saturating_sub(1);
        let mut lines = Vec::with_capacity(self.path.len());

        for (i, id) in self.path.iter().enumerate() {
            let marker = if i == 0 {
                style.loop_open()
            } else if i == last {
                style.last_branch()
            } else {
                style.pipe()
            };
            lines.push(format!("{}{}", marker, id));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join(" -> "))
    }
}

/// Find the first dependency cycle, if any
///
/// Dependency identifiers missing from `index` are skipped; run
/// [`super::validate()`] first to rule them out.
pub fn detect_cycle(recipes: &[Recipe], index: &RecipeIndex) -> Option<Cycle> {
    let mut search = CycleSearch::new(recipes, index);

    for position in 0..recipes.len() {
        if search.state[position] == Visit::Settled {
            continue;
        }
        if let Some(cycle) = search.visit(position) {
            return Some(cycle);
        }
    }

    None
}

/// State of one depth-first search over a recipe list
struct CycleSearch<'a> {
    recipes: &'a [Recipe],
    index: &'a RecipeIndex,
    state: Vec<Visit>,
    /// The current search path, outermost first, as
    /// `(position, index of the next dependency to follow)`
    path: Vec<(usize, usize)>,
}

impl<'a> CycleSearch<'a> {
    fn new(recipes: &'a [Recipe], index: &'a RecipeIndex) -> Self {
        Self {
            recipes,
            index,
            state: vec![Visit::Unvisited; recipes.len()],
            path: Vec::new(),
        }
    }

    /// Search everything reachable from an unvisited recipe
    ///
    /// Runs on an explicit stack, so chains of any length stay off the call
    /// stack.
    fn visit(&mut self, start: usize) -> Option<Cycle> {
        let recipes = self.recipes;
        let index = self.index;
        self.enter(start);

        while let Some((position, next)) = self.path.last_mut() {
            let position = *position;
            let Some(dep) = recipes[position].dependencies.get(*next) else {
                self.path.pop();
                self.state[position] = Visit::Settled;
                continue;
            };
            *next += 1;

            let Some(dep) = index.position(dep) else {
                continue;
            };

            match self.state[dep] {
                Visit::Settled => {}
                Visit::OnStack => return Some(self.close_loop(dep)),
                Visit::Unvisited => self.enter(dep),
            }
        }

        None
    }

    fn enter(&mut self, position: usize) {
        self.state[position] = Visit::OnStack;
        self.path.push((position, 0));
    }

    /// Build the loop from `position`'s place on the path back round to it
    fn close_loop(&self, position: usize) -> Cycle {
        let start = self
            .path
            .iter()
            .position(|&(p, _)| p == position)
            .unwrap_or_default();

        let mut path: Vec<String> = self.path[start..]
            .iter()
            .map(|&(p, _)| self.recipes[p].id.clone())
            .collect();
        path.push(self.recipes[position].id.clone());

        Cycle::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(recipes: &[Recipe]) -> Option<Cycle> {
        let index = RecipeIndex::new(recipes);
        detect_cycle(recipes, &index)
    }

    /// Every edge of the reported loop must be a declared dependency
    fn assert_closed(recipes: &[Recipe], cycle: &Cycle) {
        assert_eq!(cycle.path().first(), cycle.path().last());
        for (from, to) in cycle.edges() {
            let recipe = recipes.iter().find(|r| r.id == from).unwrap();
            assert!(recipe.depends_on(to), "{} does not depend on {}", from, to);
        }
    }

    #[test]
    fn test_empty_has_no_cycle() {
        assert!(find(&[]).is_none());
    }

    #[test]
    fn test_acyclic() {
        let recipes = vec![
            Recipe::new("d", &["b", "c"]),
            Recipe::new("b", &["a"]),
            Recipe::new("c", &["a"]),
            Recipe::leaf("a"),
        ];
        assert!(find(&recipes).is_none());
    }

    #[test]
    fn test_two_node_cycle() {
        let recipes = vec![Recipe::new("a", &["b"]), Recipe::new("b", &["a"])];
        let cycle = find(&recipes).unwrap();

        assert_eq!(cycle.path(), ["a", "b", "a"]);
        assert_eq!(cycle.len(), 2);
        assert_eq!(cycle.start(), "a");
        assert_closed(&recipes, &cycle);
    }

    #[test]
    fn test_self_cycle() {
        let recipes = vec![Recipe::new("a", &["a"])];
        let cycle = find(&recipes).unwrap();

        assert_eq!(cycle.path(), ["a", "a"]);
        assert_eq!(cycle.len(), 1);
    }

    #[test]
    fn test_cycle_below_acyclic_prefix() {
        // top -> x -> y -> z -> x; the loop excludes "top"
        let recipes = vec![
            Recipe::new("top", &["leaf", "x"]),
            Recipe::leaf("leaf"),
            Recipe::new("x", &["y"]),
            Recipe::new("y", &["z"]),
            Recipe::new("z", &["x"]),
        ];
        let cycle = find(&recipes).unwrap();

        assert_eq!(cycle.path(), ["x", "y", "z", "x"]);
        assert_closed(&recipes, &cycle);
    }

    #[test]
    fn test_first_cycle_in_declared_order() {
        // Two independent loops; "a" is searched first so its loop wins
        let recipes = vec![
            Recipe::new("a", &["b"]),
            Recipe::new("b", &["a"]),
            Recipe::new("c", &["d"]),
            Recipe::new("d", &["c"]),
        ];
        assert_eq!(find(&recipes).unwrap().path(), ["a", "b", "a"]);

        let reordered = vec![
            Recipe::new("c", &["d"]),
            Recipe::new("d", &["c"]),
            Recipe::new("a", &["b"]),
            Recipe::new("b", &["a"]),
        ];
        assert_eq!(find(&reordered).unwrap().path(), ["c", "d", "c"]);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let recipes = vec![
            Recipe::new("gcc", &["glibc", "binutils"]),
            Recipe::new("glibc", &["gcc", "linux-headers"]),
            Recipe::new("binutils", &["glibc"]),
            Recipe::leaf("linux-headers"),
        ];
        let first = find(&recipes).unwrap();
        for _ in 0..10 {
            assert_eq!(find(&recipes).unwrap(), first);
        }
        assert_eq!(first.path(), ["gcc", "glibc", "gcc"]);
        assert_closed(&recipes, &first);
    }

    #[test]
    fn test_settled_nodes_not_revisited() {
        // Shared dependency reached twice is not a cycle
        let recipes = vec![
            Recipe::new("a", &["shared", "b"]),
            Recipe::new("b", &["shared"]),
            Recipe::leaf("shared"),
        ];
        assert!(find(&recipes).is_none());
    }

    #[test]
    fn test_unknown_dependencies_skipped() {
        let recipes = vec![Recipe::new("a", &["missing"])];
        assert!(find(&recipes).is_none());
    }

    #[test]
    fn test_long_chain_without_cycle() {
        let recipes: Vec<Recipe> = (0..100_000)
            .map(|i| {
                let id = format!("r{}", i);
                if i + 1 < 100_000 {
                    Recipe::new(id, &[format!("r{}", i + 1).as_str()])
                } else {
                    Recipe::leaf(id)
                }
            })
            .collect();
        assert!(find(&recipes).is_none());
    }

    #[test]
    fn test_long_chain_closing_on_itself() {
        let count = 100_000;
        let recipes: Vec<Recipe> = (0..count)
            .map(|i| Recipe::new(format!("r{}", i), &[format!("r{}", (i + 1) % count).as_str()]))
            .collect();
        let cycle = find(&recipes).unwrap();

        assert_eq!(cycle.len(), count);
        assert_eq!(cycle.start(), "r0");
        assert_eq!(cycle.path()[count - 1], format!("r{}", count - 1));
        assert_eq!(cycle.path()[count], "r0");
    }

    #[test]
    fn test_display_and_render() {
        let cycle = Cycle::from_path(vec![
            "gcc".to_string(),
            "glibc".to_string(),
            "gcc".to_string(),
        ]);
        assert_eq!(cycle.to_string(), "gcc -> glibc -> gcc");
        assert_eq!(
            cycle.render(TreeStyle::Unicode),
            "┌─> gcc\n│   glibc\n└── gcc"
        );
        assert_eq!(cycle.render(TreeStyle::Ascii), "+-> gcc\n|   glibc\n`-- gcc");
    }

    #[test]
    fn test_render_self_cycle() {
        let cycle = Cycle::from_path(vec!["a".to_string(), "a".to_string()]);
        assert_eq!(cycle.render(TreeStyle::Unicode), "┌─> a\n└── a");
    }
}
