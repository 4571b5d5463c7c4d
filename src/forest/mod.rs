// src/forest/mod.rs

//! Recipe set validation and dependency forests
//!
//! Takes a flat list of recipes and either rejects it or links it into a
//! forest of dependency trees. The pipeline runs in fixed order and stops at
//! the first failing stage:
//!
//! 1. Duplicate identifiers ([`validate()`])
//! 2. Undefined dependencies ([`validate()`])
//! 3. Dependency cycles ([`detect_cycle()`])
//! 4. Linking and root extraction ([`build_forest()`])
//!
//! Every call works on its own recipes and keeps no state between calls.
//! Nothing here prints or logs; errors come back as [`ValidationError`].
//!
//! # Example
//!
//! ```
//! use rootball::forest::{generate_forest, render};
//! use rootball::Recipe;
//!
//! let forest = generate_forest(vec![
//!     Recipe::new("nginx", &["openssl"]),
//!     Recipe::new("openssl", &["zlib"]),
//!     Recipe::leaf("zlib"),
//! ])
//! .unwrap();
//!
//! assert_eq!(forest.root_ids(), vec!["nginx"]);
//! assert_eq!(render(&forest), "nginx\n│   └── openssl\n│       └── zlib\n");
//! ```

mod builder;
mod cycle;
mod error;
mod graph;
mod render;
mod validate;

pub use builder::build_forest;
pub use cycle::{detect_cycle, Cycle};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use graph::{Forest, NodeRef, RecipeIndex};
pub use render::{render, render_tree, render_with_style, TreeStyle};
pub use validate::{find_duplicates, find_undefined, validate};

use crate::recipe::Recipe;

/// Validate a recipe set and link it into dependency trees
pub fn generate_forest(recipes: Vec<Recipe>) -> ValidationResult<Forest> {
    let index = validate(&recipes)?;

    if let Some(cycle) = detect_cycle(&recipes, &index) {
        return Err(ValidationError::DependencyCycle(cycle));
    }

    Ok(build_forest(recipes, index))
}
