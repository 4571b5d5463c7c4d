// src/forest/render.rs

//! Dependency tree rendering
//!
//! Each root is drawn as its own tree, with dependencies nested below their
//! dependents. A recipe shared by several parents is drawn under each of
//! them. Output depends only on the forest, so identical forests always
//! render to identical text.
//!
//! A line at depth d carries d indent units before its connector. The first
//! unit is the root's trunk, each later one is `│   ` below an ancestor with
//! later siblings and blank otherwise.
//!
//! ```text
//! nginx
//! │   ├── openssl
//! │   │   └── zlib
//! │   └── pcre
//!
//! sshd
//! │   └── openssl
//! │       └── zlib
//! ```

use super::graph::{Forest, NodeRef};

/// Characters used to draw tree branches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeStyle {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII, for terminals and logs that mangle box drawing
    Ascii,
}

impl TreeStyle {
    /// Connector for a child with later siblings
    pub fn branch(self) -> &'static str {
        match self {
            Self::Unicode => "├── ",
            Self::Ascii => "|-- ",
        }
    }

    /// Connector for the last child of a node
    pub fn last_branch(self) -> &'static str {
        match self {
            Self::Unicode => "└── ",
            Self::Ascii => "`-- ",
        }
    }

    /// Indent unit below an ancestor that has later siblings
    pub fn pipe(self) -> &'static str {
        match self {
            Self::Unicode => "│   ",
            Self::Ascii => "|   ",
        }
    }

    /// Indent unit below an ancestor that was the last child
    pub fn blank(self) -> &'static str {
        "    "
    }

    /// Marker on the first line of a drawn dependency cycle
    pub fn loop_open(self) -> &'static str {
        match self {
            Self::Unicode => "┌─> ",
            Self::Ascii => "+-> ",
        }
    }
}

/// Render every tree of the forest with the default style
pub fn render(forest: &Forest) -> String {
    render_with_style(forest, TreeStyle::default())
}

/// Render every tree of the forest
///
/// Trees are separated by a blank line and the output ends with a newline.
/// An empty forest renders as an empty string.
pub fn render_with_style(forest: &Forest, style: TreeStyle) -> String {
    let trees: Vec<String> = forest.roots().map(|root| render_tree(root, style)).collect();
    if trees.is_empty() {
        return String::new();
    }

    let mut output = trees.join("\n\n");
    output.push('\n');
    output
}

/// Render the tree below a single recipe, without a trailing newline
pub fn render_tree(node: NodeRef<'_>, style: TreeStyle) -> String {
    let mut lines = vec![node.id().to_string()];
    // Indent units for the line being drawn, one per ancestor
    let mut units = vec![style.pipe()];
    let mut pending = Vec::new();
    push_children(node, 1, &mut pending);

    while let Some((child, depth, is_last)) = pending.pop() {
        units.truncate(depth);
        let connector = if is_last { style.last_branch() } else { style.branch() };
        lines.push(format!("{}{}{}", units.concat(), connector, child.id()));

        units.push(if is_last { style.blank() } else { style.pipe() });
        push_children(child, depth + 1, &mut pending);
    }

    lines.join("\n")
}

/// Queue the children of `node` so they pop off in declared order
fn push_children<'a>(node: NodeRef<'a>, depth: usize, pending: &mut Vec<(NodeRef<'a>, usize, bool)>) {
    let count = node.dependencies().len();
    for (i, child) in node.dependencies().enumerate().rev() {
        pending.push((child, depth, i + 1 == count));
    }
}
