// src/forest/error.rs

//! Structured validation errors
//!
//! Errors carry the offending identifiers rather than preformatted text, so
//! the caller decides how to present them.

use super::cycle::Cycle;
use std::fmt;
use thiserror::Error;

/// Result type for forest generation
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Why a recipe set was rejected
///
/// Every variant is fatal to the call that produced it; no forest is built
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Identifiers defined more than once, each listed once in the order
    /// their duplication was first seen
    #[error("Recipe identifier is not unique: {}", .0.join(", "))]
    DuplicateIdentifier(Vec<String>),

    /// Dependency identifiers with no matching recipe, in declaration order
    /// (the same identifier repeats if several recipes reference it)
    #[error("Recipe identifier is required but not defined: {}", .0.join(", "))]
    UndefinedDependency(Vec<String>),

    /// The first cycle found by the declared-order depth-first search
    #[error("Found a dependency cycle: {0}")]
    DependencyCycle(Cycle),
}

/// The kind of a [`ValidationError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateIdentifier,
    UndefinedDependency,
    DependencyCycle,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DuplicateIdentifier => "duplicate identifier",
            Self::UndefinedDependency => "undefined dependency",
            Self::DependencyCycle => "dependency cycle",
        };
        f.write_str(name)
    }
}

impl ValidationError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateIdentifier(_) => ErrorKind::DuplicateIdentifier,
            Self::UndefinedDependency(_) => ErrorKind::UndefinedDependency,
            Self::DependencyCycle(_) => ErrorKind::DependencyCycle,
        }
    }

    /// The identifiers this error is about
    ///
    /// For a cycle this is the closed path, starting and ending on the same
    /// identifier.
    pub fn identifiers(&self) -> &[String] {
        match self {
            Self::DuplicateIdentifier(ids) | Self::UndefinedDependency(ids) => ids,
            Self::DependencyCycle(cycle) => cycle.path(),
        }
    }

    /// One human-readable line per offending identifier
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::DuplicateIdentifier(ids) => ids
                .iter()
                .map(|id| format!("Recipe identifier is not unique: {}", id))
                .collect(),
            Self::UndefinedDependency(ids) => ids
                .iter()
                .map(|id| format!("Recipe identifier is required but not defined: {}", id))
                .collect(),
            Self::DependencyCycle(cycle) => vec![format!("Found a dependency cycle: {}", cycle)],
        }
    }
}
