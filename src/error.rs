// src/error.rs

//! Error types for loading and checking recipe sets

use crate::forest::ValidationError;
use thiserror::Error;

/// Errors raised while gathering and checking recipes
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a recipe file or resolving its path failed
    #[error("I/O error: {0}")]
    IoError(String),

    /// A recipe file is malformed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An included recipe file does not exist
    #[error("Included recipe file not found: {0}")]
    IncludeNotFound(String),

    /// The gathered recipe set failed structural validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for recipe operations
pub type Result<T> = std::result::Result<T, Error>;
