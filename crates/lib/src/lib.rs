//!
//! Acorn: dot-notation value trees and common helper utilities.
//!
//! ## Core Concepts
//!
//! Acorn is built around a small set of independent units:
//!
//! * **Trees (`tree::Tree`)**: An insertion-ordered, nested key-value container
//!   addressed with dot-notation paths (`"user.profile.name"`). Trees support
//!   path-based get/set/remove, flattening to a single level, recursive merge,
//!   and positional insertion relative to existing keys or values.
//! * **Values (`tree::Value`)**: The closed set of node types a tree can hold:
//!   scalars (null, bool, int, float, text), ordered sequences
//!   (`tree::List`), and nested maps (`tree::Tree` again).
//! * **Paths (`tree::Path` / `tree::PathBuf`)**: Dot-notation keys following
//!   the borrowed/owned split of `std::path`.
//! * **Text helpers (`text`)**: Case conversion (studly/camel/separated),
//!   substring predicates, and random string generation.
//! * **Numeric helpers (`num`)**: Range tests with open/closed limits.
//! * **Registries (`registry::Registry`)**: Explicit keyed instance stores,
//!   passed by the caller instead of hiding behind process-wide statics.
//!
//! All operations are synchronous and in-memory; the library holds no global
//! state and spawns no threads.

pub mod num;
pub mod registry;
pub mod text;
pub mod tree;

/// Re-export the container types for easier access.
pub use tree::{List, Tree, Value};

/// Result type used throughout the Acorn library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Acorn library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured string-helper errors from the text module
    #[error(transparent)]
    Text(text::TextError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Tree(_) => "tree",
            Error::Text(_) => "text",
        }
    }

    /// Check if this error indicates a key, value, or path that was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a positional argument outside the
    /// container's bounds.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error indicates a parameter that failed a precondition.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_invalid_argument(),
            Error::Text(_) => true,
            _ => false,
        }
    }
}
