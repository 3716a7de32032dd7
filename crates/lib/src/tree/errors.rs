//! Error types for tree container operations.
//!
//! This module defines structured error types for the dot-notation container,
//! covering argument preconditions, positional bounds, and anchor resolution
//! failures for the relative-insert operations.

use thiserror::Error;

/// Structured error types for tree operations.
///
/// Two logical kinds of failure exist: parameters that fail a precondition
/// (invalid path, invalid argument, type mismatch) and anchors that cannot be
/// resolved (positions outside the container, missing keys or values). All of
/// them are local failures surfaced immediately to the caller; a failed
/// mutating call leaves the container unmodified.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A path failed validation (e.g. it normalized to the empty path where a
    /// concrete key is required)
    #[error("Invalid tree path: {path}")]
    InvalidPath { path: String },

    /// A parameter failed a shape precondition
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A positional insert's magnitude exceeds the current element count
    #[error("Position {position} out of range for {len} element(s)")]
    OutOfRange { position: isize, len: usize },

    /// A key anchor could not be located
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// A value anchor could not be located
    #[error("Anchor value not found in tree")]
    ValueNotFound,

    /// Type mismatch when extracting a typed value
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl TreeError {
    /// Check if this error is related to a missing key or value anchor
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::KeyNotFound { .. } | TreeError::ValueNotFound
        )
    }

    /// Check if this error is related to positional bounds
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TreeError::OutOfRange { .. })
    }

    /// Check if this error is related to argument preconditions
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TreeError::InvalidPath { .. }
                | TreeError::InvalidArgument { .. }
                | TreeError::TypeMismatch { .. }
        )
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            TreeError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
