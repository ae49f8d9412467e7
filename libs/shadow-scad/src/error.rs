//! # Scad Errors
//!
//! Error types for CSG tree construction and inspection.

use shadow_grid::{GridError, View};
use thiserror::Error;

/// Errors that can occur while building or reading a CSG tree.
#[derive(Debug, Error)]
pub enum ScadError {
    /// Grid or parameter validation failed before the tree was built.
    #[error("{0}")]
    Grid(#[from] GridError),

    /// A tree does not have the shape of a shadow cube model.
    #[error("Malformed CSG tree for {view} view: {message}")]
    MalformedTree { view: View, message: String },
}

impl ScadError {
    /// Creates a malformed tree error.
    pub fn malformed(view: View, message: impl Into<String>) -> Self {
        Self::MalformedTree {
            view,
            message: message.into(),
        }
    }
}
