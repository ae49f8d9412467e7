//! # Mesh Errors
//!
//! Error types for mesh generation.

use shadow_grid::{GridError, View};
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Grid or parameter validation failed before any geometry was built.
    #[error("{0}")]
    Grid(#[from] GridError),

    /// An internal invariant was violated while stitching cells together.
    ///
    /// Unreachable for validated input; the whole build is abandoned.
    #[error("Synthesis failure in {view} view: {message}")]
    SynthesisFailure { view: View, message: String },
}

impl MeshError {
    /// Creates a synthesis failure error.
    pub fn synthesis(view: View, message: impl Into<String>) -> Self {
        Self::SynthesisFailure {
            view,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_is_transparent() {
        let err: MeshError = GridError::invalid_parameter("size", "too small").into();
        assert_eq!(err.to_string(), "Invalid parameter `size`: too small");
    }

    #[test]
    fn test_synthesis_names_view() {
        let err = MeshError::synthesis(View::Side, "triangle 4 references vertex 99");
        assert!(err.to_string().starts_with("Synthesis failure in Side view"));
    }
}
