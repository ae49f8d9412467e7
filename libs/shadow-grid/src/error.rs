//! # Grid Errors
//!
//! Validation errors raised before any geometry is generated.

use thiserror::Error;

use crate::view::View;

/// Errors that can occur while validating grids and geometry parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A numeric parameter is out of its accepted range.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    /// The grids do not form a valid square, same-sized set.
    #[error("Inconsistent grid: {message}")]
    InconsistentGrid {
        message: String,
        view: Option<View>,
    },

    /// A project file could not be decoded.
    #[error("Malformed project: {0}")]
    MalformedProject(String),
}

impl GridError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an inconsistent grid error, optionally naming the offending view.
    pub fn inconsistent(message: impl Into<String>, view: Option<View>) -> Self {
        Self::InconsistentGrid {
            message: message.into(),
            view,
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedProject(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::invalid_parameter("cell_size", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `cell_size`: must be positive, got 0"
        );
    }

    #[test]
    fn test_inconsistent_keeps_view() {
        let err = GridError::inconsistent("row 3 has 7 cells", Some(View::Front));
        match err {
            GridError::InconsistentGrid { view, .. } => assert_eq!(view, Some(View::Front)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
