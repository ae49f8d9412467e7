//! Error types for project loading and export.

use std::path::PathBuf;

use shadow_grid::GridError;
use shadow_mesh::MeshError;
use shadow_scad::ScadError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while reading projects or writing exports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file is not valid JSON for the expected shape.
    #[error("invalid parameter file: {0}")]
    Json(#[from] serde_json::Error),

    /// The project or its parameters failed validation.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A view mesh could not be built.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The CSG tree could not be built.
    #[error(transparent)]
    Scad(#[from] ScadError),

    /// The mesh has more triangles than an STL file can count.
    #[error("mesh has too many triangles for STL: {count}")]
    TooManyTriangles {
        /// Number of triangles in the mesh.
        count: usize,
    },

    /// The OpenSCAD binary could not be started.
    #[error("OpenSCAD binary not found: {binary}")]
    MissingBinary {
        /// Binary that was looked up.
        binary: PathBuf,
    },

    /// OpenSCAD ran but reported failure.
    #[error("OpenSCAD failed with {status}: {stderr}")]
    OpenScadFailed {
        /// Exit status as reported by the process.
        status: String,
        /// Captured standard error.
        stderr: String,
    },
}
