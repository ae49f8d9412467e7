//! # Shadow Cube CLI
//!
//! Drivers around the geometry crates: read a `.grid` project, build the
//! view meshes or the CSG script, and write them to disk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use config::constants::GlobalConfig;
//! use shadow_cli::{export_stl, load_project, StlFormat};
//! use shadow_grid::GeometryParameters;
//!
//! let project = load_project(Path::new("heart.grid")).unwrap();
//! let written = export_stl(
//!     &project,
//!     &GeometryParameters::default(),
//!     Path::new("out"),
//!     StlFormat::Binary,
//!     &GlobalConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(written.len(), 3);
//! ```

pub mod error;
pub mod export;
pub mod stl;

pub use error::{ExportError, ExportResult};
pub use export::{export_scad, export_stl, load_params, load_project, run_openscad, save_project};
pub use stl::{save_stl, write_stl_ascii, write_stl_binary, StlFormat};
