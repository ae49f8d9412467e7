//! # Shadow Grid
//!
//! Grid model and cell classification for shadow cubes: three boolean grids,
//! one per view, that become three intersecting solids.
//!
//! ## Architecture
//!
//! ```text
//! ShadowProject (Top/Front/Side grids) + GeometryParameters
//!       ↓ validate
//! classify(row, col) → CellKind → Cavity
//!       ↓
//! shadow-mesh (triangles) / shadow-scad (CSG script)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shadow_grid::{CellKind, GeometryParameters, ShadowProject, View};
//!
//! let mut project = ShadowProject::new(8).unwrap();
//! project.grid_mut(View::Top).set(4, 4, true);
//!
//! let params = GeometryParameters::default();
//! params.validate(project.size()).unwrap();
//! assert_eq!(project.grid(View::Top).kind(4, 4), CellKind::Filled);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod params;
pub mod project;
pub mod view;

pub use cell::{classify, is_border, Cavity, CellKind};
pub use error::GridError;
pub use grid::Grid;
pub use params::{FillStyle, GeometryParameters};
pub use project::ShadowProject;
pub use view::View;
