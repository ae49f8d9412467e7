//! # Shadow Scad
//!
//! Constructive solid geometry description of a shadow cube, printed as an
//! OpenSCAD script for an external renderer.
//!
//! ## Architecture
//!
//! ```text
//! ShadowProject + GeometryParameters
//!       ↓ validate
//! view_holes (pocket pairs, through-holes per view)
//!       ↓ cube_side, nested translate/rotate
//! CsgNode tree → print_scad → OpenSCAD source
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shadow_grid::{GeometryParameters, ShadowProject};
//! use shadow_scad::build_scad;
//!
//! let project = ShadowProject::new(8).unwrap();
//! let model = build_scad(&project, &GeometryParameters::default()).unwrap();
//! assert!(model.to_scad().starts_with("difference() {"));
//! ```

pub mod builder;
pub mod error;
pub mod extract;
pub mod node;
pub mod printer;

pub use builder::{build_scad, cube_side, pocket, through_hole, view_holes, ScadModel};
pub use error::ScadError;
pub use extract::cavity_map;
pub use node::CsgNode;
pub use printer::print_scad;
