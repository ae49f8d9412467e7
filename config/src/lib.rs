//! # Config Crate
//!
//! Centralized configuration constants for the shadow cube pipeline.
//! Grid bounds, geometry defaults, tolerances and file naming live here so
//! that the grid, mesh, CSG and export crates agree on every literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CELL_SIZE, DEFAULT_POCKET_DEPTH, MIN_GRID_SIZE};
//!
//! // Column height of the smallest cube built with default cells
//! let height = MIN_GRID_SIZE as f64 * DEFAULT_CELL_SIZE;
//! assert_eq!(height, 24.0);
//!
//! // Default pockets leave a membrane in the middle of the column
//! let pocket = DEFAULT_POCKET_DEPTH as f64 * DEFAULT_CELL_SIZE;
//! assert!(2.0 * pocket < height);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Printer Friendly**: Defaults match a 0.4 mm nozzle and 3 mm cells
//! - **OpenSCAD Compatible**: Script output targets the stock `openscad` CLI
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
