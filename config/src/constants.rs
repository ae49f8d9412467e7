//! # Configuration Constants
//!
//! Centralized constants for the shadow cube pipeline. Grid limits, geometry
//! defaults, precision values and export naming are defined here.
//!
//! ## Categories
//!
//! - **Grid**: Allowed grid resolutions and the structural border ring
//! - **Geometry**: Default cell size, wall thickness and pocket depth
//! - **Precision**: Floating-point comparison tolerances
//! - **Export**: STL layout and output file naming

use std::fmt;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Smallest grid resolution accepted for a view.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_GRID_SIZE, MAX_GRID_SIZE};
///
/// let requested = 4;
/// let accepted = (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&requested);
/// assert!(!accepted);
/// ```
pub const MIN_GRID_SIZE: usize = 8;

/// Largest grid resolution accepted for a view.
pub const MAX_GRID_SIZE: usize = 64;

/// Grid resolution used when a new project is created.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Width, in cells, of the solid ring around every grid.
///
/// Cells inside this ring never receive cavities, whatever their stored
/// value. A wider margin shaded by an editor is cosmetic only.
///
/// # Example
///
/// ```rust
/// use config::constants::BORDER_RING_WIDTH;
///
/// let size = 8;
/// let interior = size - 2 * BORDER_RING_WIDTH;
/// assert_eq!(interior, 6);
/// ```
pub const BORDER_RING_WIDTH: usize = 1;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default edge length of one grid cell, in millimetres.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE};
///
/// let cube_side = DEFAULT_GRID_SIZE as f64 * DEFAULT_CELL_SIZE;
/// assert_eq!(cube_side, 24.0);
/// ```
pub const DEFAULT_CELL_SIZE: f64 = 3.0;

/// Default wall thickness left around each cavity, in millimetres.
///
/// Matches a single extrusion line of a 0.4 mm nozzle.
pub const DEFAULT_BORDER_THICKNESS: f64 = 0.4;

/// Default pocket depth, counted in cell heights.
pub const DEFAULT_POCKET_DEPTH: u32 = 2;

/// Upper bound on the vertices one cell may contribute.
///
/// A recessed cell needs four loops for the ring caps plus two loops for
/// the pocket floors: six loops of four corners.
pub const MAX_CELL_VERTICES: usize = 24;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance under which two mesh positions are treated as one point.
///
/// Neighbouring cells emit their own copies of shared corners, so topology
/// checks weld positions with this tolerance before counting edges.
pub const WELD_EPSILON: f64 = 1e-6;

/// Relative tolerance for centroid comparisons, multiplied by the cell size.
///
/// # Example
///
/// ```rust
/// use config::constants::{CENTROID_TOLERANCE_FACTOR, DEFAULT_CELL_SIZE};
///
/// let tolerance = CENTROID_TOLERANCE_FACTOR * DEFAULT_CELL_SIZE;
/// assert!(tolerance < 1e-5);
/// ```
pub const CENTROID_TOLERANCE_FACTOR: f64 = 1e-6;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Size of the binary STL header in bytes.
pub const STL_HEADER_SIZE: usize = 80;

/// Size of one binary STL triangle record (normal, 3 vertices, attribute).
pub const STL_TRIANGLE_SIZE: usize = 50;

/// Text written at the start of every binary STL header.
pub const STL_HEADER_TEXT: &str = "Binary STL generated by shadow-cube";

/// File extension of saved projects.
pub const PROJECT_EXTENSION: &str = "grid";

/// File extension of exported meshes.
pub const MESH_EXTENSION: &str = "stl";

/// File extension of generated OpenSCAD scripts.
pub const SCAD_EXTENSION: &str = "scad";

/// Binary name used to compile scripts when no explicit path is configured.
pub const DEFAULT_OPENSCAD_BINARY: &str = "openscad";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true when `size` is an accepted grid resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::is_valid_grid_size;
///
/// assert!(is_valid_grid_size(8));
/// assert!(is_valid_grid_size(64));
/// assert!(!is_valid_grid_size(65));
/// ```
#[inline]
pub fn is_valid_grid_size(size: usize) -> bool {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size)
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance under which mesh positions are welded for topology checks.
    pub weld_tolerance: f64,
    /// Centroid tolerance relative to the cell size.
    pub centroid_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting tolerances that are not strictly
    /// positive and finite.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-5, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.weld_tolerance, 1.0e-5);
    /// ```
    pub fn new(weld_tolerance: f64, centroid_tolerance: f64) -> Result<Self, ConfigError> {
        if !(weld_tolerance.is_finite() && weld_tolerance > 0.0) {
            return Err(ConfigError::InvalidWeldTolerance(weld_tolerance));
        }
        if !(centroid_tolerance.is_finite() && centroid_tolerance > 0.0) {
            return Err(ConfigError::InvalidCentroidTolerance(centroid_tolerance));
        }
        Ok(Self {
            weld_tolerance,
            centroid_tolerance,
        })
    }

    /// Absolute centroid tolerance for a given cell size.
    pub fn centroid_tolerance_for(&self, cell_size: f64) -> f64 {
        self.centroid_tolerance * cell_size
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: WELD_EPSILON,
            centroid_tolerance: CENTROID_TOLERANCE_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld tolerance is zero, negative or not finite.
    InvalidWeldTolerance(f64),
    /// Raised when the centroid tolerance is zero, negative or not finite.
    InvalidCentroidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeldTolerance(value) => {
                write!(f, "weld tolerance must be positive: {value}")
            }
            ConfigError::InvalidCentroidTolerance(value) => {
                write!(f, "centroid tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
