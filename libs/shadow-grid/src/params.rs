//! # Geometry Parameters
//!
//! Physical dimensions shared by every cell of a build, validated once
//! before per-cell work begins.

use config::constants::{
    is_valid_grid_size, DEFAULT_BORDER_THICKNESS, DEFAULT_CELL_SIZE, DEFAULT_POCKET_DEPTH,
    MAX_GRID_SIZE, MIN_GRID_SIZE,
};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// What a selected (`true`) interior cell becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    /// The cell's inset footprint is open from face to face, so light passes.
    #[default]
    ThroughHole,
    /// The cell stays full-height solid material.
    Solid,
}

/// Dimensions used to turn a grid into geometry.
///
/// # Example
///
/// ```rust
/// use shadow_grid::GeometryParameters;
///
/// let params = GeometryParameters::default();
/// params.validate(8).unwrap();
/// assert_eq!(params.column_height(8), 24.0);
/// assert!(params.pocket_floor_z() < params.pocket_ceiling_z(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParameters {
    /// Edge length of one cell in millimetres.
    pub cell_size: f64,
    /// Wall left between a cell's outer edge and its cavity.
    pub border_thickness: f64,
    /// Pocket depth counted in cell heights.
    pub pocket_depth: u32,
    /// Treatment of selected interior cells.
    pub fill_style: FillStyle,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            pocket_depth: DEFAULT_POCKET_DEPTH,
            fill_style: FillStyle::default(),
        }
    }
}

impl GeometryParameters {
    /// Validates the parameters against a grid of `size` cells per side.
    pub fn validate(&self, size: usize) -> Result<(), GridError> {
        if !is_valid_grid_size(size) {
            return Err(GridError::invalid_parameter(
                "size",
                format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {size}"),
            ));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::invalid_parameter(
                "cell_size",
                format!("must be positive, got {}", self.cell_size),
            ));
        }
        if !(self.border_thickness.is_finite() && self.border_thickness > 0.0) {
            return Err(GridError::invalid_parameter(
                "border_thickness",
                format!("must be positive, got {}", self.border_thickness),
            ));
        }
        if self.border_thickness >= self.cell_size / 2.0 {
            return Err(GridError::invalid_parameter(
                "border_thickness",
                format!(
                    "must be less than half the cell size ({}), got {}",
                    self.cell_size / 2.0,
                    self.border_thickness
                ),
            ));
        }
        if self.pocket_depth == 0 {
            return Err(GridError::invalid_parameter(
                "pocket_depth",
                "must be at least one cell",
            ));
        }
        if 2 * self.pocket_depth as usize >= size {
            return Err(GridError::invalid_parameter(
                "pocket_depth",
                format!(
                    "two pockets of {} cells leave no membrane in a {size} cell column",
                    self.pocket_depth
                ),
            ));
        }

        let height = self.column_height(size);
        let floor = self.pocket_floor_z();
        let ceiling = self.pocket_ceiling_z(size);
        if !(0.0 < floor && floor < ceiling && ceiling < height) {
            return Err(GridError::invalid_parameter(
                "pocket_depth",
                format!("pocket floor {floor} and ceiling {ceiling} do not fit in height {height}"),
            ));
        }
        Ok(())
    }

    /// Full height of the extruded column, `size * cell_size`.
    #[inline]
    pub fn column_height(&self, size: usize) -> f64 {
        size as f64 * self.cell_size
    }

    /// Pocket depth in absolute length units.
    #[inline]
    pub fn pocket_length(&self) -> f64 {
        f64::from(self.pocket_depth) * self.cell_size
    }

    /// Height of the bottom pocket's floor.
    #[inline]
    pub fn pocket_floor_z(&self) -> f64 {
        self.pocket_length() - self.border_thickness
    }

    /// Height of the top pocket's ceiling in a column of `size` cells.
    #[inline]
    pub fn pocket_ceiling_z(&self, size: usize) -> f64 {
        self.column_height(size) - self.pocket_length() + self.border_thickness
    }

    /// Side length of a cell's footprint once inset by the border on both sides.
    #[inline]
    pub fn inner_width(&self) -> f64 {
        self.cell_size - 2.0 * self.border_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cell_size: f64, border_thickness: f64, pocket_depth: u32) -> GeometryParameters {
        GeometryParameters {
            cell_size,
            border_thickness,
            pocket_depth,
            fill_style: FillStyle::ThroughHole,
        }
    }

    fn rejected_name(result: Result<(), GridError>) -> &'static str {
        match result {
            Err(GridError::InvalidParameter { name, .. }) => name,
            other => panic!("expected invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_are_valid_for_all_sizes() {
        let params = GeometryParameters::default();
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            params.validate(size).unwrap();
        }
    }

    #[test]
    fn test_size_out_of_range() {
        let params = GeometryParameters::default();
        assert_eq!(rejected_name(params.validate(0)), "size");
        assert_eq!(rejected_name(params.validate(7)), "size");
        assert_eq!(rejected_name(params.validate(65)), "size");
    }

    #[test]
    fn test_non_positive_dimensions() {
        assert_eq!(rejected_name(params(0.0, 0.4, 2).validate(8)), "cell_size");
        assert_eq!(rejected_name(params(f64::NAN, 0.4, 2).validate(8)), "cell_size");
        assert_eq!(rejected_name(params(3.0, 0.0, 2).validate(8)), "border_thickness");
        assert_eq!(rejected_name(params(3.0, 0.4, 0).validate(8)), "pocket_depth");
    }

    #[test]
    fn test_border_must_be_under_half_cell() {
        assert_eq!(rejected_name(params(3.0, 1.5, 2).validate(8)), "border_thickness");
        params(3.0, 1.49, 2).validate(8).unwrap();
    }

    #[test]
    fn test_pockets_must_leave_membrane() {
        // 2 * 4 cells of pocket in an 8 cell column leaves nothing
        assert_eq!(rejected_name(params(3.0, 0.4, 4).validate(8)), "pocket_depth");
        params(3.0, 0.4, 3).validate(8).unwrap();
    }

    #[test]
    fn test_pocket_heights() {
        let p = params(3.0, 0.4, 2);
        assert!((p.pocket_floor_z() - 5.6).abs() < 1e-12);
        assert!((p.pocket_ceiling_z(8) - 18.4).abs() < 1e-12);
        assert!((p.inner_width() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_serde_fills_missing_fields_with_defaults() {
        let p: GeometryParameters = serde_json::from_str(r#"{"cell_size": 5.0}"#).unwrap();
        assert_eq!(p.cell_size, 5.0);
        assert_eq!(p.pocket_depth, DEFAULT_POCKET_DEPTH);
        assert_eq!(p.fill_style, FillStyle::ThroughHole);
    }

    #[test]
    fn test_fill_style_snake_case() {
        let json = serde_json::to_string(&FillStyle::ThroughHole).unwrap();
        assert_eq!(json, "\"through_hole\"");
    }
}
