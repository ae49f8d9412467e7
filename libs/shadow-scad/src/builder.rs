//! # CSG Script Builder
//!
//! Describes the whole cube as one CSG tree: a solid cube of side
//! `size * cell_size` with the holes of each view subtracted along that
//! view's axis.
//!
//! Cells use the same axis convention as the mesh pipeline, columns along x
//! and rows along y, so both pipelines carve the same cells.

use shadow_grid::{Cavity, GeometryParameters, Grid, ShadowProject, View};
use tracing::debug;

use crate::error::ScadError;
use crate::extract;
use crate::node::CsgNode;
use crate::printer::print_scad;

/// Lower `[x, y]` corner of a cell's cavity.
fn cavity_origin(row: usize, col: usize, params: &GeometryParameters) -> (f64, f64) {
    (
        col as f64 * params.cell_size + params.border_thickness,
        row as f64 * params.cell_size + params.border_thickness,
    )
}

/// Two blind pockets of `pocket_depth` cells, flush with the bottom and the
/// top face.
pub fn pocket(row: usize, col: usize, size: usize, params: &GeometryParameters) -> [CsgNode; 2] {
    let (x, y) = cavity_origin(row, col, params);
    let width = params.inner_width();
    let depth = params.pocket_length();
    let top = params.column_height(size) - depth;
    [
        CsgNode::translate([x, y, 0.0], CsgNode::cube([width, width, depth])),
        CsgNode::translate([x, y, top], CsgNode::cube([width, width, depth])),
    ]
}

/// Prism running through the full column.
pub fn through_hole(row: usize, col: usize, size: usize, params: &GeometryParameters) -> CsgNode {
    let (x, y) = cavity_origin(row, col, params);
    let width = params.inner_width();
    CsgNode::translate(
        [x, y, 0.0],
        CsgNode::cube([width, width, params.column_height(size)]),
    )
}

/// Union of every cavity carved into one view.
///
/// Border cells classify to [`Cavity::None`], so only interior cells
/// contribute.
pub fn view_holes(grid: &Grid, params: &GeometryParameters) -> CsgNode {
    let size = grid.size();
    let mut holes = Vec::new();
    for (row, col, _) in grid.iter() {
        match grid.kind(row, col).cavity(params.fill_style) {
            Cavity::None => {}
            Cavity::Pocket => holes.extend(pocket(row, col, size, params)),
            Cavity::ThroughHole => holes.push(through_hole(row, col, size, params)),
        }
    }
    CsgNode::union(holes)
}

/// Subtracts `holes` from `body`.
pub fn cube_side(body: CsgNode, holes: CsgNode) -> CsgNode {
    CsgNode::difference(vec![body, holes])
}

/// CSG description of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct ScadModel {
    size: usize,
    params: GeometryParameters,
    root: CsgNode,
}

impl ScadModel {
    /// Grid size the model was built for.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn root(&self) -> &CsgNode {
        &self.root
    }

    /// OpenSCAD source for the model.
    pub fn to_scad(&self) -> String {
        print_scad(&self.root)
    }

    /// Cavity of every cell of `view`, row-major, as read back from the tree.
    pub fn cavity_map(&self, view: View) -> Result<Vec<Cavity>, ScadError> {
        extract::cavity_map(&self.root, view, self.size, &self.params)
    }
}

/// Builds the CSG tree of a project.
///
/// The Top view is carved along z, then the piece is turned so the Front
/// view can be carved along the new z, and once more for the Side view.
/// The turns put every view in the frame its oriented mesh has, up to one
/// rotation of the whole cube shared by all three views. Each translation
/// brings the turned piece back onto `[0, H]³`.
///
/// # Example
///
/// ```rust
/// use shadow_grid::{GeometryParameters, ShadowProject};
/// use shadow_scad::build_scad;
///
/// let project = ShadowProject::new(8).unwrap();
/// let model = build_scad(&project, &GeometryParameters::default()).unwrap();
/// // one body and a pocket pair per interior cell of every view
/// assert_eq!(model.root().primitive_count(), 1 + 3 * 36 * 2);
/// ```
pub fn build_scad(
    project: &ShadowProject,
    params: &GeometryParameters,
) -> Result<ScadModel, ScadError> {
    let size = project.size();
    params.validate(size)?;
    let height = params.column_height(size);

    let top = cube_side(
        CsgNode::cube([height; 3]),
        view_holes(project.grid(View::Top), params),
    );
    let front = cube_side(
        CsgNode::translate([height; 3], CsgNode::rotate([90.0, 180.0, 0.0], top)),
        view_holes(project.grid(View::Front), params),
    );
    let root = cube_side(
        CsgNode::translate([height, 0.0, 0.0], CsgNode::rotate([0.0, -90.0, 0.0], front)),
        view_holes(project.grid(View::Side), params),
    );

    debug!(
        size,
        primitives = root.primitive_count(),
        "Built CSG tree"
    );

    Ok(ScadModel {
        size,
        params: *params,
        root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;
    use shadow_grid::FillStyle;

    #[test]
    fn test_pocket_pair_is_flush_with_both_faces() {
        let params = GeometryParameters::default();
        let [bottom, top] = pocket(2, 5, 8, &params);
        let (b_min, b_max) = bottom.cube_bounds()[0];
        let (t_min, t_max) = top.cube_bounds()[0];

        assert_relative_eq!(b_min.x, 15.4, epsilon = 1e-9);
        assert_relative_eq!(b_min.y, 6.4, epsilon = 1e-9);
        assert_relative_eq!(b_min.z, 0.0);
        assert_relative_eq!(b_max.z, 6.0, epsilon = 1e-9);
        assert_relative_eq!(t_min.z, 18.0, epsilon = 1e-9);
        assert_relative_eq!(t_max.z, 24.0, epsilon = 1e-9);
        assert_relative_eq!(t_max.x - t_min.x, 2.2, epsilon = 1e-9);
    }

    #[test]
    fn test_through_hole_spans_column() {
        let params = GeometryParameters::default();
        let (min, max) = through_hole(1, 1, 10, &params).cube_bounds()[0];
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_view_holes_skip_border_and_solid_cells() {
        let mut grid = Grid::new(8);
        grid.invert();
        let solid = GeometryParameters {
            fill_style: FillStyle::Solid,
            ..GeometryParameters::default()
        };
        assert_eq!(view_holes(&grid, &solid).primitive_count(), 0);
        assert_eq!(
            view_holes(&grid, &GeometryParameters::default()).primitive_count(),
            36
        );
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let project = ShadowProject::new(8).unwrap();
        let params = GeometryParameters {
            cell_size: -1.0,
            ..GeometryParameters::default()
        };
        assert!(matches!(
            build_scad(&project, &params),
            Err(ScadError::Grid(_))
        ));
    }

    #[test]
    fn test_composed_model_stays_inside_cube() {
        let mut project = ShadowProject::new(8).unwrap();
        project.grid_mut(View::Front).set(3, 3, true);
        let model = build_scad(&project, &GeometryParameters::default()).unwrap();

        let bounds = model.root().cube_bounds();
        let (body_min, body_max) = bounds[0];
        assert!(body_min.abs().max_element() < 1e-9);
        assert!((body_max - DVec3::splat(24.0)).abs().max_element() < 1e-9);
        for (min, max) in &bounds[1..] {
            assert!(min.min_element() > -1e-9 && max.max_element() < 24.0 + 1e-9);
        }
    }
}
