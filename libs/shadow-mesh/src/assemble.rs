//! # View Mesh Assembler
//!
//! Walks one grid row-major, synthesizes every cell and stitches the cells
//! into a single arena vertex buffer. The result is oriented for its view.

use shadow_grid::{Cavity, GeometryParameters, Grid, GridError, View};
use tracing::debug;

use crate::cell::{synthesize, CellFrame, EnvelopeSides, Footprint};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::orient::orient;

/// Oriented mesh of one view and the cavity each cell received.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewMesh {
    view: View,
    size: usize,
    mesh: Mesh,
    cavities: Vec<Cavity>,
}

impl ViewMesh {
    #[inline]
    pub fn view(&self) -> View {
        self.view
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Cavity carved into the cell at `(row, col)`.
    ///
    /// Panics when the coordinates are outside the grid.
    pub fn cavity(&self, row: usize, col: usize) -> Cavity {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        self.cavities[row * self.size + col]
    }

    /// Cavity of every cell, row-major.
    #[inline]
    pub fn cavities(&self) -> &[Cavity] {
        &self.cavities
    }

    /// Number of cells carrying a cavity of any kind.
    pub fn cavity_count(&self) -> usize {
        self.cavities
            .iter()
            .filter(|&&cavity| cavity != Cavity::None)
            .count()
    }
}

/// Builds the mesh of one view.
///
/// Parameters are validated against the grid size before any cell is
/// synthesized; nothing partial is returned on failure.
///
/// # Example
///
/// ```rust
/// use shadow_grid::{GeometryParameters, Grid, View};
/// use shadow_mesh::build_view_mesh;
///
/// let grid = Grid::new(8);
/// let view = build_view_mesh(&grid, &GeometryParameters::default(), View::Top).unwrap();
/// assert_eq!(view.mesh().vertex_count(), 1088);
/// assert_eq!(view.mesh().triangle_count(), 1472);
/// ```
pub fn build_view_mesh(
    grid: &Grid,
    params: &GeometryParameters,
    view: View,
) -> Result<ViewMesh, MeshError> {
    if grid.is_empty() {
        return Err(GridError::inconsistent("grid has no cells", Some(view)).into());
    }
    let size = grid.size();
    params.validate(size)?;

    let frame = CellFrame::new(params, size);
    let mut mesh = Mesh::new();
    let mut cavities = Vec::with_capacity(size * size);

    for (row, col, _) in grid.iter() {
        let kind = grid.kind(row, col);
        let cell = synthesize(
            kind,
            &Footprint::of_cell(row, col, params.cell_size),
            &frame,
            EnvelopeSides::of_cell(row, col, size),
        );
        mesh.append(&cell.mesh);
        cavities.push(cell.cavity);
    }

    if let Some((triangle, index)) = mesh.find_dangling_index() {
        return Err(MeshError::synthesis(
            view,
            format!(
                "triangle {triangle} references vertex {index} of {}",
                mesh.vertex_count()
            ),
        ));
    }

    let anchor = orient(&mut mesh, view);
    debug!(
        %view,
        size,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        centroid = ?anchor,
        "Assembled view mesh"
    );

    Ok(ViewMesh {
        view,
        size,
        mesh,
        cavities,
    })
}
