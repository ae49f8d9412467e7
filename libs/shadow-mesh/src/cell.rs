//! # Per-Cell Geometry Synthesizer
//!
//! Emits the local vertices and triangles of one grid cell. A cell is a
//! column of material `H` tall over its footprint; neighbouring columns
//! fuse, so side walls are only emitted where the cell touches the outside
//! of the grid.
//!
//! ## Vertex loops
//!
//! Every loop lists its corners counter-clockwise seen from above:
//! `(x0, y0) (x1, y0) (x1, y1) (x0, y1)`.
//!
//! ```text
//! loop          z            inset   used by
//! OUTER_BOTTOM  0            no      all
//! OUTER_TOP     H            no      all
//! INNER_BOTTOM  0            b       through-hole, pocket
//! INNER_TOP     H            b       through-hole, pocket
//! POCKET_FLOOR  d' - b       b       pocket
//! POCKET_CEIL   H - d' + b   b       pocket
//! ```

use config::constants::MAX_CELL_VERTICES;
use glam::DVec3;
use shadow_grid::{Cavity, CellKind, FillStyle, GeometryParameters};

use crate::mesh::Mesh;

/// Four corner indices of one rectangular loop.
type Loop = [u32; 4];

/// Direction a horizontal surface faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Up,
    Down,
}

/// Axis-aligned outer footprint of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Footprint {
    /// Footprint of the cell at `(row, col)`: columns run along x, rows along y.
    ///
    /// Both edges are computed from the cell index so neighbours share
    /// bit-identical coordinates.
    pub fn of_cell(row: usize, col: usize, cell_size: f64) -> Self {
        Self {
            x0: col as f64 * cell_size,
            y0: row as f64 * cell_size,
            x1: (col + 1) as f64 * cell_size,
            y1: (row + 1) as f64 * cell_size,
        }
    }

    /// Footprint shrunk by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x0: self.x0 + amount,
            y0: self.y0 + amount,
            x1: self.x1 - amount,
            y1: self.y1 - amount,
        }
    }

    fn corners(&self, z: f64) -> [DVec3; 4] {
        [
            DVec3::new(self.x0, self.y0, z),
            DVec3::new(self.x1, self.y0, z),
            DVec3::new(self.x1, self.y1, z),
            DVec3::new(self.x0, self.y1, z),
        ]
    }
}

/// Outer walls a cell must close because no neighbour supplies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeSides {
    /// Row 0, the `y0` edge.
    pub north: bool,
    /// Last column, the `x1` edge.
    pub east: bool,
    /// Last row, the `y1` edge.
    pub south: bool,
    /// Column 0, the `x0` edge.
    pub west: bool,
}

impl EnvelopeSides {
    /// Envelope sides touched by the cell at `(row, col)` of a `size` grid.
    pub fn of_cell(row: usize, col: usize, size: usize) -> Self {
        let last = size.saturating_sub(1);
        Self {
            north: row == 0,
            east: col == last,
            south: row == last,
            west: col == 0,
        }
    }

    /// Sides in loop edge order: edge `i` runs from corner `i` to corner `i + 1`.
    fn by_edge(self) -> [bool; 4] {
        [self.north, self.east, self.south, self.west]
    }

    /// Number of envelope walls the cell emits.
    pub fn count(self) -> usize {
        self.by_edge().iter().filter(|&&side| side).count()
    }
}

/// Heights and insets shared by every cell of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    /// Full column height `H`.
    pub height: f64,
    /// Wall thickness `b` between the footprint and a cavity.
    pub border: f64,
    /// Bottom pocket floor height.
    pub floor_z: f64,
    /// Top pocket ceiling height.
    pub ceiling_z: f64,
    /// Treatment of filled cells.
    pub fill_style: FillStyle,
}

impl CellFrame {
    /// Frame for a grid of `size` cells; `params` must already be validated.
    pub fn new(params: &GeometryParameters, size: usize) -> Self {
        Self {
            height: params.column_height(size),
            border: params.border_thickness,
            floor_z: params.pocket_floor_z(),
            ceiling_z: params.pocket_ceiling_z(size),
            fill_style: params.fill_style,
        }
    }
}

/// Geometry emitted for one cell, with local indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry {
    pub mesh: Mesh,
    pub cavity: Cavity,
}

/// Synthesizes one cell.
///
/// # Example
///
/// ```rust
/// use shadow_grid::{Cavity, CellKind, GeometryParameters};
/// use shadow_mesh::cell::{synthesize, CellFrame, EnvelopeSides, Footprint};
///
/// let params = GeometryParameters::default();
/// let frame = CellFrame::new(&params, 8);
/// let cell = synthesize(
///     CellKind::Recessed,
///     &Footprint::of_cell(3, 3, params.cell_size),
///     &frame,
///     EnvelopeSides::default(),
/// );
/// assert_eq!(cell.cavity, Cavity::Pocket);
/// assert_eq!(cell.mesh.vertex_count(), 24);
/// assert_eq!(cell.mesh.triangle_count(), 36);
/// ```
pub fn synthesize(
    kind: CellKind,
    footprint: &Footprint,
    frame: &CellFrame,
    sides: EnvelopeSides,
) -> CellGeometry {
    let cavity = kind.cavity(frame.fill_style);
    let mut mesh = Mesh::with_capacity(MAX_CELL_VERTICES, 36 + 2 * sides.count());

    let outer_bottom = add_loop(&mut mesh, footprint, 0.0);
    let outer_top = add_loop(&mut mesh, footprint, frame.height);

    match kind {
        CellKind::Border => solid_caps(&mut mesh, outer_bottom, outer_top),
        CellKind::Filled => match frame.fill_style {
            FillStyle::Solid => solid_caps(&mut mesh, outer_bottom, outer_top),
            FillStyle::ThroughHole => {
                let inner = footprint.inset(frame.border);
                let inner_bottom = add_loop(&mut mesh, &inner, 0.0);
                let inner_top = add_loop(&mut mesh, &inner, frame.height);
                ring_caps(&mut mesh, [outer_bottom, outer_top], [inner_bottom, inner_top]);
                cavity_walls(&mut mesh, inner_bottom, inner_top);
            }
        },
        CellKind::Recessed => {
            let inner = footprint.inset(frame.border);
            let inner_bottom = add_loop(&mut mesh, &inner, 0.0);
            let inner_top = add_loop(&mut mesh, &inner, frame.height);
            let floor = add_loop(&mut mesh, &inner, frame.floor_z);
            let ceiling = add_loop(&mut mesh, &inner, frame.ceiling_z);
            ring_caps(&mut mesh, [outer_bottom, outer_top], [inner_bottom, inner_top]);

            // Bottom pocket: open at z = 0, closed by a floor facing down into it
            cavity_walls(&mut mesh, inner_bottom, floor);
            cap(&mut mesh, floor, Facing::Down);

            // Top pocket: open at z = H, closed by a ceiling facing up into it
            cavity_walls(&mut mesh, ceiling, inner_top);
            cap(&mut mesh, ceiling, Facing::Up);
        }
    }

    for (edge, present) in sides.by_edge().into_iter().enumerate() {
        if present {
            envelope_wall(&mut mesh, outer_bottom, outer_top, edge);
        }
    }

    CellGeometry { mesh, cavity }
}

fn add_loop(mesh: &mut Mesh, footprint: &Footprint, z: f64) -> Loop {
    footprint.corners(z).map(|corner| mesh.add_vertex(corner))
}

fn cap(mesh: &mut Mesh, l: Loop, facing: Facing) {
    match facing {
        Facing::Up => mesh.add_quad(l[0], l[1], l[2], l[3]),
        Facing::Down => mesh.add_quad(l[0], l[3], l[2], l[1]),
    }
}

fn solid_caps(mesh: &mut Mesh, bottom: Loop, top: Loop) {
    cap(mesh, bottom, Facing::Down);
    cap(mesh, top, Facing::Up);
}

/// Annulus between an outer and an inset loop at the same height.
fn ring(mesh: &mut Mesh, outer: Loop, inner: Loop, facing: Facing) {
    for i in 0..4 {
        let j = (i + 1) % 4;
        match facing {
            Facing::Up => mesh.add_quad(outer[i], outer[j], inner[j], inner[i]),
            Facing::Down => mesh.add_quad(outer[i], inner[i], inner[j], outer[j]),
        }
    }
}

fn ring_caps(mesh: &mut Mesh, outer: [Loop; 2], inner: [Loop; 2]) {
    ring(mesh, outer[0], inner[0], Facing::Down);
    ring(mesh, outer[1], inner[1], Facing::Up);
}

/// Four walls between two stacked inset loops, facing into the cavity they
/// enclose.
fn cavity_walls(mesh: &mut Mesh, lower: Loop, upper: Loop) {
    for i in 0..4 {
        let j = (i + 1) % 4;
        mesh.add_quad(lower[i], upper[i], upper[j], lower[j]);
    }
}

/// Full-height outer wall along loop edge `edge`, facing away from the cell.
fn envelope_wall(mesh: &mut Mesh, bottom: Loop, top: Loop, edge: usize) {
    let next = (edge + 1) % 4;
    mesh.add_quad(bottom[edge], bottom[next], top[next], top[edge]);
}
