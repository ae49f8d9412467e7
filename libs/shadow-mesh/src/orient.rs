//! # View Orientation
//!
//! Rotates an assembled view mesh into its place in the shared cube frame
//! and puts its centroid back where it was before the rotation.
//!
//! Quarter turns are clockwise when looking down the positive axis, so
//! "+90° about y" is the right-handed `Ry(-90°)`.
//!
//! | View  | Turns                      | Matrix                  | Extrusion axis ends on |
//! |-------|----------------------------|-------------------------|------------------------|
//! | Top   | none                       | identity                | z                      |
//! | Side  | +90° about y, +90° about x | `Rx(-90°) · Ry(-90°)`   | x                      |
//! | Front | -90° about x, 180° about y | `Ry(180°) · Rx(90°)`    | y                      |

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DMat3, DVec3};
use shadow_grid::View;

use crate::mesh::Mesh;

/// Rotation applied to a view mesh.
///
/// Every entry is snapped to an integer: the rotations are quarter turns,
/// so the result is an exact signed permutation matrix.
pub fn view_rotation(view: View) -> DMat3 {
    let rotation = match view {
        View::Top => DMat3::IDENTITY,
        View::Side => clockwise(DVec3::X, FRAC_PI_2) * clockwise(DVec3::Y, FRAC_PI_2),
        View::Front => clockwise(DVec3::Y, PI) * clockwise(DVec3::X, -FRAC_PI_2),
    };
    snap(rotation)
}

fn clockwise(axis: DVec3, angle: f64) -> DMat3 {
    DMat3::from_axis_angle(axis, -angle)
}

fn snap(m: DMat3) -> DMat3 {
    DMat3::from_cols(m.x_axis.round(), m.y_axis.round(), m.z_axis.round())
}

/// Orients `mesh` for `view` in place, keeping its centroid fixed.
///
/// Returns the centroid the mesh is anchored to.
pub fn orient(mesh: &mut Mesh, view: View) -> DVec3 {
    let before = mesh.centroid();
    mesh.rotate(&view_rotation(view));
    let after = mesh.centroid();
    mesh.translate(before - after);
    before
}
