//! # Cavity Extraction
//!
//! Reads back which cavity every cell received from a composed CSG tree.
//! The holes of each view sit in that view's own frame, so cell positions
//! are recovered from the hole offsets alone.

use shadow_grid::{Cavity, GeometryParameters, View};

use crate::error::ScadError;
use crate::node::CsgNode;

#[derive(Debug, Clone, Copy, Default)]
struct Marks {
    through: bool,
    bottom: bool,
    top: bool,
}

/// Cavity of every cell of `view`, row-major.
pub fn cavity_map(
    root: &CsgNode,
    view: View,
    size: usize,
    params: &GeometryParameters,
) -> Result<Vec<Cavity>, ScadError> {
    let holes = view_holes(root, view)?;
    let CsgNode::Union { children } = holes else {
        return Err(ScadError::malformed(view, "holes are not a union"));
    };

    let height = params.column_height(size);
    let depth = params.pocket_length();
    let tolerance = 1e-6 * params.cell_size;
    let close = |a: f64, b: f64| (a - b).abs() <= tolerance;

    let mut marks = vec![Marks::default(); size * size];
    for hole in children {
        let CsgNode::Translate { offset, child } = hole else {
            return Err(ScadError::malformed(view, "hole is not a placed cube"));
        };
        let CsgNode::Cube { size: extent } = child.as_ref() else {
            return Err(ScadError::malformed(view, "hole is not a placed cube"));
        };

        let (row, col) = cell_of(offset, size, params)
            .ok_or_else(|| ScadError::malformed(view, format!("hole at {offset:?} is off the grid")))?;
        let mark = &mut marks[row * size + col];
        if close(extent[2], height) {
            mark.through = true;
        } else if close(extent[2], depth) && close(offset[2], 0.0) {
            mark.bottom = true;
        } else if close(extent[2], depth) && close(offset[2], height - depth) {
            mark.top = true;
        } else {
            return Err(ScadError::malformed(
                view,
                format!("hole in cell ({row}, {col}) has unexpected height {}", extent[2]),
            ));
        }
    }

    marks
        .iter()
        .enumerate()
        .map(|(index, mark)| match (mark.through, mark.bottom, mark.top) {
            (false, false, false) => Ok(Cavity::None),
            (true, false, false) => Ok(Cavity::ThroughHole),
            (false, true, true) => Ok(Cavity::Pocket),
            _ => Err(ScadError::malformed(
                view,
                format!("cell ({}, {}) has an inconsistent set of holes", index / size, index % size),
            )),
        })
        .collect()
}

/// Locates the hole union of `view` in the composed tree.
fn view_holes(root: &CsgNode, view: View) -> Result<&CsgNode, ScadError> {
    let (front_piece, side_holes) = difference_parts(root, view)?;
    if view == View::Side {
        return Ok(side_holes);
    }
    let (top_piece, front_holes) = difference_parts(strip_transforms(front_piece), view)?;
    if view == View::Front {
        return Ok(front_holes);
    }
    let (_, top_holes) = difference_parts(strip_transforms(top_piece), view)?;
    Ok(top_holes)
}

fn difference_parts(node: &CsgNode, view: View) -> Result<(&CsgNode, &CsgNode), ScadError> {
    match node {
        CsgNode::Difference { children } if children.len() == 2 => Ok((&children[0], &children[1])),
        _ => Err(ScadError::malformed(view, "expected a body minus holes")),
    }
}

fn strip_transforms(mut node: &CsgNode) -> &CsgNode {
    while let CsgNode::Translate { child, .. } | CsgNode::Rotate { child, .. } = node {
        node = child.as_ref();
    }
    node
}

fn cell_of(offset: &[f64; 3], size: usize, params: &GeometryParameters) -> Option<(usize, usize)> {
    let index = |v: f64| {
        let i = ((v - params.border_thickness) / params.cell_size).round();
        (i >= 0.0 && i < size as f64).then_some(i as usize)
    };
    Some((index(offset[1])?, index(offset[0])?))
}
