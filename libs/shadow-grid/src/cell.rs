//! # Cell Classifier
//!
//! Maps a cell position and value to the kind of material it becomes, and
//! the kind to the cavity carved out of it. Both the mesh and the CSG
//! pipelines read cavities from here so they cannot drift apart.

use config::constants::BORDER_RING_WIDTH;
use serde::{Deserialize, Serialize};

use crate::params::FillStyle;

/// Material role of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Outermost ring: always solid, never carved.
    Border,
    /// Interior cell whose grid value is `true`.
    Filled,
    /// Interior cell whose grid value is `false`: blind pockets on both faces.
    Recessed,
}

/// Carving applied to a cell's inset footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cavity {
    /// Full-height solid material.
    None,
    /// Two blind pockets, one from each face, separated by a membrane.
    Pocket,
    /// Opening running from the bottom face to the top face.
    ThroughHole,
}

impl CellKind {
    /// Cavity carved for this kind under the given fill style.
    ///
    /// ```rust
    /// use shadow_grid::{Cavity, CellKind, FillStyle};
    ///
    /// assert_eq!(CellKind::Filled.cavity(FillStyle::ThroughHole), Cavity::ThroughHole);
    /// assert_eq!(CellKind::Filled.cavity(FillStyle::Solid), Cavity::None);
    /// assert_eq!(CellKind::Border.cavity(FillStyle::ThroughHole), Cavity::None);
    /// ```
    pub fn cavity(self, fill_style: FillStyle) -> Cavity {
        match self {
            CellKind::Border => Cavity::None,
            CellKind::Recessed => Cavity::Pocket,
            CellKind::Filled => match fill_style {
                FillStyle::ThroughHole => Cavity::ThroughHole,
                FillStyle::Solid => Cavity::None,
            },
        }
    }
}

/// Returns true when `(row, col)` lies on the structural border ring.
#[inline]
pub fn is_border(row: usize, col: usize, size: usize) -> bool {
    let last = size.saturating_sub(BORDER_RING_WIDTH);
    row < BORDER_RING_WIDTH || col < BORDER_RING_WIDTH || row >= last || col >= last
}

/// Classifies a cell from its position and stored value.
///
/// Border cells ignore their value.
///
/// ```rust
/// use shadow_grid::{classify, CellKind};
///
/// assert_eq!(classify(0, 4, 8, true), CellKind::Border);
/// assert_eq!(classify(7, 4, 8, false), CellKind::Border);
/// assert_eq!(classify(3, 4, 8, true), CellKind::Filled);
/// assert_eq!(classify(3, 4, 8, false), CellKind::Recessed);
/// ```
pub fn classify(row: usize, col: usize, size: usize, value: bool) -> CellKind {
    if is_border(row, col, size) {
        CellKind::Border
    } else if value {
        CellKind::Filled
    } else {
        CellKind::Recessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_cells_are_border() {
        let size = 10;
        for i in 0..size {
            for value in [false, true] {
                assert_eq!(classify(0, i, size, value), CellKind::Border);
                assert_eq!(classify(size - 1, i, size, value), CellKind::Border);
                assert_eq!(classify(i, 0, size, value), CellKind::Border);
                assert_eq!(classify(i, size - 1, size, value), CellKind::Border);
            }
        }
    }

    #[test]
    fn test_second_ring_is_interior() {
        // The editor draws a two cell margin, but only the outer ring is structural
        assert_eq!(classify(1, 1, 8, false), CellKind::Recessed);
        assert_eq!(classify(6, 6, 8, true), CellKind::Filled);
    }

    #[test]
    fn test_interior_count() {
        let size = 8;
        let interior = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .filter(|&(r, c)| !is_border(r, c, size))
            .count();
        assert_eq!(interior, 36);
    }

    #[test]
    fn test_recessed_is_always_pocket() {
        for style in [FillStyle::ThroughHole, FillStyle::Solid] {
            assert_eq!(CellKind::Recessed.cavity(style), Cavity::Pocket);
            assert_eq!(CellKind::Border.cavity(style), Cavity::None);
        }
    }
}
