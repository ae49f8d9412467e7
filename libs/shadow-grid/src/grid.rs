//! # Grid Model
//!
//! A square boolean matrix, one per view. `true` marks a selected cell.

use serde::{Deserialize, Serialize};

use crate::cell::{classify, CellKind};
use crate::error::GridError;

/// Square boolean grid stored row-major.
///
/// Serialized as a list of rows, which is the layout of the `.grid`
/// project files.
///
/// # Example
///
/// ```rust
/// use shadow_grid::Grid;
///
/// let mut grid = Grid::new(8);
/// grid.set(2, 3, true);
/// assert!(grid.get(2, 3));
/// assert_eq!(grid.selected_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell cleared.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Builds a grid from explicit rows, rejecting ragged or non-square input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::inconsistent(
                    format!("row {index} has {} cells, expected {size}", row.len()),
                    None,
                ));
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Side length of the grid in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value at `(row, col)`.
    ///
    /// Panics when the coordinates are outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Sets the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    /// Flips the value at `(row, col)` and returns the new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        self.cells[index] = !self.cells[index];
        self.cells[index]
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Flips every cell, border ring included.
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Number of cells set to `true`.
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Classifies the cell at `(row, col)`.
    #[inline]
    pub fn kind(&self, row: usize, col: usize) -> CellKind {
        classify(row, col, self.size, self.get(row, col))
    }

    /// Iterates `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &value)| (index / size, index % size, value))
    }

    /// Returns the grid as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[bool]>::to_vec).collect()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
