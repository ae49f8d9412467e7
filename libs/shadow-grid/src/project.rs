//! # Shadow Cube Project
//!
//! The three view grids of one design. All three share a single size.

use config::constants::{is_valid_grid_size, MAX_GRID_SIZE, MIN_GRID_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::Grid;
use crate::view::View;

/// Three same-sized grids, one per view.
///
/// The JSON form is the `.grid` project format:
///
/// ```text
/// {"grid_size": 8, "grid_cells": {"Top": [[..]], "Front": [[..]], "Side": [[..]]}}
/// ```
///
/// # Example
///
/// ```rust
/// use shadow_grid::{ShadowProject, View};
///
/// let mut project = ShadowProject::new(8).unwrap();
/// project.grid_mut(View::Top).set(3, 3, true);
/// let json = project.to_json().unwrap();
/// let back = ShadowProject::from_json(&json).unwrap();
/// assert!(back.grid(View::Top).get(3, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectFile", into = "ProjectFile")]
pub struct ShadowProject {
    size: usize,
    top: Grid,
    front: Grid,
    side: Grid,
}

/// On-disk layout of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectFile {
    grid_size: usize,
    grid_cells: ProjectCells,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectCells {
    #[serde(rename = "Top")]
    top: Grid,
    #[serde(rename = "Front")]
    front: Grid,
    #[serde(rename = "Side")]
    side: Grid,
}

impl ShadowProject {
    /// Creates a project with three cleared grids.
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            top: Grid::new(size),
            front: Grid::new(size),
            side: Grid::new(size),
        })
    }

    /// Assembles a project from existing grids, which must all share one size.
    pub fn from_grids(top: Grid, front: Grid, side: Grid) -> Result<Self, GridError> {
        let size = top.size();
        check_size(size)?;
        for (view, grid) in [(View::Front, &front), (View::Side, &side)] {
            if grid.size() != size {
                return Err(GridError::inconsistent(
                    format!("{view} grid is {0}x{0}, Top grid is {size}x{size}", grid.size()),
                    Some(view),
                ));
            }
        }
        Ok(Self {
            size,
            top,
            front,
            side,
        })
    }

    /// Parses a project from its JSON form.
    ///
    /// Text that is not a project is [`GridError::MalformedProject`]; grids
    /// that disagree on their size are [`GridError::InconsistentGrid`].
    pub fn from_json(source: &str) -> Result<Self, GridError> {
        let file: ProjectFile = serde_json::from_str(source)?;
        Self::try_from(file)
    }

    /// Serializes the project to its JSON form.
    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Shared side length of the grids.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Grid for one view.
    pub fn grid(&self, view: View) -> &Grid {
        match view {
            View::Top => &self.top,
            View::Front => &self.front,
            View::Side => &self.side,
        }
    }

    /// Mutable grid for one view.
    pub fn grid_mut(&mut self, view: View) -> &mut Grid {
        match view {
            View::Top => &mut self.top,
            View::Front => &mut self.front,
            View::Side => &mut self.side,
        }
    }

    /// Clears all three grids.
    pub fn clear(&mut self) {
        for view in View::EXPORT_ORDER {
            self.grid_mut(view).clear();
        }
    }

    /// Inverts all three grids.
    pub fn invert(&mut self) {
        for view in View::EXPORT_ORDER {
            self.grid_mut(view).invert();
        }
    }
}

fn check_size(size: usize) -> Result<(), GridError> {
    if is_valid_grid_size(size) {
        Ok(())
    } else {
        Err(GridError::invalid_parameter(
            "size",
            format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {size}"),
        ))
    }
}

impl TryFrom<ProjectFile> for ShadowProject {
    type Error = GridError;

    fn try_from(file: ProjectFile) -> Result<Self, Self::Error> {
        let cells = file.grid_cells;
        let project = ShadowProject::from_grids(cells.top, cells.front, cells.side)?;
        if project.size != file.grid_size {
            return Err(GridError::inconsistent(
                format!(
                    "grid_size is {} but the grids are {1}x{1}",
                    file.grid_size, project.size
                ),
                None,
            ));
        }
        Ok(project)
    }
}

impl From<ShadowProject> for ProjectFile {
    fn from(project: ShadowProject) -> Self {
        ProjectFile {
            grid_size: project.size,
            grid_cells: ProjectCells {
                top: project.top,
                front: project.front,
                side: project.side,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_size() {
        assert!(ShadowProject::new(7).is_err());
        assert!(ShadowProject::new(65).is_err());
        assert_eq!(ShadowProject::new(64).unwrap().size(), 64);
    }

    #[test]
    fn test_from_grids_rejects_mismatch() {
        let err = ShadowProject::from_grids(Grid::new(8), Grid::new(8), Grid::new(9)).unwrap_err();
        match err {
            GridError::InconsistentGrid { view, .. } => assert_eq!(view, Some(View::Side)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_grids_are_independent() {
        let mut project = ShadowProject::new(8).unwrap();
        project.grid_mut(View::Front).set(2, 2, true);
        assert!(project.grid(View::Front).get(2, 2));
        assert!(!project.grid(View::Top).get(2, 2));
        assert!(!project.grid(View::Side).get(2, 2));
    }

    #[test]
    fn test_json_layout_uses_view_names() {
        let project = ShadowProject::new(8).unwrap();
        let json = project.to_json().unwrap();
        assert!(json.starts_with("{\"grid_size\":8,\"grid_cells\":{\"Top\":"));
        assert!(json.contains("\"Front\":"));
        assert!(json.contains("\"Side\":"));
    }

    #[test]
    fn test_json_rejects_declared_size_mismatch() {
        let grid = vec![vec![false; 8]; 8];
        let json = serde_json::json!({
            "grid_size": 9,
            "grid_cells": {"Top": grid, "Front": grid, "Side": grid},
        });
        let err = ShadowProject::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, GridError::InconsistentGrid { view: None, .. }));
    }

    #[test]
    fn test_json_rejects_view_size_mismatch() {
        let grid = vec![vec![false; 8]; 8];
        let side = vec![vec![false; 9]; 9];
        let json = serde_json::json!({
            "grid_size": 8,
            "grid_cells": {"Top": grid, "Front": grid, "Side": side},
        });
        let err = ShadowProject::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            GridError::InconsistentGrid { view: Some(View::Side), .. }
        ));
    }

    #[test]
    fn test_deserialize_still_validates() {
        let grid = vec![vec![false; 8]; 8];
        let json = serde_json::json!({
            "grid_size": 8,
            "grid_cells": {"Top": grid, "Front": vec![vec![false; 9]; 9], "Side": grid},
        });
        assert!(serde_json::from_value::<ShadowProject>(json).is_err());
    }

    #[test]
    fn test_json_rejects_missing_view() {
        let json = r#"{"grid_size": 8, "grid_cells": {"Top": [], "Front": []}}"#;
        assert!(ShadowProject::from_json(json).is_err());
    }

    #[test]
    fn test_invert_touches_every_view() {
        let mut project = ShadowProject::new(8).unwrap();
        project.invert();
        for view in View::EXPORT_ORDER {
            assert_eq!(project.grid(view).selected_count(), 64);
        }
        project.clear();
        for view in View::EXPORT_ORDER {
            assert_eq!(project.grid(view).selected_count(), 0);
        }
    }
}
