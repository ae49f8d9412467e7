//! # Shadow Mesh
//!
//! Explicit triangle meshes for the three views of a shadow cube. Each view
//! grid becomes one closed solid: a column of `size * cell_size` material
//! per cell, carved by the cavity its classification asks for.
//!
//! ## Architecture
//!
//! ```text
//! Grid + GeometryParameters
//!       ↓ validate
//! cell::synthesize (per cell, local indices)
//!       ↓ arena append
//! orient (rotate, re-center)
//!       ↓
//! ViewMesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shadow_grid::{GeometryParameters, ShadowProject, View};
//! use shadow_mesh::build_views;
//!
//! let project = ShadowProject::new(8).unwrap();
//! let views = build_views(&project, &GeometryParameters::default()).unwrap();
//! assert_eq!(views.len(), 3);
//! assert_eq!(views[0].view(), View::Front);
//! ```

pub mod assemble;
pub mod cell;
pub mod error;
pub mod mesh;
pub mod orient;
pub mod topology;

pub use assemble::{build_view_mesh, ViewMesh};
pub use error::MeshError;
pub use mesh::Mesh;
pub use orient::{orient, view_rotation};
pub use topology::EdgeReport;

use rayon::prelude::*;
use shadow_grid::{GeometryParameters, ShadowProject, View};
use tracing::info;

/// Builds the meshes of all three views in export order.
///
/// Views are independent and run on the rayon pool; the first failure is
/// returned and no mesh is kept.
pub fn build_views(
    project: &ShadowProject,
    params: &GeometryParameters,
) -> Result<Vec<ViewMesh>, MeshError> {
    let views = View::EXPORT_ORDER
        .par_iter()
        .map(|&view| build_view_mesh(project.grid(view), params, view))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        size = project.size(),
        triangles = views.iter().map(|v| v.mesh().triangle_count()).sum::<usize>(),
        "Built view meshes"
    );
    Ok(views)
}
