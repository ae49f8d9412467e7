//! # CSG Node Types
//!
//! The subset of OpenSCAD geometry a shadow cube needs: axis-aligned cubes
//! placed with translations and rotations and combined with booleans.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// CSG NODE
// =============================================================================

/// A node in a CSG tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CsgNode {
    /// Cube with one corner at the origin.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z]);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
    },

    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<CsgNode>,
    },

    /// Rotation transform, applied about x, then y, then z.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<CsgNode>,
    },

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<CsgNode>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<CsgNode>,
    },
}

impl CsgNode {
    pub fn cube(size: [f64; 3]) -> Self {
        Self::Cube { size }
    }

    pub fn translate(offset: [f64; 3], child: CsgNode) -> Self {
        Self::Translate {
            offset,
            child: Box::new(child),
        }
    }

    pub fn rotate(angles: [f64; 3], child: CsgNode) -> Self {
        Self::Rotate {
            angles,
            child: Box::new(child),
        }
    }

    pub fn union(children: Vec<CsgNode>) -> Self {
        Self::Union { children }
    }

    pub fn difference(children: Vec<CsgNode>) -> Self {
        Self::Difference { children }
    }

    /// Local transform contributed by this node, identity for non-transforms.
    pub fn local_matrix(&self) -> DMat4 {
        match self {
            Self::Translate { offset, .. } => DMat4::from_translation(DVec3::from_array(*offset)),
            Self::Rotate { angles, .. } => {
                let ang = DVec3::from_array(*angles);
                let rx = DMat4::from_rotation_x(ang.x.to_radians());
                let ry = DMat4::from_rotation_y(ang.y.to_radians());
                let rz = DMat4::from_rotation_z(ang.z.to_radians());
                rz * ry * rx
            }
            Self::Cube { .. } | Self::Union { .. } | Self::Difference { .. } => DMat4::IDENTITY,
        }
    }

    /// Number of cube primitives in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Cube { .. } => 1,
            Self::Translate { child, .. } | Self::Rotate { child, .. } => child.primitive_count(),
            Self::Union { children } | Self::Difference { children } => {
                children.iter().map(CsgNode::primitive_count).sum()
            }
        }
    }

    /// World-space axis-aligned bounds of every cube, in tree order.
    pub fn cube_bounds(&self) -> Vec<(DVec3, DVec3)> {
        let mut bounds = Vec::new();
        self.collect_bounds(DMat4::IDENTITY, &mut bounds);
        bounds
    }

    fn collect_bounds(&self, parent: DMat4, out: &mut Vec<(DVec3, DVec3)>) {
        match self {
            Self::Cube { size } => {
                let size = DVec3::from_array(*size);
                let mut min = DVec3::splat(f64::INFINITY);
                let mut max = DVec3::splat(f64::NEG_INFINITY);
                for corner in 0..8 {
                    let unit = DVec3::new(
                        (corner & 1) as f64,
                        ((corner >> 1) & 1) as f64,
                        ((corner >> 2) & 1) as f64,
                    );
                    let p = parent.transform_point3(unit * size);
                    min = min.min(p);
                    max = max.max(p);
                }
                out.push((min, max));
            }
            Self::Translate { child, .. } | Self::Rotate { child, .. } => {
                child.collect_bounds(parent * self.local_matrix(), out);
            }
            Self::Union { children } | Self::Difference { children } => {
                for child in children {
                    child.collect_bounds(parent, out);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
