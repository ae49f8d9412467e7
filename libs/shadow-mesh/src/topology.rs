//! # Edge Topology Report
//!
//! Cells own their vertices, so neighbouring cells meet at coincident but
//! distinct positions. The report welds positions within a tolerance and
//! then counts how every undirected edge is used.

use std::collections::HashMap;

use glam::DVec3;

use crate::mesh::Mesh;

/// Edge usage summary of a welded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeReport {
    /// Distinct positions after welding.
    pub welded_vertices: usize,
    /// Distinct undirected edges.
    pub edges: usize,
    /// Edges used by a single triangle.
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Edges used twice in the same direction.
    pub inconsistent_edges: usize,
    /// Triangles collapsing onto fewer than three welded vertices.
    pub degenerate_triangles: usize,
}

impl EdgeReport {
    /// Analyzes `mesh`, treating positions closer than `tolerance` as one.
    pub fn analyze(mesh: &Mesh, tolerance: f64) -> Self {
        let mut welded: HashMap<[i64; 3], u32> = HashMap::new();
        let remap: Vec<u32> = mesh
            .vertices()
            .iter()
            .map(|&v| {
                let next = welded.len() as u32;
                *welded.entry(quantize(v, tolerance)).or_insert(next)
            })
            .collect();

        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        let mut degenerate_triangles = 0;
        for tri in mesh.triangles() {
            let [a, b, c] = tri.map(|index| remap[index as usize]);
            if a == b || b == c || c == a {
                degenerate_triangles += 1;
                continue;
            }
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }

        let mut report = EdgeReport {
            welded_vertices: welded.len(),
            degenerate_triangles,
            ..EdgeReport::default()
        };
        for (&(a, b), &forward) in &directed {
            let backward = directed.get(&(b, a)).copied().unwrap_or(0);
            // Visit each undirected edge once
            if backward > 0 && b < a {
                continue;
            }
            report.edges += 1;
            match forward + backward {
                1 => report.boundary_edges += 1,
                2 if forward == 1 => {}
                2 => report.inconsistent_edges += 1,
                _ => report.non_manifold_edges += 1,
            }
        }
        report
    }

    /// True when every edge is shared by exactly two triangles wound in
    /// opposite directions.
    pub fn is_closed(&self) -> bool {
        self.edges > 0
            && self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.inconsistent_edges == 0
            && self.degenerate_triangles == 0
    }
}

fn quantize(v: DVec3, tolerance: f64) -> [i64; 3] {
    (v / tolerance).round().as_i64vec3().to_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [DVec3; 4] = [
        DVec3::ZERO,
        DVec3::X,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::Y,
    ];

    /// Unit square with both faces, the back face split along the other diagonal.
    fn two_sided_square(back_offset: DVec3) -> Mesh {
        let mut mesh = Mesh::new();
        for v in SQUARE {
            mesh.add_vertex(v);
        }
        for v in SQUARE {
            mesh.add_vertex(v + back_offset);
        }
        mesh.add_quad(0, 1, 2, 3);
        mesh.add_quad(5, 4, 7, 6);
        mesh
    }

    #[test]
    fn test_two_sided_square_is_closed() {
        let report = EdgeReport::analyze(&two_sided_square(DVec3::ZERO), 1e-6);
        assert_eq!(report.welded_vertices, 4);
        assert_eq!(report.edges, 6);
        assert!(report.is_closed());
    }

    #[test]
    fn test_near_coincident_vertices_are_welded() {
        let mesh = two_sided_square(DVec3::splat(1e-9));
        assert!(EdgeReport::analyze(&mesh, 1e-6).is_closed());

        let report = EdgeReport::analyze(&mesh, 1e-12);
        assert_eq!(report.welded_vertices, 8);
        assert_eq!(report.boundary_edges, 8);
        assert!(!report.is_closed());
    }

    #[test]
    fn test_same_winding_is_inconsistent() {
        let mut mesh = Mesh::new();
        for v in SQUARE {
            mesh.add_vertex(v);
        }
        mesh.add_quad(0, 1, 2, 3);
        mesh.add_quad(1, 2, 3, 0);
        let report = EdgeReport::analyze(&mesh, 1e-6);
        assert_eq!(report.edges, 6);
        assert_eq!(report.inconsistent_edges, 4);
        assert!(!report.is_closed());
    }

    #[test]
    fn test_shared_diagonal_is_non_manifold() {
        let mut mesh = Mesh::new();
        for v in SQUARE {
            mesh.add_vertex(v);
        }
        mesh.add_quad(0, 1, 2, 3);
        mesh.add_quad(0, 3, 2, 1);
        let report = EdgeReport::analyze(&mesh, 1e-6);
        assert_eq!(report.non_manifold_edges, 1);
        assert_eq!(report.boundary_edges, 0);
    }

    #[test]
    fn test_open_square_has_boundary() {
        let mut mesh = Mesh::new();
        for v in SQUARE {
            mesh.add_vertex(v);
        }
        mesh.add_quad(0, 1, 2, 3);
        let report = EdgeReport::analyze(&mesh, 1e-6);
        assert_eq!(report.boundary_edges, 4);
        assert!(!report.is_closed());
    }

    #[test]
    fn test_collapsed_triangle_is_degenerate() {
        let mut mesh = two_sided_square(DVec3::ZERO);
        mesh.add_triangle(0, 4, 1);
        let report = EdgeReport::analyze(&mesh, 1e-6);
        assert_eq!(report.degenerate_triangles, 1);
        assert!(!report.is_closed());
    }

    #[test]
    fn test_empty_mesh_is_not_closed() {
        assert!(!EdgeReport::analyze(&Mesh::new(), 1e-6).is_closed());
    }
}
