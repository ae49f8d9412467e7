//! # Mesh Data Structure
//!
//! Indexed triangle mesh shared by the cell synthesizer, the view assembler
//! and the export drivers.

use glam::{DMat3, DVec3};

/// A triangle mesh with vertices and indices.
///
/// Triangles wind counter-clockwise when seen from outside the solid, so
/// `(b - a).cross(c - a)` points out of the material.
///
/// # Example
///
/// ```rust
/// use shadow_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds the quad `v0 v1 v2 v3` as the two triangles `v0 v1 v2` and `v0 v2 v3`.
    pub fn add_quad(&mut self, v0: u32, v1: u32, v2: u32, v3: u32) {
        self.triangles.push([v0, v1, v2]);
        self.triangles.push([v0, v2, v3]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Unit normal of a triangle, or zero for a degenerate one.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangle_positions(index);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Mean of every triangle corner.
    ///
    /// A vertex counts once per triangle referencing it; unreferenced
    /// vertices do not count. Returns zero for a mesh without triangles.
    pub fn centroid(&self) -> DVec3 {
        if self.triangles.is_empty() {
            return DVec3::ZERO;
        }
        let sum: DVec3 = self
            .triangles
            .iter()
            .flat_map(|tri| tri.iter())
            .map(|&index| self.vertices[index as usize])
            .sum();
        sum / (self.triangles.len() * 3) as f64
    }

    /// Signed enclosed volume.
    ///
    /// Positive when triangles wind outward; only meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (self.vertex(a), self.vertex(b), self.vertex(c));
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Rotates all vertices about the origin.
    pub fn rotate(&mut self, rotation: &DMat3) {
        for v in &mut self.vertices {
            *v = *rotation * *v;
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, shifting its indices past this mesh's vertices.
    ///
    /// Returns the offset that was added to the appended indices.
    pub fn append(&mut self, other: &Mesh) -> u32 {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );

        offset
    }

    /// Returns the first triangle referencing a vertex outside the buffer.
    pub fn find_dangling_index(&self) -> Option<(usize, u32)> {
        let vertex_count = self.vertices.len() as u32;
        self.triangles.iter().enumerate().find_map(|(index, tri)| {
            tri.iter()
                .find(|&&v| v >= vertex_count)
                .map(|&v| (index, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.centroid(), DVec3::ZERO);
    }

    #[test]
    fn test_mesh_add_quad() {
        let mut mesh = Mesh::new();
        for v in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
            mesh.add_vertex(v);
        }
        mesh.add_quad(0, 1, 2, 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 2, 3]]);
        assert_relative_eq!(mesh.face_normal(0).z, 1.0);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_centroid_counts_references() {
        let mut mesh = unit_tetrahedron();
        // Unreferenced vertex far away must not move the centroid
        mesh.add_vertex(DVec3::splat(100.0));
        let c = mesh.centroid();
        assert_relative_eq!(c.x, 0.25);
        assert_relative_eq!(c.y, 0.25);
        assert_relative_eq!(c.z, 0.25);
    }

    #[test]
    fn test_signed_volume_positive_for_outward_winding() {
        let mesh = unit_tetrahedron();
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_and_translation_keep_volume() {
        let mut mesh = unit_tetrahedron();
        mesh.rotate(&DMat3::from_rotation_y(1.0));
        mesh.translate(DVec3::new(5.0, -3.0, 2.0));
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_append_offsets_indices() {
        let mut first = unit_tetrahedron();
        let second = unit_tetrahedron();
        let offset = first.append(&second);
        assert_eq!(offset, 4);
        assert_eq!(first.vertex_count(), 8);
        assert_eq!(first.triangle_count(), 8);
        assert_eq!(first.triangles()[4], [4, 6, 5]);
    }

    #[test]
    fn test_find_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 0, 0);
        assert_eq!(mesh.find_dangling_index(), None);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.find_dangling_index(), Some((1, 1)));
    }
}
