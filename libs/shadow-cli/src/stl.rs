//! STL file writer.
//!
//! Writes triangles straight from the indexed mesh, one facet per triangle
//! with its unit normal.
//!
//! # Binary Format
//!
//! - 80-byte header
//! - 4-byte little-endian u32 triangle count
//! - For each triangle (50 bytes):
//!   - 12 bytes: normal (3 × f32)
//!   - 36 bytes: 3 vertices (9 × f32)
//!   - 2 bytes: attribute byte count (unused, set to 0)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{EPSILON, STL_HEADER_SIZE, STL_HEADER_TEXT};
use glam::DVec3;
use shadow_mesh::Mesh;

use crate::error::{ExportError, ExportResult};

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Save a mesh to an STL file.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, format: StlFormat) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        StlFormat::Binary => write_stl_binary(mesh, &mut writer)?,
        StlFormat::Ascii => write_stl_ascii(mesh, "mesh", &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write a mesh as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    let mut header = [b' '; STL_HEADER_SIZE];
    let text = STL_HEADER_TEXT.as_bytes();
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count()).map_err(|_| ExportError::TooManyTriangles {
        count: mesh.triangle_count(),
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let corners = mesh.triangle_positions(index);
        write_vector_binary(&mut writer, facet_normal(&corners))?;
        for corner in corners {
            write_vector_binary(&mut writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a mesh as ASCII STL under the given solid name.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> ExportResult<()> {
    writeln!(writer, "solid {name}")?;

    for index in 0..mesh.triangle_count() {
        let corners = mesh.triangle_positions(index);
        let n = facet_normal(&corners);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in corners {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

fn facet_normal([a, b, c]: &[DVec3; 3]) -> DVec3 {
    let normal = (*b - *a).cross(*c - *a);
    let len = normal.length();
    if len > EPSILON {
        normal / len
    } else {
        DVec3::ZERO
    }
}

/// STL stores single precision, so every coordinate is narrowed to f32.
fn write_vector_binary<W: Write>(writer: &mut W, v: DVec3) -> std::io::Result<()> {
    for component in v.as_vec3().to_array() {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}
