//! Export drivers: project files in, STL and OpenSCAD files out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use config::constants::{GlobalConfig, MESH_EXTENSION, PROJECT_EXTENSION};
use shadow_grid::{GeometryParameters, ShadowProject};
use shadow_mesh::{build_views, EdgeReport};
use shadow_scad::build_scad;
use tracing::{debug, info, warn};

use crate::error::{ExportError, ExportResult};
use crate::stl::{save_stl, StlFormat};

/// Reads a `.grid` project file.
pub fn load_project(path: &Path) -> ExportResult<ShadowProject> {
    let source = fs::read_to_string(path)?;
    let project = ShadowProject::from_json(&source)?;
    debug!(path = %path.display(), size = project.size(), "Loaded project");
    Ok(project)
}

/// Writes a project file, adding the `.grid` extension when `path` has none.
///
/// Returns the path written.
pub fn save_project(project: &ShadowProject, path: &Path) -> ExportResult<PathBuf> {
    let path = if path.extension().is_none() {
        path.with_extension(PROJECT_EXTENSION)
    } else {
        path.to_path_buf()
    };
    fs::write(&path, project.to_json()?)?;
    info!(path = %path.display(), size = project.size(), "Saved project");
    Ok(path)
}

/// Reads geometry parameters from a JSON file; missing fields keep their
/// defaults.
pub fn load_params(path: &Path) -> ExportResult<GeometryParameters> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Builds all three view meshes and writes `Front.stl`, `Side.stl` and
/// `Top.stl` into `dir`.
///
/// Nothing is written unless every view builds. Returns the written paths
/// in export order.
pub fn export_stl(
    project: &ShadowProject,
    params: &GeometryParameters,
    dir: &Path,
    format: StlFormat,
    config: &GlobalConfig,
) -> ExportResult<Vec<PathBuf>> {
    let views = build_views(project, params)?;
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(views.len());
    for view_mesh in &views {
        let report = EdgeReport::analyze(view_mesh.mesh(), config.weld_tolerance);
        if !report.is_closed() {
            warn!(view = %view_mesh.view(), ?report, "View mesh is not closed");
        }

        let path = dir.join(view_mesh.view().file_name(MESH_EXTENSION));
        save_stl(view_mesh.mesh(), &path, format)?;
        info!(
            path = %path.display(),
            triangles = view_mesh.mesh().triangle_count(),
            "Wrote STL"
        );
        written.push(path);
    }
    Ok(written)
}

/// Writes the OpenSCAD script of a project to `path`.
pub fn export_scad(
    project: &ShadowProject,
    params: &GeometryParameters,
    path: &Path,
) -> ExportResult<()> {
    let model = build_scad(project, params)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, model.to_scad())?;
    info!(
        path = %path.display(),
        primitives = model.root().primitive_count(),
        "Wrote OpenSCAD script"
    );
    Ok(())
}

/// Renders `scad` to `output` with an external OpenSCAD binary.
///
/// Runs `<binary> -o <output> <scad>` and waits for it to finish.
pub fn run_openscad(binary: &Path, scad: &Path, output: &Path) -> ExportResult<()> {
    info!(binary = %binary.display(), scad = %scad.display(), "Running OpenSCAD");
    let result = Command::new(binary)
        .arg("-o")
        .arg(output)
        .arg(scad)
        .output();

    let finished = match result {
        Ok(out) => out,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ExportError::MissingBinary {
                binary: binary.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    if !finished.status.success() {
        return Err(ExportError::OpenScadFailed {
            status: finished.status.to_string(),
            stderr: String::from_utf8_lossy(&finished.stderr).trim().to_string(),
        });
    }
    info!(output = %output.display(), "OpenSCAD render finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_openscad(
            Path::new("definitely-not-an-openscad-binary"),
            &dir.path().join("model.scad"),
            &dir.path().join("model.stl"),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::MissingBinary { .. }));
    }

    #[test]
    fn test_save_project_adds_extension() {
        let dir = tempfile::tempdir().unwrap();
        let project = ShadowProject::new(8).unwrap();
        let path = save_project(&project, &dir.path().join("heart")).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some(PROJECT_EXTENSION));
        assert_eq!(load_project(&path).unwrap(), project);
    }

    #[test]
    fn test_params_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"cell_size": 5.0, "fill_style": "solid"}"#).unwrap();
        let params = load_params(&path).unwrap();
        assert_eq!(params.cell_size, 5.0);
        assert_eq!(params.fill_style, shadow_grid::FillStyle::Solid);
        assert_eq!(params.pocket_depth, GeometryParameters::default().pocket_depth);
    }

    #[test]
    fn test_bad_params_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, "{cell_size: }").unwrap();
        assert!(matches!(load_params(&path), Err(ExportError::Json(_))));
    }
}
