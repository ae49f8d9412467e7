use std::fs;

use config::constants::{GlobalConfig, STL_HEADER_SIZE, STL_TRIANGLE_SIZE};
use shadow_cli::{export_scad, export_stl, load_project, save_project, ExportError, StlFormat};
use shadow_grid::{GeometryParameters, GridError, ShadowProject, View};

fn sample_project() -> ShadowProject {
    let mut project = ShadowProject::new(8).unwrap();
    project.grid_mut(View::Top).set(3, 4, true);
    project.grid_mut(View::Front).set(2, 2, true);
    project
}

#[test]
fn writes_one_binary_stl_per_view() {
    let dir = tempfile::tempdir().unwrap();
    let written = export_stl(
        &sample_project(),
        &GeometryParameters::default(),
        dir.path(),
        StlFormat::Binary,
        &GlobalConfig::default(),
    )
    .unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["Front.stl", "Side.stl", "Top.stl"]);

    for path in &written {
        let bytes = fs::read(path).unwrap();
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
        assert_eq!(bytes.len(), STL_HEADER_SIZE + 4 + count * STL_TRIANGLE_SIZE);
    }

    // The Side grid is all false: 36 pocket cells
    let side = fs::read(&written[1]).unwrap();
    assert_eq!(u32::from_le_bytes(side[80..84].try_into().unwrap()), 1472);
}

#[test]
fn writes_ascii_stl() {
    let dir = tempfile::tempdir().unwrap();
    let written = export_stl(
        &sample_project(),
        &GeometryParameters::default(),
        dir.path(),
        StlFormat::Ascii,
        &GlobalConfig::default(),
    )
    .unwrap();

    let text = fs::read_to_string(&written[2]).unwrap();
    assert!(text.starts_with("solid mesh"));
    assert_eq!(text.matches("endfacet").count(), text.matches("facet normal").count());
}

#[test]
fn invalid_parameters_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("meshes");
    let params = GeometryParameters {
        border_thickness: 2.0,
        ..GeometryParameters::default()
    };
    let err = export_stl(
        &sample_project(),
        &params,
        &out,
        StlFormat::Binary,
        &GlobalConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ExportError::Mesh(_)));
    assert!(!out.exists());
}

#[test]
fn writes_openscad_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("nested").join("cube.scad");
    export_scad(&sample_project(), &GeometryParameters::default(), &script).unwrap();

    let text = fs::read_to_string(&script).unwrap();
    assert!(text.starts_with("difference() {"));
    assert!(text.contains("cube([24, 24, 24]);"));
}

#[test]
fn project_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let project = sample_project();
    let path = save_project(&project, &dir.path().join("sample.grid")).unwrap();
    assert_eq!(load_project(&path).unwrap(), project);
}

#[test]
fn malformed_project_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.grid");
    fs::write(&path, r#"{"grid_size": 8}"#).unwrap();
    assert!(matches!(load_project(&path), Err(ExportError::Grid(_))));
}

#[test]
fn mismatched_views_are_inconsistent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mismatch.grid");
    let json = serde_json::json!({
        "grid_size": 8,
        "grid_cells": {
            "Top": vec![vec![false; 8]; 8],
            "Front": vec![vec![false; 9]; 9],
            "Side": vec![vec![false; 8]; 8],
        },
    });
    fs::write(&path, json.to_string()).unwrap();
    assert!(matches!(
        load_project(&path),
        Err(ExportError::Grid(GridError::InconsistentGrid {
            view: Some(View::Front),
            ..
        }))
    ));
}
