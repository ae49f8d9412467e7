//! `shadow-cube`: turn three view grids into printable geometry.
//!
//! # Commands
//!
//! - `shadow-cube new <project>` - Write an empty project file
//! - `shadow-cube stl <project>` - Write `Front.stl`, `Side.stl` and `Top.stl`
//! - `shadow-cube scad <project>` - Write an OpenSCAD script, optionally rendered
//!
//! Set `RUST_LOG=debug` for per-view details.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::constants::{
    GlobalConfig, DEFAULT_GRID_SIZE, DEFAULT_OPENSCAD_BINARY, MESH_EXTENSION, SCAD_EXTENSION,
};
use shadow_cli::{
    export_scad, export_stl, load_params, load_project, run_openscad, save_project, StlFormat,
};
use shadow_grid::{FillStyle, GeometryParameters, ShadowProject};

/// Shadow cube generator
#[derive(Parser)]
#[command(name = "shadow-cube")]
#[command(about = "Generate shadow cube geometry from view grids", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty project file
    New {
        /// Project file to create
        #[arg(name = "PROJECT")]
        project: PathBuf,

        /// Cells per side
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },

    /// Write one STL mesh per view
    Stl {
        /// `.grid` project file
        #[arg(name = "PROJECT")]
        project: PathBuf,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Write ASCII instead of binary STL
        #[arg(long)]
        ascii: bool,

        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Write the OpenSCAD script of the whole cube
    Scad {
        /// `.grid` project file
        #[arg(name = "PROJECT")]
        project: PathBuf,

        /// Script path; defaults to the project path with a `.scad` extension
        #[arg(long)]
        out: Option<PathBuf>,

        /// Render the script to STL with this OpenSCAD binary
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_OPENSCAD_BINARY)]
        openscad: Option<PathBuf>,

        #[command(flatten)]
        geometry: GeometryArgs,
    },
}

/// Geometry parameter overrides shared by the export commands.
#[derive(Args)]
struct GeometryArgs {
    /// JSON file with geometry parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Edge length of one cell in millimetres
    #[arg(long)]
    cell_size: Option<f64>,

    /// Wall between a cell edge and its cavity
    #[arg(long)]
    border_thickness: Option<f64>,

    /// Pocket depth in cells
    #[arg(long)]
    pocket_depth: Option<u32>,

    /// What selected cells become
    #[arg(long, value_enum)]
    fill_style: Option<FillArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FillArg {
    ThroughHole,
    Solid,
}

impl From<FillArg> for FillStyle {
    fn from(arg: FillArg) -> Self {
        match arg {
            FillArg::ThroughHole => FillStyle::ThroughHole,
            FillArg::Solid => FillStyle::Solid,
        }
    }
}

impl GeometryArgs {
    /// Parameter file (or defaults) with command line overrides applied.
    fn resolve(&self) -> Result<GeometryParameters> {
        let mut params = match &self.params {
            Some(path) => load_params(path)
                .with_context(|| format!("reading parameters from {}", path.display()))?,
            None => GeometryParameters::default(),
        };
        if let Some(cell_size) = self.cell_size {
            params.cell_size = cell_size;
        }
        if let Some(border_thickness) = self.border_thickness {
            params.border_thickness = border_thickness;
        }
        if let Some(pocket_depth) = self.pocket_depth {
            params.pocket_depth = pocket_depth;
        }
        if let Some(fill_style) = self.fill_style {
            params.fill_style = fill_style.into();
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadow_cube=info,shadow_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { project, size } => new_project(&project, size),
        Commands::Stl {
            project,
            out,
            ascii,
            geometry,
        } => stl(&project, &out, ascii, &geometry),
        Commands::Scad {
            project,
            out,
            openscad,
            geometry,
        } => scad(&project, out, openscad, &geometry),
    }
}

fn new_project(path: &Path, size: usize) -> Result<()> {
    let project = ShadowProject::new(size)?;
    let written = save_project(&project, path)
        .with_context(|| format!("writing project {}", path.display()))?;
    println!("{}", written.display());
    Ok(())
}

fn stl(project_path: &Path, out: &Path, ascii: bool, geometry: &GeometryArgs) -> Result<()> {
    let project = load_project(project_path)
        .with_context(|| format!("loading project {}", project_path.display()))?;
    let params = geometry.resolve()?;
    let format = if ascii { StlFormat::Ascii } else { StlFormat::Binary };

    let written = export_stl(&project, &params, out, format, &GlobalConfig::default())
        .with_context(|| format!("exporting STL files to {}", out.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn scad(
    project_path: &Path,
    out: Option<PathBuf>,
    openscad: Option<PathBuf>,
    geometry: &GeometryArgs,
) -> Result<()> {
    let project = load_project(project_path)
        .with_context(|| format!("loading project {}", project_path.display()))?;
    let params = geometry.resolve()?;
    let script = out.unwrap_or_else(|| project_path.with_extension(SCAD_EXTENSION));

    export_scad(&project, &params, &script)
        .with_context(|| format!("writing OpenSCAD script {}", script.display()))?;
    println!("{}", script.display());

    if let Some(binary) = openscad {
        let mesh = script.with_extension(MESH_EXTENSION);
        run_openscad(&binary, &script, &mesh)
            .with_context(|| format!("rendering {}", script.display()))?;
        println!("{}", mesh.display());
    }
    Ok(())
}
