//! Racetrack builder CLI
//!
//! Reads a closed control polygon from a text file and exports the track
//! ribbon without a window.
//!
//! # Usage
//!
//! ```bash
//! # Export to ~/Documents/pista.obj and ~/Documents/pontoscurva.txt
//! trk track.txt
//!
//! # Export somewhere else, with a custom configuration
//! trk --config track.toml --out-dir build/ track.txt
//!
//! # Print statistics only
//! trk --summary track.txt
//! ```

use std::path::{Path, PathBuf};
use std::process;

use trk_core::{Result, TrackConfig, TrackError};
use trk_export::{load_control_points, ExportPaths, FileExporter, TrackSink};
use trk_geometry::BoundaryPair;
use trk_math::Point3;
use trk_session::{SessionEvent, TrackSession};

fn print_usage() {
    eprintln!(
        r#"Racetrack builder CLI

USAGE:
    trk [OPTIONS] <points.txt>

ARGS:
    <points.txt>        Control points, one "x y" pair per line ('#' starts a comment)

OPTIONS:
    --config <file>     TOML configuration (defaults are used for missing keys)
    --out-dir <dir>     Export directory (default: ~/<output_subdir>)
    --summary           Print statistics without writing any file
    --help              Show this help message

ENVIRONMENT:
    RUST_LOG            Log filter, e.g. RUST_LOG=debug
"#
    );
}

struct Options {
    input: PathBuf,
    config: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    summary: bool,
}

fn parse_args(args: &[String]) -> std::result::Result<Options, String> {
    let mut input = None;
    let mut config = None;
    let mut out_dir = None;
    let mut summary = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config requires a file")?;
                config = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                let value = iter.next().ok_or("--out-dir requires a directory")?;
                out_dir = Some(PathBuf::from(value));
            }
            "--summary" => summary = true,
            other if other.starts_with("--") => return Err(format!("Unknown option {}", other)),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    return Err("Only one input file may be given".into());
                }
            }
        }
    }

    Ok(Options {
        input: input.ok_or("Missing required argument <points.txt>")?,
        config,
        out_dir,
        summary,
    })
}

/// Sink for `--summary`: the session never requests an export in that mode.
struct DryRun;

impl TrackSink for DryRun {
    fn write_mesh(&mut self, _boundaries: &BoundaryPair) -> Result<PathBuf> {
        Err(TrackError::InvalidOperation("dry run does not write meshes".into()))
    }

    fn write_points(&mut self, _curve: &[Point3]) -> Result<PathBuf> {
        Err(TrackError::InvalidOperation("dry run does not write points".into()))
    }
}

fn build_session(config: TrackConfig, input: &Path) -> Result<TrackSession> {
    let control_points = load_control_points(input)?;
    let mut session = TrackSession::new(config)?;
    for p in &control_points {
        session.handle_event(SessionEvent::ControlPointAdded {
            position: p.truncate(),
        });
    }
    session.handle_event(SessionEvent::BoundaryGenerationEnabled);
    Ok(session)
}

fn print_summary(session: &TrackSession) {
    let boundaries = session.boundaries();
    println!("Control points:   {}", session.control_points().len());
    println!("Curve samples:    {}", session.curve().len());
    println!("Boundary points:  {}", boundaries.len());
    println!("Triangles:        {}", 2 * boundaries.len());
    println!("Track width:      {}", 2.0 * session.config().half_width);
    match session.bounds() {
        Some(bounds) => {
            let size = bounds.extents();
            let center = bounds.center();
            println!(
                "Bounds:           ({:.2}, {:.2}) .. ({:.2}, {:.2})  [{:.2} x {:.2}]",
                bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y, size.x, size.y
            );
            println!("Centre:           ({:.2}, {:.2})", center.x, center.y);
        }
        None => println!("Bounds:           (empty)"),
    }
}

/// The file named by `--config` must load; without it, defaults apply.
fn load_config(options: &Options) -> Result<TrackConfig> {
    match &options.config {
        Some(path) => TrackConfig::from_file(path),
        None => Ok(TrackConfig::default()),
    }
}

fn run(options: Options) -> Result<()> {
    let config = load_config(&options)?;

    let mut session = build_session(config.clone(), &options.input)?;
    if session.control_points().len() < trk_core::config::MIN_CONTROL_POINTS {
        log::warn!(
            "Only {} control points; the track will be empty",
            session.control_points().len()
        );
    }

    if options.summary {
        session.refresh(&mut DryRun);
        print_summary(&session);
        return Ok(());
    }

    let mut exporter = match &options.out_dir {
        Some(dir) => FileExporter::new(ExportPaths::in_dir(dir, &config), &config),
        None => FileExporter::from_config(&config)?,
    };

    session.handle_event(SessionEvent::ExportPressed);
    let report = session.refresh(&mut exporter);
    let outcome = report.export.unwrap_or_default();

    match (&outcome.mesh, &outcome.points) {
        (Some(mesh), Some(points)) => {
            println!("Mesh:   {}", mesh.display());
            println!("Points: {}", points.display());
            Ok(())
        }
        _ => Err(TrackError::InvalidOperation(format!(
            "export to {} did not complete",
            exporter.paths().dir.display()
        ))),
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        process::exit(0);
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
