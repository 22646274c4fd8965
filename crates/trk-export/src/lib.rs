//! Racetrack export: the textured ribbon as Wavefront OBJ (plus its material
//! library) and the raw centre-line samples as a plain point dump.

pub mod destination;
pub mod exporter;
pub mod mtl;
pub mod obj;
pub mod points;

pub use destination::{home_dir, home_dir_from, ExportPaths};
pub use exporter::{FileExporter, TrackSink};
pub use obj::{write_obj, ObjHeader};
pub use points::{load_control_points, read_control_points, write_points};
