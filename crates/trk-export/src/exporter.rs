//! File-backed export of a finished track.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use trk_core::{Result, TrackConfig, Validate};
use trk_geometry::BoundaryPair;
use trk_math::{AxisSwap, Point3};
use trk_mesh::RibbonMesh;

use crate::destination::ExportPaths;
use crate::mtl::write_mtl;
use crate::obj::{write_obj, ObjHeader};
use crate::points::write_points;

/// Destination for the two export artifacts of a session.
pub trait TrackSink {
    /// Triangulate and persist the ribbon between the boundaries.
    fn write_mesh(&mut self, boundaries: &BoundaryPair) -> Result<PathBuf>;

    /// Persist the raw centre-line samples.
    fn write_points(&mut self, curve: &[Point3]) -> Result<PathBuf>;
}

/// Writes the OBJ, MTL and point dump into an [`ExportPaths`] directory.
#[derive(Debug, Clone)]
pub struct FileExporter {
    paths: ExportPaths,
    header: ObjHeader,
    write_material: bool,
    texture: Option<String>,
    axes: AxisSwap,
}

impl FileExporter {
    pub fn new(paths: ExportPaths, config: &TrackConfig) -> Self {
        Self {
            paths,
            header: ObjHeader::from_config(config),
            write_material: config.write_material,
            texture: config.texture_file.clone(),
            axes: AxisSwap,
        }
    }

    /// Exporter targeting `<home>/<output_subdir>`. Fails if the home directory is unknown.
    pub fn from_config(config: &TrackConfig) -> Result<Self> {
        Ok(Self::new(ExportPaths::resolve(config)?, config))
    }

    pub fn paths(&self) -> &ExportPaths {
        &self.paths
    }
}

impl TrackSink for FileExporter {
    fn write_mesh(&mut self, boundaries: &BoundaryPair) -> Result<PathBuf> {
        let mesh = RibbonMesh::from_boundaries(&boundaries.inner, &boundaries.outer, self.axes)?;
        mesh.validate()?;

        write_whole_file(&self.paths.mesh, |w| write_obj(w, &mesh, &self.header))?;
        log::info!(
            "Exported {} triangles to {}",
            mesh.triangle_count(),
            self.paths.mesh.display()
        );

        if self.write_material {
            let texture = self.texture.as_deref();
            match write_whole_file(&self.paths.material, |w| write_mtl(w, &self.header.material, texture)) {
                Ok(()) => log::debug!("Material library written to {}", self.paths.material.display()),
                Err(e) => log::warn!(
                    "Could not write material library {}: {}",
                    self.paths.material.display(),
                    e
                ),
            }
        }

        Ok(self.paths.mesh.clone())
    }

    fn write_points(&mut self, curve: &[Point3]) -> Result<PathBuf> {
        write_whole_file(&self.paths.points, |w| write_points(w, curve, self.axes))?;
        log::info!(
            "Wrote {} curve points to {}",
            curve.len(),
            self.paths.points.display()
        );
        Ok(self.paths.points.clone())
    }
}

/// Write through a sibling `.partial` file and rename it into place, so `path`
/// is either left untouched or fully written.
fn write_whole_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    let result = write_and_rename(&partial, path, write);
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

fn write_and_rename<F>(partial: &Path, path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(partial)?);
    write(&mut writer)?;
    writer.flush()?;
    drop(writer);
    fs::rename(partial, path)?;
    Ok(())
}
