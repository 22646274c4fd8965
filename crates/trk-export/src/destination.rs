//! Where exports land: a fixed subdirectory of the user's home directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use trk_core::{Result, TrackConfig, TrackError};

/// Resolve the user's home directory from the environment.
///
/// An unset or empty `HOME` (`USERPROFILE` on Windows) is a configuration error.
pub fn home_dir() -> Result<PathBuf> {
    home_dir_from(|key| std::env::var_os(key))
}

/// [`home_dir`] over an arbitrary variable lookup. `HOME` takes precedence.
pub fn home_dir_from<F>(lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
    non_empty("HOME")
        .or_else(|| non_empty("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or_else(|| {
            TrackError::Config("home directory is not set; cannot resolve export destination".into())
        })
}

/// Output file locations for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub dir: PathBuf,
    pub mesh: PathBuf,
    pub points: PathBuf,
    pub material: PathBuf,
}

impl ExportPaths {
    /// `<home>/<output_subdir>/<file names from config>`.
    pub fn resolve(config: &TrackConfig) -> Result<Self> {
        Ok(Self::resolve_in(&home_dir()?, config))
    }

    /// Like [`ExportPaths::resolve`] with an explicit home directory.
    pub fn resolve_in(home: &Path, config: &TrackConfig) -> Self {
        Self::in_dir(&home.join(&config.output_subdir), config)
    }

    /// Place the configured file names in an explicit directory.
    pub fn in_dir(dir: &Path, config: &TrackConfig) -> Self {
        Self {
            dir: dir.to_path_buf(),
            mesh: dir.join(&config.mesh_file_name),
            points: dir.join(&config.points_file_name),
            material: dir.join(&config.material_lib),
        }
    }
}
