//! Runtime configuration for the track pipeline.
//!
//! The `const` values are the defaults used when a key is missing from the
//! TOML file or when no file is present at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};
use crate::traits::Validate;

/// Parameter steps per spline window (t advances by `1 / SAMPLES_PER_SEGMENT`).
pub const SAMPLES_PER_SEGMENT: usize = 100;
/// Distance from the centre line to each track boundary.
pub const HALF_WIDTH: f64 = 10.0;
/// Minimum control polygon length for a closed cubic B-spline.
pub const MIN_CONTROL_POINTS: usize = 4;

pub const OUTPUT_SUBDIR: &str = "Documents";
pub const MESH_FILE_NAME: &str = "pista.obj";
pub const POINTS_FILE_NAME: &str = "pontoscurva.txt";
pub const MATERIAL_LIB: &str = "pista.mtl";
pub const GROUP_NAME: &str = "pista";
pub const MATERIAL_NAME: &str = "pista_material";

/// All tunable pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Parameter steps per spline window; each window yields `samples_per_segment + 1` points.
    pub samples_per_segment: usize,
    /// Offset magnitude K; inner and outer boundaries end up `2 * half_width` apart.
    pub half_width: f64,
    /// Export directory, relative to the user's home directory.
    pub output_subdir: String,
    pub mesh_file_name: String,
    pub points_file_name: String,
    /// File name referenced by the `mtllib` statement.
    pub material_lib: String,
    pub group_name: String,
    pub material_name: String,
    /// Also write the material library next to the mesh.
    pub write_material: bool,
    /// Optional diffuse texture referenced from the material library.
    pub texture_file: Option<String>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            half_width: HALF_WIDTH,
            output_subdir: OUTPUT_SUBDIR.to_string(),
            mesh_file_name: MESH_FILE_NAME.to_string(),
            points_file_name: POINTS_FILE_NAME.to_string(),
            material_lib: MATERIAL_LIB.to_string(),
            group_name: GROUP_NAME.to_string(),
            material_name: MATERIAL_NAME.to_string(),
            write_material: true,
            texture_file: None,
        }
    }
}

impl TrackConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. A missing, unreadable or invalid file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrackError::Config(format!("cannot read configuration {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

impl Validate for TrackConfig {
    fn validate(&self) -> Result<()> {
        if self.samples_per_segment == 0 {
            return Err(TrackError::Config(
                "samples_per_segment must be at least 1".into(),
            ));
        }
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(TrackError::Config(format!(
                "half_width must be a positive finite number, got {}",
                self.half_width
            )));
        }
        let names = [
            ("mesh_file_name", &self.mesh_file_name),
            ("points_file_name", &self.points_file_name),
            ("material_lib", &self.material_lib),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(TrackError::Config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}
