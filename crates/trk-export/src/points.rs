//! Plain-text point files.
//!
//! The dump written by [`write_points`] holds one `x z y` line per curve
//! sample. Control point files read by [`read_control_points`] hold one `x y`
//! pair per line; blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use trk_core::{Result, TrackError};
use trk_math::{AxisSwap, Point3};

/// Write `samples` in export axis order, one point per line.
pub fn write_points<W: Write>(writer: &mut W, samples: &[Point3], axes: AxisSwap) -> Result<()> {
    for p in samples {
        let q = axes.to_export(*p);
        writeln!(writer, "{} {} {}", q.x, q.y, q.z)?;
    }
    Ok(())
}

/// Read authoring-plane control points (z = 0).
pub fn read_control_points<R: BufRead>(reader: R) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(TrackError::Parse(format!(
                "line {}: expected 2 coordinates, found {}",
                index + 1,
                fields.len()
            )));
        }

        let x = parse_coordinate(fields[0], index + 1)?;
        let y = parse_coordinate(fields[1], index + 1)?;
        points.push(Point3::new(x, y, 0.0));
    }
    Ok(points)
}

/// Read control points from a file on disk.
pub fn load_control_points(path: &Path) -> Result<Vec<Point3>> {
    let file = File::open(path)?;
    let points = read_control_points(BufReader::new(file))?;
    log::info!("Read {} control points from {}", points.len(), path.display());
    Ok(points)
}

fn parse_coordinate(field: &str, line: usize) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|e| TrackError::Parse(format!("line {}: invalid coordinate {:?}: {}", line, field, e)))?;
    if !value.is_finite() {
        return Err(TrackError::Parse(format!(
            "line {}: coordinate {:?} is not finite",
            line, field
        )));
    }
    Ok(value)
}
