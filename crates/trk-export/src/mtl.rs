//! Material library referenced by the OBJ `mtllib` statement.

use std::io::Write;

use trk_core::Result;

/// Write a single-material library. `texture` becomes the diffuse map when present.
pub fn write_mtl<W: Write>(writer: &mut W, material: &str, texture: Option<&str>) -> Result<()> {
    writeln!(writer, "# Track surface material")?;
    writeln!(writer, "newmtl {}", material)?;
    writeln!(writer, "Ka 1.0 1.0 1.0")?;
    writeln!(writer, "Kd 0.8 0.8 0.8")?;
    writeln!(writer, "Ks 0.0 0.0 0.0")?;
    writeln!(writer, "d 1.0")?;
    writeln!(writer, "illum 1")?;
    if let Some(texture) = texture {
        writeln!(writer, "map_Kd {}", texture)?;
    }
    Ok(())
}
