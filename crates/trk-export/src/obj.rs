//! Wavefront OBJ serialization of a [`RibbonMesh`].
//!
//! Layout: header, `v` positions (inner then outer), the fixed `vt` palette,
//! one `vn` per face, then `f v/vt/vn` triplets. OBJ indices are 1-based.

use std::io::Write;

use trk_core::{Result, TrackConfig};
use trk_mesh::RibbonMesh;

/// Names written into the OBJ header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjHeader {
    pub material_lib: String,
    pub group: String,
    pub material: String,
}

impl ObjHeader {
    pub fn from_config(config: &TrackConfig) -> Self {
        Self {
            material_lib: config.material_lib.clone(),
            group: config.group_name.clone(),
            material: config.material_name.clone(),
        }
    }
}

impl Default for ObjHeader {
    fn default() -> Self {
        Self::from_config(&TrackConfig::default())
    }
}

/// Write `mesh` as a single OBJ object.
pub fn write_obj<W: Write>(writer: &mut W, mesh: &RibbonMesh, header: &ObjHeader) -> Result<()> {
    writeln!(writer, "# Track ribbon: {} segments", mesh.segment_count())?;
    writeln!(writer, "mtllib {}", header.material_lib)?;
    writeln!(writer, "g {}", header.group)?;
    writeln!(writer, "usemtl {}", header.material)?;
    writeln!(writer)?;

    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for uv in &mesh.texcoords {
        writeln!(writer, "vt {:.1} {:.1}", uv.x, uv.y)?;
    }

    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for face in &mesh.faces {
        write!(writer, "f")?;
        for corner in face {
            write!(
                writer,
                " {}/{}/{}",
                corner.position + 1,
                corner.texcoord + 1,
                corner.normal + 1
            )?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trk_math::{AxisSwap, DVec3};

    fn triangle_ring() -> RibbonMesh {
        let inner = vec![
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
        ];
        let outer: Vec<_> = inner.iter().map(|&p| p * 3.0).collect();
        RibbonMesh::from_boundaries(&inner, &outer, AxisSwap).unwrap()
    }

    fn render(mesh: &RibbonMesh) -> String {
        let mut buf = Vec::new();
        write_obj(&mut buf, mesh, &ObjHeader::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let text = render(&triangle_ring());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with('#'));
        assert_eq!(lines[1], "mtllib pista.mtl");
        assert_eq!(lines[2], "g pista");
        assert_eq!(lines[3], "usemtl pista_material");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_texcoord_palette() {
        let text = render(&triangle_ring());
        let vt: Vec<&str> = text.lines().filter(|l| l.starts_with("vt ")).collect();
        assert_eq!(vt, ["vt 0.0 0.0", "vt 1.0 0.0", "vt 1.0 1.0", "vt 0.0 1.0"]);
    }

    #[test]
    fn test_vertex_lines_are_axis_swapped() {
        let text = render(&triangle_ring());
        let first_v = text.lines().find(|l| l.starts_with("v ")).unwrap();
        assert_eq!(first_v, "v 0 0 1");
    }

    #[test]
    fn test_face_lines_are_one_based() {
        let text = render(&triangle_ring());
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0], "f 1/1/1 2/2/1 5/3/1");
        assert_eq!(faces[1], "f 4/4/2 1/1/2 5/3/2");
        // Last segment wraps to the first inner and outer vertices.
        assert_eq!(faces[4], "f 3/1/5 1/2/5 4/3/5");
        assert_eq!(faces[5], "f 6/4/6 3/1/6 4/3/6");
    }

    #[test]
    fn test_custom_header() {
        let header = ObjHeader {
            material_lib: "circuit.mtl".into(),
            group: "circuit".into(),
            material: "asphalt".into(),
        };
        let mut buf = Vec::new();
        write_obj(&mut buf, &triangle_ring(), &header).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("mtllib circuit.mtl\ng circuit\nusemtl asphalt\n"));
    }
}
