//! Closed quad-strip mesh between two boundary curves.

use trk_core::{Result, TrackError, Validate};
use trk_math::{AxisSwap, Point2, Point3, Vector3};

/// Texture coordinates shared by every face: the corners of the unit square.
pub const TEXCOORD_PALETTE: [Point2; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(1.0, 1.0),
    Point2::new(0.0, 1.0),
];

/// One corner of a triangle. All indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub position: u32,
    pub texcoord: u32,
    pub normal: u32,
}

impl FaceCorner {
    fn new(position: usize, texcoord: u32, normal: usize) -> Self {
        Self {
            position: position as u32,
            texcoord,
            normal: normal as u32,
        }
    }
}

/// Triangulated ribbon in export coordinates.
///
/// For `n` boundary points: positions `0..n` are the inner curve and `n..2n`
/// the outer curve. Segment `i` contributes two faces and two flat normals
/// (`2i` and `2i + 1`).
#[derive(Debug, Clone, Default)]
pub struct RibbonMesh {
    pub positions: Vec<Point3>,
    pub texcoords: Vec<Point2>,
    pub normals: Vec<Vector3>,
    pub faces: Vec<[FaceCorner; 3]>,
}

impl RibbonMesh {
    /// Build the closed strip connecting `inner` and `outer`.
    ///
    /// Positions are mapped through `axes` before normals are computed, so
    /// normals follow the face winding as seen by the consumer of the export.
    pub fn from_boundaries(inner: &[Point3], outer: &[Point3], axes: AxisSwap) -> Result<Self> {
        if inner.len() != outer.len() {
            return Err(TrackError::Geometry(format!(
                "boundary curves differ in length: inner {} vs outer {}",
                inner.len(),
                outer.len()
            )));
        }

        let n = inner.len();
        let mut positions = Vec::with_capacity(2 * n);
        positions.extend(inner.iter().map(|&p| axes.to_export(p)));
        positions.extend(outer.iter().map(|&p| axes.to_export(p)));

        let mut normals = Vec::with_capacity(2 * n);
        let mut faces = Vec::with_capacity(2 * n);

        for i in 0..n {
            let next = (i + 1) % n;
            let (a, b) = (i, next);
            let (c, d) = (n + i, n + next);

            let n1 = 2 * i;
            let n2 = 2 * i + 1;
            normals.push(flat_normal(positions[a], positions[b], positions[d]));
            normals.push(flat_normal(positions[c], positions[a], positions[d]));

            // Split along the inner[i] / outer[i + 1] diagonal.
            faces.push([
                FaceCorner::new(a, 0, n1),
                FaceCorner::new(b, 1, n1),
                FaceCorner::new(d, 2, n1),
            ]);
            faces.push([
                FaceCorner::new(c, 3, n2),
                FaceCorner::new(a, 0, n2),
                FaceCorner::new(d, 2, n2),
            ]);
        }

        Ok(Self {
            positions,
            texcoords: TEXCOORD_PALETTE.to_vec(),
            normals,
            faces,
        })
    }

    /// Number of boundary segments around the loop.
    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl Validate for RibbonMesh {
    fn validate(&self) -> Result<()> {
        let (nv, nt, nn) = (
            self.positions.len() as u32,
            self.texcoords.len() as u32,
            self.normals.len() as u32,
        );
        for (f, face) in self.faces.iter().enumerate() {
            for corner in face {
                if corner.position >= nv || corner.texcoord >= nt || corner.normal >= nn {
                    return Err(TrackError::Geometry(format!(
                        "face {} references {:?} outside {} positions / {} texcoords / {} normals",
                        f, corner, nv, nt, nn
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Unit normal of triangle `(p0, p1, p2)`, or zero for a degenerate triangle.
fn flat_normal(p0: Point3, p1: Point3, p2: Point3) -> Vector3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}
