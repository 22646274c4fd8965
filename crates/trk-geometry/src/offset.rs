//! Inner and outer track boundaries from centre-line samples.
//!
//! Every other sample is offset along the in-plane perpendicular of the chord
//! to the sample two steps ahead. The chord stands in for the tangent; its
//! left perpendicular `(-dy, dx)` is the direction `atan2(dy, dx) + pi/2`.

use serde::{Deserialize, Serialize};
use trk_math::{DVec2, Point3};

/// The two boundary curves of the track, index-aligned and cyclic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPair {
    /// Boundary on the left of the travel direction.
    pub inner: Vec<Point3>,
    /// Boundary on the right of the travel direction.
    pub outer: Vec<Point3>,
}

impl BoundaryPair {
    /// Number of points on each boundary.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Distance between the paired points at `i`.
    pub fn width_at(&self, i: usize) -> f64 {
        self.inner[i].distance(self.outer[i])
    }
}

/// Offset the even-indexed `samples` by `half_width` to both sides.
///
/// The output has `ceil(samples.len() / 2)` points per boundary. All output
/// points lie on the authoring plane (z = 0).
pub fn generate_boundaries(samples: &[Point3], half_width: f64) -> BoundaryPair {
    let m = samples.len();
    let count = m.div_ceil(2);
    let mut pair = BoundaryPair {
        inner: Vec::with_capacity(count),
        outer: Vec::with_capacity(count),
    };

    let mut last_normal: Option<DVec2> = None;
    let mut degenerate = 0usize;

    for i in (0..m).step_by(2) {
        let a = samples[i].truncate();
        let b = samples[(i + 2) % m].truncate();

        let normal = match (b - a).perp().try_normalize() {
            Some(n) => n,
            None => {
                // Coincident samples: keep the previous direction.
                degenerate += 1;
                last_normal.unwrap_or(DVec2::Y)
            }
        };
        last_normal = Some(normal);

        let c = normal * half_width;
        pair.inner.push((a + c).extend(0.0));
        pair.outer.push((a - c).extend(0.0));
    }

    if degenerate > 0 {
        log::debug!(
            "{} of {} boundary points had a zero-length chord",
            degenerate,
            count
        );
    }

    pair
}
