//! Coordinate convention between the authoring plane and exported models.
//!
//! Points are authored in the xy plane with z = 0. Downstream 3D tools expect
//! y to be "up", so exports write `(x, z, y)`: the authoring plane lands on
//! the ground plane xz.

use crate::Point3;
use serde::{Deserialize, Serialize};

/// Swap of the y and z axes. The mapping is its own inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSwap;

impl AxisSwap {
    /// Authoring coordinates to export coordinates.
    pub fn to_export(self, p: Point3) -> Point3 {
        Point3::new(p.x, p.z, p.y)
    }

    /// Export coordinates back to authoring coordinates.
    pub fn to_authoring(self, p: Point3) -> Point3 {
        Point3::new(p.x, p.z, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_plane_maps_to_ground() {
        let p = AxisSwap.to_export(dvec3(3.0, 4.0, 0.0));
        assert_eq!(p, dvec3(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_inverse() {
        let p = dvec3(1.5, -2.0, 7.25);
        assert_eq!(AxisSwap.to_authoring(AxisSwap.to_export(p)), p);
    }

    #[test]
    fn test_swap_reverses_handedness() {
        // A reflection flips the sign of the triple product.
        let (a, b, c) = (dvec3(1.0, 0.0, 0.0), dvec3(0.0, 1.0, 0.0), dvec3(0.0, 0.0, 1.0));
        let before = a.cross(b).dot(c);
        let after = AxisSwap
            .to_export(a)
            .cross(AxisSwap.to_export(b))
            .dot(AxisSwap.to_export(c));
        approx::assert_relative_eq!(before, -after);
    }
}
