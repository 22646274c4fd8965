pub mod aabb;
pub mod axis;

pub use glam::{dvec2, dvec3, DVec2, DVec3};
pub use aabb::Aabb2;
pub use axis::AxisSwap;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
