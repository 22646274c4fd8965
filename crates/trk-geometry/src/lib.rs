//! Racetrack geometry: the closed centre-line spline and its boundary curves.

pub mod curve;
pub mod offset;

pub use curve::{evaluate_closed_bspline, ClosedBSpline};
pub use offset::{generate_boundaries, BoundaryPair};
