//! Centre-line curves.

mod closed_bspline;

pub use closed_bspline::{blend_weights, evaluate_closed_bspline, ClosedBSpline};
