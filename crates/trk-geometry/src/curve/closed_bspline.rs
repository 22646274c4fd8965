//! Closed uniform cubic B-spline over a cyclic control polygon.

use serde::{Deserialize, Serialize};
use trk_core::config::MIN_CONTROL_POINTS;
use trk_core::{Result, TrackError};
use trk_math::Point3;

/// Uniform cubic B-spline blending weights at local parameter `t`, scaled by 6.
///
/// The weights sum to 6 for every `t`; divide the blended point by 6.
pub fn blend_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -t3 + 3.0 * t2 - 3.0 * t + 1.0,
        3.0 * t3 - 6.0 * t2 + 4.0,
        -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0,
        t3,
    ]
}

/// A closed cubic B-spline. Window `i` is controlled by points `i..i+4` (cyclic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedBSpline {
    control_points: Vec<Point3>,
}

impl ClosedBSpline {
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() < MIN_CONTROL_POINTS {
            return Err(TrackError::Geometry(format!(
                "closed cubic B-spline needs at least {} control points, got {}",
                MIN_CONTROL_POINTS,
                control_points.len()
            )));
        }
        Ok(Self { control_points })
    }

    /// Number of spline windows (equal to the number of control points).
    pub fn window_count(&self) -> usize {
        self.control_points.len()
    }

    /// The four control points of window `i`, wrapping around the polygon.
    pub fn window(&self, i: usize) -> [Point3; 4] {
        let n = self.control_points.len();
        [
            self.control_points[i % n],
            self.control_points[(i + 1) % n],
            self.control_points[(i + 2) % n],
            self.control_points[(i + 3) % n],
        ]
    }

    /// Sample every window at `t = k / steps` for `k` in `0..=steps`.
    ///
    /// Consecutive windows share an endpoint, so the output holds
    /// `n * (steps + 1)` points and the junctions appear twice.
    pub fn samples(&self, steps: usize) -> Vec<Point3> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(self.window_count() * (steps + 1));
        for i in 0..self.window_count() {
            let window = self.window(i);
            for k in 0..=steps {
                let t = k as f64 / steps as f64;
                points.push(blend(&window, blend_weights(t)));
            }
        }
        points
    }
}

fn blend(window: &[Point3; 4], weights: [f64; 4]) -> Point3 {
    let [p0, p1, p2, p3] = *window;
    let [b0, b1, b2, b3] = weights;
    (b0 * p0 + b1 * p1 + b2 * p2 + b3 * p3) / 6.0
}

/// Evaluate the closed spline of `control_points` with `steps` parameter steps per window.
///
/// Fewer than four control points produce an empty curve.
pub fn evaluate_closed_bspline(control_points: &[Point3], steps: usize) -> Vec<Point3> {
    match ClosedBSpline::new(control_points.to_vec()) {
        Ok(spline) => spline.samples(steps),
        Err(_) => Vec::new(),
    }
}
