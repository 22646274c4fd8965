//! Session state for interactive track authoring.
//!
//! The front end feeds [`SessionEvent`]s and calls [`TrackSession::refresh`]
//! once per displayed frame. Pipeline stages only rerun when their inputs
//! changed, and an export runs once per press of the export key.

use std::path::PathBuf;

use trk_core::config::MIN_CONTROL_POINTS;
use trk_core::{Result, TrackConfig, Validate};
use trk_export::TrackSink;
use trk_geometry::{evaluate_closed_bspline, generate_boundaries, BoundaryPair};
use trk_math::{Aabb2, DVec2, Point3};

use crate::event::{EdgeTrigger, SessionEvent};

/// Read-only views handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct DisplayBuffers<'a> {
    pub control_polygon: &'a [Point3],
    pub curve: &'a [Point3],
    pub inner: &'a [Point3],
    pub outer: &'a [Point3],
}

/// Paths written by one export. `None` marks an abandoned write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOutcome {
    pub mesh: Option<PathBuf>,
    pub points: Option<PathBuf>,
}

/// What one [`TrackSession::refresh`] call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub curve_recomputed: bool,
    pub boundaries_recomputed: bool,
    pub export: Option<ExportOutcome>,
}

pub struct TrackSession {
    config: TrackConfig,
    control_points: Vec<Point3>,
    curve: Vec<Point3>,
    boundaries: BoundaryPair,
    boundaries_enabled: bool,
    export_trigger: EdgeTrigger,
    curve_dirty: bool,
    boundaries_dirty: bool,
}

impl TrackSession {
    /// Create an empty session. The configuration is validated up front.
    pub fn new(config: TrackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            control_points: Vec::new(),
            curve: Vec::new(),
            boundaries: BoundaryPair::default(),
            boundaries_enabled: false,
            export_trigger: EdgeTrigger::default(),
            curve_dirty: false,
            boundaries_dirty: false,
        })
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Replace the configuration; the curve and boundaries are recomputed on the next refresh.
    ///
    /// Only `samples_per_segment` and `half_width` affect the session. Output
    /// directory, file names and material settings belong to the [`TrackSink`]
    /// and are fixed when it is built; build a new sink to change them.
    pub fn set_config(&mut self, config: TrackConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.curve_dirty = true;
        Ok(())
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ControlPointAdded { position } => self.add_control_point(position),
            SessionEvent::BoundaryGenerationEnabled => {
                if !self.boundaries_enabled {
                    log::debug!("Boundary generation enabled");
                    self.boundaries_enabled = true;
                    self.boundaries_dirty = true;
                }
            }
            SessionEvent::ExportPressed => self.export_trigger.press(),
            SessionEvent::ExportReleased => self.export_trigger.release(),
        }
    }

    /// Append a control point on the authoring plane.
    pub fn add_control_point(&mut self, position: DVec2) {
        self.control_points.push(position.extend(0.0));
        self.curve_dirty = true;
    }

    /// Bring the derived geometry up to date and run a pending export.
    ///
    /// Export failures are logged and reported in the outcome; they never
    /// end the session.
    pub fn refresh(&mut self, sink: &mut dyn TrackSink) -> RefreshReport {
        let mut report = RefreshReport::default();

        if self.curve_dirty {
            self.curve = if self.control_points.len() >= MIN_CONTROL_POINTS {
                evaluate_closed_bspline(&self.control_points, self.config.samples_per_segment)
            } else {
                Vec::new()
            };
            log::debug!(
                "Curve recomputed: {} control points -> {} samples",
                self.control_points.len(),
                self.curve.len()
            );
            self.curve_dirty = false;
            self.boundaries_dirty = true;
            report.curve_recomputed = true;
        }

        if !self.boundaries_enabled {
            return report;
        }

        if self.boundaries_dirty {
            self.boundaries = generate_boundaries(&self.curve, self.config.half_width);
            self.boundaries_dirty = false;
            report.boundaries_recomputed = true;
        }

        if self.export_trigger.take() {
            report.export = Some(self.export(sink));
        }

        report
    }

    fn export(&self, sink: &mut dyn TrackSink) -> ExportOutcome {
        let mesh = match sink.write_mesh(&self.boundaries) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Mesh export abandoned: {}", e);
                None
            }
        };
        let points = match sink.write_points(&self.curve) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Curve point export abandoned: {}", e);
                None
            }
        };
        ExportOutcome { mesh, points }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn curve(&self) -> &[Point3] {
        &self.curve
    }

    pub fn boundaries(&self) -> &BoundaryPair {
        &self.boundaries
    }

    pub fn boundaries_enabled(&self) -> bool {
        self.boundaries_enabled
    }

    pub fn display(&self) -> DisplayBuffers<'_> {
        let (inner, outer): (&[Point3], &[Point3]) = if self.boundaries_enabled {
            (&self.boundaries.inner, &self.boundaries.outer)
        } else {
            (&[], &[])
        };
        DisplayBuffers {
            control_polygon: &self.control_points,
            curve: &self.curve,
            inner,
            outer,
        }
    }

    /// Bounds of everything currently displayed, on the authoring plane.
    pub fn bounds(&self) -> Option<Aabb2> {
        let view = self.display();
        [view.control_polygon, view.curve, view.inner, view.outer]
            .into_iter()
            .filter_map(Aabb2::from_points)
            .reduce(|a, b| a.merge(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trk_math::dvec2;

    #[derive(Default)]
    struct CountingSink {
        meshes: usize,
        points: usize,
    }

    impl TrackSink for CountingSink {
        fn write_mesh(&mut self, _boundaries: &BoundaryPair) -> Result<PathBuf> {
            self.meshes += 1;
            Ok(PathBuf::from("mesh"))
        }

        fn write_points(&mut self, _curve: &[Point3]) -> Result<PathBuf> {
            self.points += 1;
            Ok(PathBuf::from("points"))
        }
    }

    fn square_session() -> TrackSession {
        let mut session = TrackSession::new(TrackConfig::default()).unwrap();
        for p in [dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, 10.0), dvec2(0.0, 10.0)] {
            session.handle_event(SessionEvent::ControlPointAdded { position: p });
        }
        session
    }

    #[test]
    fn test_curve_needs_four_points() {
        let mut session = TrackSession::new(TrackConfig::default()).unwrap();
        let mut sink = CountingSink::default();
        for p in [dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, 10.0)] {
            session.add_control_point(p);
        }
        session.refresh(&mut sink);
        assert!(session.curve().is_empty());

        session.add_control_point(dvec2(0.0, 10.0));
        session.refresh(&mut sink);
        assert_eq!(session.curve().len(), 4 * 101);
    }

    #[test]
    fn test_refresh_is_cached() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        assert!(session.refresh(&mut sink).curve_recomputed);
        assert!(!session.refresh(&mut sink).curve_recomputed);
    }

    #[test]
    fn test_boundaries_only_when_enabled() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        session.refresh(&mut sink);
        assert!(session.boundaries().is_empty());
        assert!(session.display().inner.is_empty());

        session.handle_event(SessionEvent::BoundaryGenerationEnabled);
        let report = session.refresh(&mut sink);
        assert!(report.boundaries_recomputed);
        assert_eq!(session.boundaries().len(), 202);
        assert_eq!(session.display().outer.len(), 202);
    }

    #[test]
    fn test_export_once_per_press() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        session.handle_event(SessionEvent::BoundaryGenerationEnabled);
        session.handle_event(SessionEvent::ExportPressed);

        let report = session.refresh(&mut sink);
        assert!(report.export.is_some());
        for _ in 0..5 {
            session.handle_event(SessionEvent::ExportPressed);
            assert!(session.refresh(&mut sink).export.is_none());
        }
        assert_eq!((sink.meshes, sink.points), (1, 1));

        session.handle_event(SessionEvent::ExportReleased);
        session.handle_event(SessionEvent::ExportPressed);
        session.refresh(&mut sink);
        assert_eq!((sink.meshes, sink.points), (2, 2));
    }

    #[test]
    fn test_export_waits_for_boundaries() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        session.handle_event(SessionEvent::ExportPressed);
        assert!(session.refresh(&mut sink).export.is_none());
        assert_eq!(sink.meshes, 0);

        session.handle_event(SessionEvent::BoundaryGenerationEnabled);
        assert!(session.refresh(&mut sink).export.is_some());
        assert_eq!(sink.meshes, 1);
    }

    #[test]
    fn test_set_config_recomputes() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        session.refresh(&mut sink);

        let config = TrackConfig {
            samples_per_segment: 10,
            ..TrackConfig::default()
        };
        session.set_config(config).unwrap();
        assert!(session.refresh(&mut sink).curve_recomputed);
        assert_eq!(session.curve().len(), 44);

        let bad = TrackConfig {
            half_width: 0.0,
            ..TrackConfig::default()
        };
        assert!(session.set_config(bad).is_err());
        assert_eq!(session.config().samples_per_segment, 10);
    }

    #[test]
    fn test_set_config_changes_width() {
        let mut session = square_session();
        let mut sink = CountingSink::default();
        session.handle_event(SessionEvent::BoundaryGenerationEnabled);
        session.refresh(&mut sink);
        assert!((session.boundaries().width_at(0) - 20.0).abs() < 1e-9);

        let config = TrackConfig {
            half_width: 3.0,
            mesh_file_name: "other.obj".into(),
            ..TrackConfig::default()
        };
        session.set_config(config).unwrap();
        let report = session.refresh(&mut sink);
        assert!(report.boundaries_recomputed);
        assert!((session.boundaries().width_at(0) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds() {
        let mut session = TrackSession::new(TrackConfig::default()).unwrap();
        assert!(session.bounds().is_none());

        let mut session2 = square_session();
        let mut sink = CountingSink::default();
        session2.refresh(&mut sink);
        let bounds = session2.bounds().unwrap();
        assert_eq!(bounds.min, dvec2(0.0, 0.0));
        assert_eq!(bounds.max, dvec2(10.0, 10.0));

        // Boundaries extend past the control polygon.
        session2.handle_event(SessionEvent::BoundaryGenerationEnabled);
        session2.refresh(&mut sink);
        let wide = session2.bounds().unwrap();
        assert!(wide.min.x < 0.0 && wide.max.y > 10.0);

        session.add_control_point(dvec2(3.0, 4.0));
        assert_eq!(session.bounds().unwrap().min, dvec2(3.0, 4.0));
    }
}
