//! Ray diagram geometry for a single refraction event.
//!
//! This module turns the angles produced by the solver into plain 2D
//! geometry: the incident, reflected and refracted rays as line segments and
//! one arc per ray marking its angle to the surface normal. Nothing here
//! draws; a renderer maps the geometry to primitives.
//!
//! The diagram provides:
//! - A fixed canvas with the interface point at its centre
//! - Rays of fixed length on both sides of the interface
//! - Angle arcs derived from the vector angle of each ray
//! - The surface and normal guide lines
//!
//! # Coordinate Frame
//!
//! Canvas coordinates, `x` to the right and `y` downward, as in an SVG view
//! box. The interface runs horizontally through the centre. The incident
//! and reflected rays live in the upper half (`y < cy`), the refracted ray
//! in the lower half (`y > cy`).

use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Canvas width.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas height.
pub const CANVAS_HEIGHT: f64 = 360.0;
/// Length of every ray from the interface point.
pub const RAY_LENGTH: f64 = 420.0;
/// Radius of the angle arcs.
pub const ARC_RADIUS: f64 = 44.0;
/// Distance of the angle labels beyond the arc radius.
pub const LABEL_OFFSET: f64 = 14.0;
/// Half length of the dashed normal guide.
pub const NORMAL_HALF_LENGTH: f64 = 120.0;

#[cfg(test)]
mod tests {

    use super::*;
    use crate::snell::solve;
    use approx::assert_abs_diff_eq;

    fn diagram_for(n1: f64, n2: f64, angle: f64) -> Diagram {
        let result = solve(n1, n2, angle);
        layout(angle, result.refracted_angle, result.total_internal_reflection)
    }

    #[test]
    fn normal_incidence_is_vertical() {
        let diagram = diagram_for(1.0, 1.5, 0.0);
        let o = diagram.origin;
        assert_abs_diff_eq!(diagram.incident.start.x, o.x);
        assert_abs_diff_eq!(diagram.incident.start.y, o.y - RAY_LENGTH);
        let refracted = diagram.refracted.unwrap();
        assert_abs_diff_eq!(refracted.end.x, o.x);
        assert_abs_diff_eq!(refracted.end.y, o.y + RAY_LENGTH);
        assert_abs_diff_eq!(diagram.incident_arc.sweep(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn reflected_ray_mirrors_incident_ray() {
        let diagram = diagram_for(1.0003, 1.333, 30.0);
        let o = diagram.origin;
        assert_abs_diff_eq!(diagram.reflected.end.x - o.x, o.x - diagram.incident.start.x, epsilon = 1e-9);
        assert_abs_diff_eq!(diagram.reflected.end.y, diagram.incident.start.y, epsilon = 1e-9);
        assert!(diagram.reflected.end.y < o.y);
        assert_eq!(diagram.incident.end, o);
        assert_eq!(diagram.reflected.start, o);
    }

    #[test]
    fn rays_have_fixed_length() {
        let diagram = diagram_for(1.0, 2.42, 72.5);
        assert_abs_diff_eq!(diagram.incident.length(), RAY_LENGTH, epsilon = 1e-9);
        assert_abs_diff_eq!(diagram.reflected.length(), RAY_LENGTH, epsilon = 1e-9);
        assert_abs_diff_eq!(diagram.refracted.unwrap().length(), RAY_LENGTH, epsilon = 1e-9);
    }

    #[test]
    fn refracted_ray_crosses_the_interface() {
        let diagram = diagram_for(1.0003, 1.333, 30.0);
        let refracted = diagram.refracted.unwrap();
        assert!(refracted.end.y > diagram.origin.y);
        assert!(refracted.end.x > diagram.origin.x);
    }

    #[test]
    fn arcs_span_the_ray_angles() {
        let result = solve(1.0003, 1.333, 30.0);
        let diagram = layout(30.0, result.refracted_angle, false);
        assert_abs_diff_eq!(
            diagram.incident_arc.sweep().abs(),
            30.0_f64.to_radians(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            diagram.reflected_arc.sweep().abs(),
            30.0_f64.to_radians(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            diagram.refracted_arc.unwrap().sweep().abs(),
            result.refracted_angle.unwrap().to_radians(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(diagram.incident_arc.start_angle, -FRAC_PI_2);
        assert_abs_diff_eq!(diagram.refracted_arc.unwrap().start_angle, FRAC_PI_2);
    }

    #[test]
    fn no_refracted_ray_under_total_internal_reflection() {
        let diagram = diagram_for(1.52, 1.0003, 60.0);
        assert!(diagram.refracted.is_none());
        assert!(diagram.refracted_arc.is_none());

        // a refracted angle is ignored when the flag is set
        let diagram = layout(60.0, Some(10.0), true);
        assert!(diagram.refracted.is_none());
    }

    #[test]
    fn arc_svg_path() {
        let arc = Arc {
            center: Point2::new(0.0, 0.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };
        let end = arc.end_point();
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 10.0, epsilon = 1e-12);
        assert!(arc.svg_path().starts_with("M 10 0 A 10 10 0 0 1 "));
    }
}

/// A directed line segment on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

/// A circular arc, angles in radians measured from the canvas `+x` axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub center: Point2<f64>,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    /// Signed angle swept from start to end.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway between the two ends.
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn point_at(&self, radius: f64, angle: f64) -> Point2<f64> {
        polar_to_canvas(self.center, radius, angle)
    }

    pub fn start_point(&self) -> Point2<f64> {
        self.point_at(self.radius, self.start_angle)
    }

    pub fn end_point(&self) -> Point2<f64> {
        self.point_at(self.radius, self.end_angle)
    }

    /// Position for the angle label, just outside the arc on its bisector.
    pub fn label_position(&self) -> Point2<f64> {
        self.point_at(self.radius + LABEL_OFFSET, self.bisector())
    }

    /// SVG path data (`M .. A ..`) tracing the arc.
    pub fn svg_path(&self) -> String {
        let start = self.start_point();
        let end = self.end_point();
        let large_arc = if self.sweep().abs() <= std::f64::consts::PI { 0 } else { 1 };
        let sweep_flag = if self.end_angle > self.start_angle { 1 } else { 0 };
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            start.x, start.y, self.radius, self.radius, large_arc, sweep_flag, end.x, end.y
        )
    }
}

/// Geometry of the full ray diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub origin: Point2<f64>,          // interface point
    pub surface: Segment,             // boundary between the media
    pub normal: Segment,              // dashed guide through the origin
    pub incident: Segment,            // towards the origin
    pub reflected: Segment,           // away from the origin, incidence side
    pub refracted: Option<Segment>,   // away from the origin, transmission side
    pub incident_arc: Arc,
    pub reflected_arc: Arc,
    pub refracted_arc: Option<Arc>,
}

/// Maps a polar offset around `center` to a canvas point.
pub fn polar_to_canvas(center: Point2<f64>, radius: f64, angle: f64) -> Point2<f64> {
    center + Vector2::new(angle.cos(), angle.sin()) * radius
}

/// Angle of the vector from `origin` to `point`, in radians.
fn vector_angle(origin: Point2<f64>, point: Point2<f64>) -> f64 {
    let v = point - origin;
    v.y.atan2(v.x)
}

/// Lays out the ray diagram for one solved refraction.
///
/// **Context**: The diagram is redrawn on every input change, so its
/// geometry has to be a deterministic function of the angles alone.
///
/// **How it Works**: Places the interface point at the canvas centre and
/// projects each ray at its angle from the normal with a fixed length. The
/// reflected ray mirrors the incident ray about the normal. The refracted
/// ray is only placed when an angle exists and the ray is not totally
/// internally reflected. Each arc starts on the normal and ends at the vector
/// angle of its ray.
pub fn layout(
    incident_angle: f64,
    refracted_angle: Option<f64>,
    total_internal_reflection: bool,
) -> Diagram {
    let origin = Point2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);

    let theta_i = incident_angle.to_radians();
    let (sin_i, cos_i) = theta_i.sin_cos();

    let incident = Segment::new(
        origin + Vector2::new(-sin_i, -cos_i) * RAY_LENGTH,
        origin,
    );
    let reflected = Segment::new(origin, origin + Vector2::new(sin_i, -cos_i) * RAY_LENGTH);

    let refracted = match refracted_angle {
        Some(angle) if !total_internal_reflection => {
            let (sin_t, cos_t) = angle.to_radians().sin_cos();
            Some(Segment::new(
                origin,
                origin + Vector2::new(sin_t, cos_t) * RAY_LENGTH,
            ))
        }
        _ => None,
    };

    let arc = |start_angle: f64, end_angle: f64| Arc {
        center: origin,
        radius: ARC_RADIUS,
        start_angle,
        end_angle,
    };

    let incident_arc = arc(-FRAC_PI_2, vector_angle(origin, incident.start));
    let reflected_arc = arc(-FRAC_PI_2, vector_angle(origin, reflected.end));
    let refracted_arc = refracted.map(|ray| arc(FRAC_PI_2, vector_angle(origin, ray.end)));

    Diagram {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        origin,
        surface: Segment::new(
            Point2::new(0.0, origin.y),
            Point2::new(CANVAS_WIDTH, origin.y),
        ),
        normal: Segment::new(
            origin - Vector2::new(0.0, NORMAL_HALF_LENGTH),
            origin + Vector2::new(0.0, NORMAL_HALF_LENGTH),
        ),
        incident,
        reflected,
        refracted,
        incident_arc,
        reflected_arc,
        refracted_arc,
    }
}
