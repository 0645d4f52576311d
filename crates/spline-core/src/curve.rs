//! Host-side Bezier curve model.
//!
//! A [`Curve`] is the in-memory stand-in for a curve object owned by a 3D
//! content-creation application: an ordered list of Bezier splines, each an
//! ordered list of control points with absolute tangent handles and a tilt.

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a curve lives in a plane or in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimensions {
    /// Flat curve, Z is ignored by the host.
    TwoD,
    /// Full 3D curve.
    #[default]
    ThreeD,
}

/// How the host computes the curve's local frame along its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TwistMode {
    /// Minimize twist between points.
    #[default]
    Minimum,
    /// Follow the tangent.
    Tangent,
    /// Keep the frame aligned to world Z.
    ZUp,
}

/// Spline interpolation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplineKind {
    /// Cubic Bezier with explicit handles.
    #[default]
    Bezier,
}

/// A single Bezier control point.
///
/// Handles are absolute positions in the curve's local space, not offsets
/// from `co`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierPoint {
    /// Anchor position the curve passes through.
    pub co: DVec3,
    /// Handle controlling the curve approaching this point.
    pub handle_left: DVec3,
    /// Handle controlling the curve leaving this point.
    pub handle_right: DVec3,
    /// Rotation of the local frame around the tangent, in radians.
    pub tilt: f64,
}

impl BezierPoint {
    /// Create a point with handles and zero tilt.
    pub fn new(co: DVec3, handle_left: DVec3, handle_right: DVec3) -> Self {
        Self {
            co,
            handle_left,
            handle_right,
            tilt: 0.0,
        }
    }

    /// Set the tilt (radians).
    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self
    }

    /// Apply `f` to the anchor and both handles.
    pub fn map_vectors(self, f: impl Fn(DVec3) -> DVec3) -> Self {
        Self {
            co: f(self.co),
            handle_left: f(self.handle_left),
            handle_right: f(self.handle_right),
            tilt: self.tilt,
        }
    }
}

/// An ordered chain of Bezier control points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierSpline {
    /// Interpolation type.
    pub kind: SplineKind,
    /// Control points in curve order.
    pub points: Vec<BezierPoint>,
    /// Whether the last point connects back to the first.
    pub cyclic: bool,
}

impl BezierSpline {
    /// Create a spline with a single default point slot, the way hosts
    /// allocate new Bezier splines.
    pub fn new() -> Self {
        Self {
            kind: SplineKind::Bezier,
            points: vec![BezierPoint::default()],
            cyclic: false,
        }
    }

    /// Create a spline from existing points.
    pub fn from_points(points: Vec<BezierPoint>, cyclic: bool) -> Self {
        Self {
            kind: SplineKind::Bezier,
            points,
            cyclic,
        }
    }

    /// Append `count` default points after the existing ones.
    ///
    /// Returns the index of the first appended point.
    pub fn add_points(&mut self, count: usize) -> usize {
        let first = self.points.len();
        self.points.resize(first + count, BezierPoint::default());
        first
    }

    /// Number of control points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// A curve object's data: its splines plus display settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    /// 2D or 3D.
    pub dimensions: Dimensions,
    /// Frame orientation mode.
    pub twist_mode: TwistMode,
    /// Splines in composition order.
    pub splines: Vec<BezierSpline>,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve {
    /// Create an empty 3D curve with Z-up twist.
    pub fn new() -> Self {
        Self {
            dimensions: Dimensions::ThreeD,
            twist_mode: TwistMode::ZUp,
            splines: Vec::new(),
        }
    }

    /// Create a curve from splines.
    pub fn from_splines(splines: Vec<BezierSpline>) -> Self {
        Self {
            splines,
            ..Self::new()
        }
    }

    /// Append a new Bezier spline (with one initial point slot) and return it.
    pub fn new_spline(&mut self) -> &mut BezierSpline {
        self.splines.push(BezierSpline::new());
        let last = self.splines.len() - 1;
        &mut self.splines[last]
    }

    /// Number of splines.
    pub fn spline_count(&self) -> usize {
        self.splines.len()
    }

    /// Total number of control points across all splines.
    pub fn point_count(&self) -> usize {
        self.splines.iter().map(BezierSpline::point_count).sum()
    }

    /// True when the curve has no splines.
    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_curve_defaults() {
        let curve = Curve::new();
        assert_eq!(curve.dimensions, Dimensions::ThreeD);
        assert_eq!(curve.twist_mode, TwistMode::ZUp);
        assert!(curve.is_empty());
        assert_eq!(curve.point_count(), 0);
    }

    #[test]
    fn test_new_spline_has_initial_slot() {
        let mut curve = Curve::new();
        let spline = curve.new_spline();
        assert_eq!(spline.kind, SplineKind::Bezier);
        assert_eq!(spline.point_count(), 1);
        assert!(!spline.cyclic);
        assert_eq!(curve.spline_count(), 1);
    }

    #[test]
    fn test_add_points_preserves_existing() {
        let mut spline = BezierSpline::new();
        spline.points[0].co = DVec3::new(1.0, 2.0, 3.0);

        let first = spline.add_points(1);
        assert_eq!(first, 1);
        spline.points[first].co = DVec3::new(4.0, 5.0, 6.0);

        let first = spline.add_points(2);
        assert_eq!(first, 2);
        assert_eq!(spline.point_count(), 4);
        assert_eq!(spline.points[0].co, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(spline.points[1].co, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(spline.points[3], BezierPoint::default());
    }

    #[test]
    fn test_map_vectors_keeps_tilt() {
        let point = BezierPoint::new(DVec3::X, DVec3::Y, DVec3::Z).with_tilt(0.5);
        let scaled = point.map_vectors(|v| v * 2.0);
        assert_eq!(scaled.co, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(scaled.handle_left, DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(scaled.handle_right, DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(scaled.tilt, 0.5);
    }

    #[test]
    fn test_point_count_sums_splines() {
        let curve = Curve::from_splines(vec![
            BezierSpline::from_points(vec![BezierPoint::default(); 3], false),
            BezierSpline::from_points(vec![BezierPoint::default(); 2], true),
        ]);
        assert_eq!(curve.spline_count(), 2);
        assert_eq!(curve.point_count(), 5);
    }
}
