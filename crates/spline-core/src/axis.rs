//! Up-axis conventions.
//!
//! Curves are Z-up. Documents produced for Y-up engines store the same
//! geometry with Y and Z exchanged.

use crate::curve::{BezierPoint, Curve};
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate up axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Y axis (most game engines).
    Y,
    /// Z axis (CAD, DCC tools).
    #[default]
    Z,
}

impl Axis {
    /// Parse an axis name (`"y"` or `"z"`, case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Exchange the Y and Z components.
#[inline]
pub fn swap_yz(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.z, v.y)
}

/// Re-express a point between two up-axis conventions and apply a scale.
///
/// Swapping two axes mirrors the frame, so tilt changes sign.
pub fn convert_point(point: BezierPoint, from: Axis, to: Axis, scale: f64) -> BezierPoint {
    let swap = from != to;
    let mut out = point.map_vectors(|v| {
        let v = if swap { swap_yz(v) } else { v };
        v * scale
    });
    if swap {
        out.tilt = -out.tilt;
    }
    out
}

/// Convert every point of a curve in place.
///
/// Does nothing when the axes match and the scale is 1.
pub fn convert_curve(curve: &mut Curve, from: Axis, to: Axis, scale: f64) {
    if from == to && scale == 1.0 {
        return;
    }
    for spline in &mut curve.splines {
        for point in &mut spline.points {
            *point = convert_point(*point, from, to, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::BezierSpline;

    #[test]
    fn test_parse_axis() {
        assert_eq!(Axis::parse("y"), Some(Axis::Y));
        assert_eq!(Axis::parse("Z"), Some(Axis::Z));
        assert_eq!(Axis::parse("x"), None);
    }

    #[test]
    fn test_same_axis_only_scales() {
        let point = BezierPoint::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::ZERO,
            DVec3::ONE,
        )
        .with_tilt(0.3);
        let out = convert_point(point, Axis::Z, Axis::Z, 2.0);
        assert_eq!(out.co, DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(out.handle_right, DVec3::splat(2.0));
        assert_eq!(out.tilt, 0.3);
    }

    #[test]
    fn test_swap_flips_tilt() {
        let point = BezierPoint::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        )
        .with_tilt(0.3);
        let out = convert_point(point, Axis::Z, Axis::Y, 1.0);
        assert_eq!(out.co, DVec3::new(1.0, 3.0, 2.0));
        assert_eq!(out.handle_left, DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(out.handle_right, DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(out.tilt, -0.3);

        let back = convert_point(out, Axis::Y, Axis::Z, 1.0);
        assert_eq!(back, point);
    }

    #[test]
    fn test_convert_curve_identity_is_noop() {
        let mut curve = Curve::from_splines(vec![BezierSpline::from_points(
            vec![BezierPoint::new(DVec3::X, DVec3::Y, DVec3::Z)],
            false,
        )]);
        let before = curve.clone();
        convert_curve(&mut curve, Axis::Z, Axis::Z, 1.0);
        assert_eq!(curve, before);
    }
}
