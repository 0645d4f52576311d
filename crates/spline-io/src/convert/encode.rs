//! Curve to document.

use crate::document::{ControlPointRecord, Document, SplineRecord};
use crate::error::Result;
use crate::registry::WriteOptions;
use spline_core::axis::convert_curve;
use spline_core::{radians_to_degrees, Axis, BezierPoint, BezierSpline, Curve};
use tracing::debug;

/// Encode a curve into a document.
///
/// Splines and points keep their storage order. Vectors are copied as-is in
/// the curve's local space; tilt is converted from radians to degrees.
pub fn encode(curve: &Curve) -> Document {
    let splines: Vec<SplineRecord> = curve.splines.iter().map(encode_spline).collect();
    let document = Document { splines };

    debug!(
        splines = document.spline_count(),
        points = document.point_count(),
        "encoded curve"
    );
    document
}

/// Encode a curve, applying the up-axis and scale of `options`.
///
/// Fails with [`Error::NonFinite`](crate::Error::NonFinite) when a value is
/// NaN or infinite after conversion, e.g. when scaling overflows.
pub fn encode_with(curve: &Curve, options: &WriteOptions) -> Result<Document> {
    options.validate()?;
    let document = if options.is_identity() {
        encode(curve)
    } else {
        let mut converted = curve.clone();
        convert_curve(&mut converted, Axis::Z, options.up_axis, options.scale);
        encode(&converted)
    };

    document.check_finite()?;
    Ok(document)
}

fn encode_spline(spline: &BezierSpline) -> SplineRecord {
    SplineRecord {
        control_points: spline.points.iter().map(encode_point).collect(),
        closed: spline.cyclic,
    }
}

fn encode_point(point: &BezierPoint) -> ControlPointRecord {
    ControlPointRecord {
        position: point.co.into(),
        handle_l: point.handle_left.into(),
        handle_r: point.handle_right.into(),
        tilt: radians_to_degrees(point.tilt),
    }
}
