//! Document to curve.

use crate::document::{ControlPointRecord, Document, SplineRecord};
use crate::error::Result;
use crate::registry::ReadOptions;
use spline_core::axis::convert_curve;
use spline_core::{degrees_to_radians, Axis, BezierPoint, Curve};
use tracing::{debug, warn};

/// Decode a document into a new curve.
///
/// The curve is 3D with Z-up twist. It is not linked anywhere; the caller
/// attaches it to a scene once it has the complete result.
pub fn decode(document: &Document) -> Curve {
    let mut curve = Curve::new();

    for (index, record) in document.splines.iter().enumerate() {
        decode_spline(&mut curve, index, record);
    }

    debug!(
        splines = curve.spline_count(),
        points = curve.point_count(),
        "decoded curve"
    );
    curve
}

/// Decode a document, undoing the up-axis and scale described by `options`.
pub fn decode_with(document: &Document, options: &ReadOptions) -> Result<Curve> {
    options.validate()?;
    let mut curve = decode(document);
    convert_curve(&mut curve, options.up_axis, Axis::Z, options.scale);
    Ok(curve)
}

fn decode_spline(curve: &mut Curve, index: usize, record: &SplineRecord) {
    let spline = curve.new_spline();

    if record.control_points.is_empty() {
        warn!(spline = index, "spline has no control points");
        spline.points.clear();
    }

    // The new spline already owns one slot for the first point.
    for (i, point) in record.control_points.iter().enumerate() {
        let slot = if i == 0 { 0 } else { spline.add_points(1) };
        spline.points[slot] = decode_point(point);
    }

    spline.cyclic = record.closed;
}

fn decode_point(record: &ControlPointRecord) -> BezierPoint {
    BezierPoint {
        co: record.position.into(),
        handle_left: record.handle_l.into(),
        handle_right: record.handle_r.into(),
        tilt: degrees_to_radians(record.tilt),
    }
}
