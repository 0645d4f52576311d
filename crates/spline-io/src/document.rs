//! Spline interchange document schema.
//!
//! ```text
//! { "splines": [
//!     { "controlPoints": [
//!         { "position": {"x","y","z"}, "handleL": {..}, "handleR": {..}, "tilt": deg }
//!       ],
//!       "closed": bool }
//! ] }
//! ```
//!
//! Key names are fixed for compatibility with existing files. Writing goes
//! through serde; reading walks a [`serde_json::Value`] so that every
//! violation can be reported with its JSON path.
//!
//! Paths start at the `splines` key, e.g. `splines[0].controlPoints[1].handleL`.
//! Errors about the top-level value itself use [`ROOT_PATH`].

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Root document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Splines in curve composition order.
    pub splines: Vec<SplineRecord>,
}

/// One spline of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplineRecord {
    /// Control points in curve order.
    pub control_points: Vec<ControlPointRecord>,
    /// Whether the spline wraps from its last point to its first.
    pub closed: bool,
}

/// One Bezier control point of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPointRecord {
    /// Anchor position.
    pub position: Vec3Record,
    /// Left handle, absolute.
    pub handle_l: Vec3Record,
    /// Right handle, absolute.
    pub handle_r: Vec3Record,
    /// Tilt in degrees.
    pub tilt: f64,
}

/// A 3-component vector object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3Record {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3Record {
    /// Create a vector record.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<glam::DVec3> for Vec3Record {
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3Record> for glam::DVec3 {
    fn from(v: Vec3Record) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

/// Default indentation of pretty-printed documents.
pub const DEFAULT_INDENT: usize = 4;

/// Path reported for errors about the top-level value.
pub const ROOT_PATH: &str = "(root)";

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of splines.
    pub fn spline_count(&self) -> usize {
        self.splines.len()
    }

    /// Total number of control points.
    pub fn point_count(&self) -> usize {
        self.splines.iter().map(|s| s.control_points.len()).sum()
    }

    /// Parse and validate a document from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(&value)
    }

    /// Validate a parsed JSON value against the schema.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = as_object(value, ROOT_PATH)?;
        let splines = as_array(field(root, ROOT_PATH, "splines")?, "splines")?;

        let splines = splines
            .iter()
            .enumerate()
            .map(|(i, spline)| read_spline(spline, &format!("splines[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { splines })
    }

    /// Check that every number can be written as JSON.
    ///
    /// serde_json writes NaN and infinities as `null`, which no reader
    /// accepts back, so they are rejected with the path of the first one.
    pub fn check_finite(&self) -> Result<()> {
        for (s, spline) in self.splines.iter().enumerate() {
            for (p, point) in spline.control_points.iter().enumerate() {
                let path = format!("splines[{s}].controlPoints[{p}]");
                let vectors = [
                    ("position", point.position),
                    ("handleL", point.handle_l),
                    ("handleR", point.handle_r),
                ];
                for (key, v) in vectors {
                    for (component, n) in [('x', v.x), ('y', v.y), ('z', v.z)] {
                        if !n.is_finite() {
                            return Err(Error::NonFinite {
                                path: format!("{path}.{key}.{component}"),
                            });
                        }
                    }
                }
                if !point.tilt.is_finite() {
                    return Err(Error::NonFinite {
                        path: format!("{path}.tilt"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize to JSON.
    ///
    /// `indent` is the number of spaces per level when `pretty` is set.
    /// Fails with [`Error::NonFinite`] instead of writing `null` numbers.
    pub fn to_vec(&self, pretty: bool, indent: usize) -> Result<Vec<u8>> {
        self.check_finite()?;
        if !pretty {
            return Ok(serde_json::to_vec(self)?);
        }

        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        out.push(b'\n');
        Ok(out)
    }

    /// Serialize to a pretty JSON string with the default indentation.
    pub fn to_pretty_string(&self) -> Result<String> {
        let bytes = self.to_vec(true, DEFAULT_INDENT)?;
        String::from_utf8(bytes).map_err(|e| Error::Json(serde::ser::Error::custom(e)))
    }
}

impl std::str::FromStr for Document {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_slice(text.as_bytes())
    }
}

fn read_spline(value: &Value, path: &str) -> Result<SplineRecord> {
    let object = as_object(value, path)?;

    let points_path = format!("{path}.controlPoints");
    let points = as_array(field(object, path, "controlPoints")?, &points_path)?;
    let control_points = points
        .iter()
        .enumerate()
        .map(|(i, point)| read_point(point, &format!("{points_path}[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    let closed_path = format!("{path}.closed");
    let closed = field(object, path, "closed")?
        .as_bool()
        .ok_or_else(|| Error::schema(&closed_path, "expected a boolean"))?;

    Ok(SplineRecord {
        control_points,
        closed,
    })
}

fn read_point(value: &Value, path: &str) -> Result<ControlPointRecord> {
    let object = as_object(value, path)?;

    let position = read_vec3(field(object, path, "position")?, &format!("{path}.position"))?;
    let handle_l = read_vec3(field(object, path, "handleL")?, &format!("{path}.handleL"))?;
    let handle_r = read_vec3(field(object, path, "handleR")?, &format!("{path}.handleR"))?;
    let tilt = as_number(field(object, path, "tilt")?, &format!("{path}.tilt"))?;

    Ok(ControlPointRecord {
        position,
        handle_l,
        handle_r,
        tilt,
    })
}

fn read_vec3(value: &Value, path: &str) -> Result<Vec3Record> {
    let object = as_object(value, path)?;
    let component = |key: &str, name: char| {
        object
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::MalformedVector {
                path: path.to_string(),
                component: name,
            })
    };

    Ok(Vec3Record {
        x: component("x", 'x')?,
        y: component("y", 'y')?,
        z: component("z", 'z')?,
    })
}

fn field<'a>(object: &'a Map<String, Value>, path: &str, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| Error::schema(path, format!("missing key '{key}'")))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::schema(path, format!("expected an object, found {}", kind(value))))
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::schema(path, format!("expected an array, found {}", kind(value))))
}

fn as_number(value: &Value, path: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::schema(path, format!("expected a number, found {}", kind(value))))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "splines": [{
                "controlPoints": [{
                    "position": {"x": 0, "y": 1.5, "z": -2},
                    "handleL": {"x": -1, "y": 0, "z": 0},
                    "handleR": {"x": 1, "y": 0, "z": 0},
                    "tilt": 45.0
                }],
                "closed": true
            }]
        })
    }

    #[test]
    fn test_parse_valid_document() {
        let doc = Document::from_value(&sample()).unwrap();
        assert_eq!(doc.spline_count(), 1);
        assert_eq!(doc.point_count(), 1);

        let spline = &doc.splines[0];
        assert!(spline.closed);
        let point = spline.control_points[0];
        assert_eq!(point.position, Vec3Record::new(0.0, 1.5, -2.0));
        assert_eq!(point.handle_l, Vec3Record::new(-1.0, 0.0, 0.0));
        assert_eq!(point.tilt, 45.0);
    }

    #[test]
    fn test_empty_splines() {
        let doc = r#"{"splines": []}"#.parse::<Document>().unwrap();
        assert_eq!(doc.spline_count(), 0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut value = sample();
        value["generator"] = json!("test");
        value["splines"][0]["name"] = json!("extra");
        assert!(Document::from_value(&value).is_ok());
    }

    #[test]
    fn test_missing_closed() {
        let mut value = sample();
        value["splines"][0].as_object_mut().unwrap().remove("closed");
        let err = Document::from_value(&value).unwrap_err();
        match err {
            Error::Schema { path, reason } => {
                assert_eq!(path, "splines[0]");
                assert!(reason.contains("closed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_types() {
        let mut value = sample();
        value["splines"][0]["closed"] = json!("yes");
        let err = Document::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::Schema { ref path, .. } if path == "splines[0].closed"));

        let mut value = sample();
        value["splines"][0]["controlPoints"][0]["tilt"] = json!(null);
        let err = Document::from_value(&value).unwrap_err();
        assert!(
            matches!(err, Error::Schema { ref path, .. } if path == "splines[0].controlPoints[0].tilt")
        );

        let err = Document::from_value(&json!({"splines": {}})).unwrap_err();
        assert!(matches!(err, Error::Schema { ref path, .. } if path == "splines"));

        let err = Document::from_value(&json!([])).unwrap_err();
        assert!(matches!(err, Error::Schema { ref path, .. } if path == ROOT_PATH));

        let err = Document::from_value(&json!({})).unwrap_err();
        match err {
            Error::Schema { path, reason } => {
                assert_eq!(path, ROOT_PATH);
                assert!(reason.contains("splines"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_vector_component() {
        let mut value = sample();
        value["splines"][0]["controlPoints"][0]["handleR"]
            .as_object_mut()
            .unwrap()
            .remove("y");
        let err = Document::from_value(&value).unwrap_err();
        match err {
            Error::MalformedVector { path, component } => {
                assert_eq!(path, "splines[0].controlPoints[0].handleR");
                assert_eq!(component, 'y');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_vector_component() {
        let mut value = sample();
        value["splines"][0]["controlPoints"][0]["position"]["z"] = json!("1");
        let err = Document::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::MalformedVector { component: 'z', .. }));
    }

    #[test]
    fn test_missing_vector_is_schema_error() {
        let mut value = sample();
        value["splines"][0]["controlPoints"][0]
            .as_object_mut()
            .unwrap()
            .remove("handleL");
        let err = Document::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = "{\"splines\": [".parse::<Document>().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_key_names_verbatim() {
        let doc = Document::from_value(&sample()).unwrap();
        let text = String::from_utf8(doc.to_vec(false, 0).unwrap()).unwrap();
        assert_eq!(
            text,
            r#"{"splines":[{"controlPoints":[{"position":{"x":0.0,"y":1.5,"z":-2.0},"handleL":{"x":-1.0,"y":0.0,"z":0.0},"handleR":{"x":1.0,"y":0.0,"z":0.0},"tilt":45.0}],"closed":true}]}"#
        );
    }

    #[test]
    fn test_non_finite_numbers_are_not_written() {
        let mut doc = Document::from_value(&sample()).unwrap();
        doc.splines[0].control_points[0].tilt = f64::NAN;
        let err = doc.to_vec(false, 0).unwrap_err();
        assert!(
            matches!(err, Error::NonFinite { ref path } if path == "splines[0].controlPoints[0].tilt")
        );

        let mut doc = Document::from_value(&sample()).unwrap();
        doc.splines[0].control_points[0].handle_r.y = f64::INFINITY;
        let err = doc.to_pretty_string().unwrap_err();
        assert!(
            matches!(err, Error::NonFinite { ref path } if path == "splines[0].controlPoints[0].handleR.y")
        );
    }

    #[test]
    fn test_pretty_indent() {
        let doc = r#"{"splines": []}"#.parse::<Document>().unwrap();
        let text = doc.to_pretty_string().unwrap();
        assert_eq!(text, "{\n    \"splines\": []\n}\n");

        let two = String::from_utf8(doc.to_vec(true, 2).unwrap()).unwrap();
        assert_eq!(two, "{\n  \"splines\": []\n}\n");
    }

    #[test]
    fn test_full_precision_round_trip() {
        let value = 0.1 + 0.2;
        let doc = Document {
            splines: vec![SplineRecord {
                control_points: vec![ControlPointRecord {
                    position: Vec3Record::new(value, 1.0 / 3.0, std::f64::consts::PI),
                    tilt: 1e-300,
                    ..Default::default()
                }],
                closed: false,
            }],
        };
        let bytes = doc.to_vec(false, 0).unwrap();
        assert_eq!(Document::from_slice(&bytes).unwrap(), doc);
    }
}
