//! Format reader and writer traits.

use crate::document::DEFAULT_INDENT;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use spline_core::{Axis, Curve};

/// Object name given to imported curves.
pub const DEFAULT_OBJECT_NAME: &str = "BezierCurve";

/// Trait for format readers.
///
/// Implement this trait to add support for reading a new file format.
pub trait FormatReader: Send + Sync {
    /// Get the format name (e.g., "spline-json").
    fn name(&self) -> &'static str;

    /// Get supported file extensions (e.g., ["json"]).
    fn extensions(&self) -> &[&'static str];

    /// Check if this reader can handle the given data.
    ///
    /// This should be a fast check without parsing the whole file.
    fn can_read(&self, data: &[u8]) -> bool;

    /// Read the data and convert to a curve.
    fn read(&self, data: &[u8], options: &ReadOptions) -> Result<Curve>;
}

/// Trait for format writers.
///
/// Implement this trait to add support for writing a new file format.
pub trait FormatWriter: Send + Sync {
    /// Get the format name (e.g., "spline-json").
    fn name(&self) -> &'static str;

    /// Get the primary file extension (e.g., "json").
    fn extension(&self) -> &'static str;

    /// Write a curve to the format.
    fn write(&self, curve: &Curve, options: &WriteOptions) -> Result<Vec<u8>>;
}

/// Options for reading files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Up axis the document was written with.
    pub up_axis: Axis,
    /// Scale applied to positions and handles after reading.
    pub scale: f64,
    /// Name of the object an import links into the scene.
    pub object_name: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            up_axis: Axis::Z,
            scale: 1.0,
            object_name: DEFAULT_OBJECT_NAME.to_string(),
        }
    }
}

impl ReadOptions {
    /// Create default read options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document's up axis.
    pub fn with_up_axis(mut self, axis: Axis) -> Self {
        self.up_axis = axis;
        self
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the imported object's name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    /// True when reading leaves coordinates untouched.
    pub fn is_identity(&self) -> bool {
        self.up_axis == Axis::Z && self.scale == 1.0
    }

    /// Check option ranges.
    pub fn validate(&self) -> Result<()> {
        validate_scale(self.scale)?;
        if self.object_name.is_empty() {
            return Err(Error::InvalidOption {
                name: "object_name",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Options for writing files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Pretty-print the output.
    pub pretty: bool,
    /// Spaces per indentation level when pretty-printing.
    pub indent: usize,
    /// Up axis of the written document.
    pub up_axis: Axis,
    /// Scale applied to positions and handles before writing.
    pub scale: f64,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: DEFAULT_INDENT,
            up_axis: Axis::Z,
            scale: 1.0,
        }
    }
}

impl WriteOptions {
    /// Create default write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write compact single-line JSON.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.pretty = true;
        self.indent = indent;
        self
    }

    /// Set the document's up axis.
    pub fn with_up_axis(mut self, axis: Axis) -> Self {
        self.up_axis = axis;
        self
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// True when writing leaves coordinates untouched.
    pub fn is_identity(&self) -> bool {
        self.up_axis == Axis::Z && self.scale == 1.0
    }

    /// Check option ranges.
    pub fn validate(&self) -> Result<()> {
        validate_scale(self.scale)
    }
}

fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOption {
            name: "scale",
            reason: format!("expected a finite positive number, got {scale}"),
        })
    }
}
