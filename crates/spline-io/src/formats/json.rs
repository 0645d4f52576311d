//! Spline JSON format reader and writer.
//!
//! The document layout is described in [`crate::document`].

use crate::convert::{decode_with, encode_with};
use crate::document::Document;
use crate::error::Result;
use crate::registry::{FormatReader, FormatWriter, ReadOptions, WriteOptions};
use spline_core::Curve;

/// Format name used for registry lookups.
pub const FORMAT_NAME: &str = "spline-json";

/// Reader for spline JSON documents.
pub struct SplineJsonReader;

impl SplineJsonReader {
    /// Create a new spline JSON reader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SplineJsonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatReader for SplineJsonReader {
    fn name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn can_read(&self, data: &[u8]) -> bool {
        let text = match std::str::from_utf8(data) {
            Ok(s) => s,
            Err(_) => return false,
        };

        text.trim_start().starts_with('{') && text.contains("\"splines\"")
    }

    fn read(&self, data: &[u8], options: &ReadOptions) -> Result<Curve> {
        let document = Document::from_slice(data)?;
        decode_with(&document, options)
    }
}

/// Writer for spline JSON documents.
pub struct SplineJsonWriter;

impl SplineJsonWriter {
    /// Create a new spline JSON writer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SplineJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatWriter for SplineJsonWriter {
    fn name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, curve: &Curve, options: &WriteOptions) -> Result<Vec<u8>> {
        let document = encode_with(curve, options)?;
        document.to_vec(options.pretty, options.indent)
    }
}
