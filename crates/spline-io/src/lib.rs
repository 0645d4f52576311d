//! spline-io: JSON interchange for Bezier spline curves.
//!
//! Converts a curve object's splines (control points with absolute tangent
//! handles, tilt and a cyclic flag) to and from a plain JSON document:
//!
//! ```text
//! Curve ──encode──> Document ──to_vec──> JSON bytes
//! Curve <──decode── Document <──from_slice── JSON bytes
//! ```
//!
//! [`encode`] and [`decode`] are pure. Validation of untrusted input happens
//! when JSON becomes a [`Document`]; the [`ops`] module adds the file and
//! scene handling behind a host's Export and Import actions.
//!
//! # Quick Start
//!
//! ```ignore
//! use spline_io::{decode, encode, Document};
//!
//! let document: Document = text.parse()?;
//! let curve = decode(&document);
//! let json = encode(&curve).to_pretty_string()?;
//! ```
//!
//! # Formats
//!
//! Readers and writers are registered in a [`FormatRegistry`]. The default
//! registry is built once on first use and shared afterwards.

pub mod convert;
pub mod document;
pub mod error;
pub mod formats;
pub mod ops;
pub mod registry;

use std::path::Path;
use std::sync::OnceLock;

pub use convert::{decode, decode_with, encode, encode_with};
pub use document::{ControlPointRecord, Document, SplineRecord, Vec3Record};
pub use error::{Error, Result};
pub use ops::{export_active, import_into, read_document, write_document};
pub use registry::{FormatReader, FormatRegistry, FormatWriter, ReadOptions, WriteOptions};

use spline_core::Curve;

/// The shared registry with all built-in formats.
pub fn default_registry() -> &'static FormatRegistry {
    static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FormatRegistry::with_defaults)
}

/// Read data with auto-detection of format.
pub fn read(data: &[u8], options: &ReadOptions) -> Result<Curve> {
    default_registry().read(data, options)
}

/// Read data with explicit format name.
pub fn read_as(data: &[u8], format: &str, options: &ReadOptions) -> Result<Curve> {
    default_registry().read_as(data, format, options)
}

/// Write a curve to a named format.
pub fn write(curve: &Curve, format: &str, options: &WriteOptions) -> Result<Vec<u8>> {
    default_registry().write(curve, format, options)
}

/// Read a curve file, choosing the reader by extension.
///
/// Files without an extension fall back to auto-detection.
pub fn read_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Curve> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => default_registry().read_with_extension(&data, ext, options),
        None => default_registry().read(&data, options),
    }
}

/// Write a curve file, choosing the writer by extension.
pub fn write_path(curve: &Curve, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::NoWriter(path.display().to_string()))?;

    let bytes = default_registry().write_with_extension(curve, ext, options)?;
    std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
}
