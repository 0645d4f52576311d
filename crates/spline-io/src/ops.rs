//! Export and import operations against a scene.
//!
//! These are the entry points a host wires to its "Export" and "Import"
//! actions once a file path is known. The document is passed explicitly
//! between the pure conversion and the file I/O.

use std::fs;
use std::path::Path;

use crate::convert::{decode_with, encode_with};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::registry::{ReadOptions, WriteOptions};
use spline_core::SceneHost;
use tracing::info;

/// Export the scene's active curve to `path`.
///
/// Fails with [`Error::NoActiveCurve`] when the scene has no active curve.
/// Returns the document that was written.
pub fn export_active<S>(scene: &S, path: impl AsRef<Path>, options: &WriteOptions) -> Result<Document>
where
    S: SceneHost + ?Sized,
{
    let path = path.as_ref();
    let curve = scene.active_curve().ok_or(Error::NoActiveCurve)?;

    let document = encode_with(curve, options)?;
    write_document(&document, path, options)?;
    Ok(document)
}

/// Import the curve stored at `path` and link it into `scene`.
///
/// The file is fully read, validated and decoded before the scene is
/// touched, so a failed import leaves the scene unchanged. Returns the
/// index of the linked object.
pub fn import_into<S>(scene: &mut S, path: impl AsRef<Path>, options: &ReadOptions) -> Result<usize>
where
    S: SceneHost + ?Sized,
{
    let path = path.as_ref();
    let document = read_document(path)?;
    let curve = decode_with(&document, options)?;

    let index = scene.link_curve(&options.object_name, curve);
    info!(
        path = %path.display(),
        splines = document.spline_count(),
        points = document.point_count(),
        "imported curve"
    );
    Ok(index)
}

/// Read and validate a document from a file.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    Document::from_slice(&data)
}

/// Write a document to a file using the formatting in `options`.
pub fn write_document(document: &Document, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let bytes = document.to_vec(options.pretty, options.indent)?;
    fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;

    info!(
        path = %path.display(),
        splines = document.spline_count(),
        points = document.point_count(),
        bytes = bytes.len(),
        "wrote spline document"
    );
    Ok(())
}
