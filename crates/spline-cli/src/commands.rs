//! Sub-command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use spline_core::Scene;
use spline_io::{ReadOptions, WriteOptions};
use tracing::{debug, info};

/// Summary of a validated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of splines.
    pub splines: usize,
    /// Control points across all splines.
    pub points: usize,
    /// Splines with the closed flag set.
    pub closed: usize,
}

/// Parse and validate a spline document.
pub fn validate(path: &Path) -> Result<Summary> {
    let document = spline_io::read_document(path)?;
    let summary = Summary {
        splines: document.spline_count(),
        points: document.point_count(),
        closed: document.splines.iter().filter(|s| s.closed).count(),
    };
    debug!(?summary, path = %path.display(), "document is valid");
    Ok(summary)
}

/// Read `input`, then write it to `output` with new options.
pub fn convert(
    input: &Path,
    output: &Path,
    read: &ReadOptions,
    write: &WriteOptions,
) -> Result<Summary> {
    let curve = spline_io::read_path(input, read)?;
    spline_io::write_path(&curve, output, write)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "converted spline document"
    );
    Ok(Summary {
        splines: curve.spline_count(),
        points: curve.point_count(),
        closed: curve.splines.iter().filter(|s| s.cyclic).count(),
    })
}

/// Export the active curve of a scene snapshot.
pub fn export(scene_path: &Path, output: &Path, write: &WriteOptions) -> Result<Summary> {
    let scene = load_scene(scene_path)?;
    let document = spline_io::export_active(&scene, output, write)?;
    Ok(Summary {
        splines: document.spline_count(),
        points: document.point_count(),
        closed: document.splines.iter().filter(|s| s.closed).count(),
    })
}

/// Import a document into a scene snapshot, creating the snapshot if needed.
///
/// The snapshot is only rewritten after the import succeeded.
pub fn import(input: &Path, scene_path: &Path, read: &ReadOptions, activate: bool) -> Result<String> {
    let mut scene = if scene_path.exists() {
        load_scene(scene_path)?
    } else {
        Scene::new()
    };

    let index = spline_io::import_into(&mut scene, input, read)?;
    if activate {
        scene.set_active(index);
    }
    save_scene(&scene, scene_path)?;

    Ok(scene.objects[index].name.clone())
}

/// Load a scene snapshot (JSON).
pub fn load_scene(path: &Path) -> Result<Scene> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid scene {}", path.display()))
}

/// Save a scene snapshot (JSON).
pub fn save_scene(scene: &Scene, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(scene)?;
    std::fs::write(path, text).with_context(|| format!("failed to write scene {}", path.display()))
}
