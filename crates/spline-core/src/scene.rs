//! Minimal scene model for linking curve objects.
//!
//! Real hosts own their scene graph; [`SceneHost`] is the seam they
//! implement. [`Scene`] is an in-memory host used by the CLI and tests.

use crate::curve::Curve;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The part of a host scene that import and export need.
pub trait SceneHost {
    /// The curve of the active object, if the active object is a curve.
    fn active_curve(&self) -> Option<&Curve>;

    /// Link a finished curve into the scene as a new object.
    ///
    /// Returns the new object's index.
    fn link_curve(&mut self, name: &str, curve: Curve) -> usize;
}

/// A named curve object in a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveObject {
    /// Object name.
    pub name: String,
    /// Curve data.
    pub curve: Curve,
}

/// An in-memory scene of curve objects.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// Objects in link order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<CurveObject>,
    /// Index of the active object.
    #[cfg_attr(feature = "serde", serde(default))]
    pub active: Option<usize>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Make an object active. Out-of-range indices clear the selection.
    pub fn set_active(&mut self, index: usize) {
        self.active = (index < self.objects.len()).then_some(index);
    }

    /// Find an object by name.
    pub fn object(&self, name: &str) -> Option<&CurveObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Produce a name not used by any object by appending `.001`, `.002`, ...
    fn unique_name(&self, base: &str) -> String {
        if self.object(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| self.object(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }
}

impl SceneHost for Scene {
    fn active_curve(&self) -> Option<&Curve> {
        self.active
            .and_then(|i| self.objects.get(i))
            .map(|o| &o.curve)
    }

    fn link_curve(&mut self, name: &str, curve: Curve) -> usize {
        let name = self.unique_name(name);
        debug!(name = %name, splines = curve.spline_count(), "linking curve object");
        self.objects.push(CurveObject { name, curve });
        self.objects.len() - 1
    }
}
