//! Configuration file support.
//!
//! ```toml
//! [read]
//! up_axis = "y"
//! scale = 0.01
//! object_name = "Rail"
//!
//! [write]
//! pretty = true
//! indent = 2
//! up_axis = "y"
//! scale = 100.0
//! ```
//!
//! Every key is optional; command-line flags override file values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spline_core::Axis;
use spline_io::{ReadOptions, WriteOptions};

/// Options loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options used when reading documents.
    pub read: ReadOptions,
    /// Options used when writing documents.
    pub write: WriteOptions,
}

impl Config {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

/// Command-line overrides for reading.
#[derive(Debug, Clone, Default)]
pub struct ReadOverrides {
    pub up_axis: Option<Axis>,
    pub scale: Option<f64>,
    pub object_name: Option<String>,
}

impl ReadOverrides {
    /// Apply the overrides on top of `options`.
    pub fn apply(self, mut options: ReadOptions) -> ReadOptions {
        if let Some(axis) = self.up_axis {
            options.up_axis = axis;
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(name) = self.object_name {
            options.object_name = name;
        }
        options
    }
}

/// Command-line overrides for writing.
#[derive(Debug, Clone, Default)]
pub struct WriteOverrides {
    pub up_axis: Option<Axis>,
    pub scale: Option<f64>,
    pub compact: bool,
    pub indent: Option<usize>,
}

impl WriteOverrides {
    /// Apply the overrides on top of `options`.
    pub fn apply(self, mut options: WriteOptions) -> WriteOptions {
        if let Some(axis) = self.up_axis {
            options.up_axis = axis;
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(indent) = self.indent {
            options = options.with_indent(indent);
        }
        if self.compact {
            options = options.compact();
        }
        options
    }
}
