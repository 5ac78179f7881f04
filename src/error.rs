//! Error types for the scatter plot.
//!
//! [`PlotError`] covers the core (scale derivation, selection, render
//! synchronization). Every variant aborts the current operation without
//! mutating [`SelectionState`](crate::selection::SelectionState). The other
//! enums cover the collaborators around the core: dataset loading,
//! configuration files and chart export.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::attributes::{AttributeKey, AxisRole};
use crate::render::layer::LayerSlot;

/// Result type alias for core operations.
pub type Result<T, E = PlotError> = std::result::Result<T, E>;

/// Errors raised by the re-binding engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("cannot derive a scale for `{key}` from an empty dataset")]
    EmptyDataset { key: AttributeKey },

    #[error("attribute `{key}` is not eligible for the {role} axis")]
    InvalidAttributeForAxis { key: AttributeKey, role: AxisRole },

    #[error("no layer is bound for the {slot} slot")]
    LayerNotBound { slot: LayerSlot },

    #[error("unknown attribute tag `{tag}`")]
    UnknownAttribute { tag: String },
}

/// Errors produced while loading the observation dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: column `{column}` is not a finite number")]
    NonFinite { row: usize, column: &'static str },

    #[error("{path:?} contains no observations")]
    Empty { path: PathBuf },
}

/// Errors produced while loading or saving a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}` (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors produced while exporting the chart to SVG or PNG.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SVG parse failed: {0}")]
    Svg(#[from] usvg::Error),

    #[error("rasterization failed: {message}")]
    Raster { message: String },
}
