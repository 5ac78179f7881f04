//! Switchplot crate root: re-exports and module wiring.
//!
//! An interactive scatter plot whose X and Y axes can each be re-bound at
//! runtime to one of three attributes. Every re-binding recomputes that
//! axis's scale and animates all dependent layers together.
//!
//! - `data`: attribute table, observations and CSV loading, tooltip text
//! - `scale`: linear scales, domain padding, tick generation
//! - `selection`: the current (x, y) binding and its re-binding rule
//! - `render`: layer traits and the orchestrator that drives them
//! - `input`: clickable dimension labels
//! - `scene`: retained scene, frame sampling and SVG/PNG export
//! - `chart`: everything above wired together, without a window
//! - `controllers`: external control of the selection
//! - `config`: shared configuration
//! - `app`: the native egui window

pub mod app;
pub mod chart;
pub mod color_scheme;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod input;
pub mod render;
pub mod scale;
pub mod scene;
pub mod selection;

// Public re-exports for a compact external API
pub use app::{run_scatter, ScatterApp};
pub use chart::ScatterChart;
pub use color_scheme::ColorScheme;
pub use config::ScatterConfig;
pub use controllers::{SelectionController, SelectionEvent};
pub use data::{AttributeKey, AxisRole, Dataset, Observation};
pub use error::{ConfigError, ExportError, LoadError, PlotError};
pub use input::{Activation, InputBinding};
pub use render::{LayerSet, LayerSlot, RenderSync, Transition};
pub use scale::{compute_scale, Scale};
pub use scene::{SceneGraph, SceneHandle};
pub use selection::{Selection, SelectionState, TransitionPlan};
