//! Retained scene that the render layers write into.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`animated`] | Time-interpolated scalar attributes |
//! | [`graph`]    | Scene nodes, layer implementations, frame sampling, hit testing |
//! | [`handle`]   | Shared handle bound into every layer slot |
//! | [`layout`]   | Fixed placement of the dimension labels |
//! | [`svg`]      | SVG and PNG export of a sampled frame |

pub mod animated;
pub mod graph;
pub mod handle;
pub mod layout;
pub mod svg;

pub use animated::Animated;
pub use graph::{
    ResolvedLabel, ResolvedMarker, ResolvedText, ResolvedTick, SceneFrame, SceneGraph,
};
pub use handle::SceneHandle;
pub use layout::{dimension_label_anchor, LabelAnchor};
