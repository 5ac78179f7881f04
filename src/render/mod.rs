//! Render synchronization: layer interfaces, transition descriptions and the
//! orchestrator that keeps the layers consistent with the selection.

pub mod layer;
pub mod sync;
pub mod transition;

pub use layer::{
    AxisLayer, AxisTick, AxisUpdate, DimensionLabelLayer, LabelStyle, LayerSet, LayerSlot,
    MarkerLayer, PointLabelLayer, TooltipLayer,
};
pub use sync::{RenderSettings, RenderSync};
pub use transition::{Easing, Transition};
