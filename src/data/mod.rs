pub mod attributes;
pub mod dataset;
pub mod tooltip;

pub use attributes::{AttributeKey, AxisRole};
pub use dataset::{Dataset, Observation};
pub use tooltip::{TooltipContent, TooltipFormat};
