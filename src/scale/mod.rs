//! Linear scales, their derivation from the dataset, and axis ticks.

pub mod factory;
pub mod linear;
pub mod ticks;

pub use factory::{compute_scale, padded_domain};
pub use linear::Scale;
pub use ticks::format_tick;
