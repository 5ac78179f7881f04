use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::Dataset;
use crate::error::{PlotError, Result};

use super::Scale;

/// Multiplicative padding of the X domain (lower, upper).
pub const X_DOMAIN_PADDING: (f64, f64) = (0.95, 1.10);
/// Additive padding of the Y domain, in data units.
pub const Y_DOMAIN_PADDING: f64 = 2.0;

/// Pad a data extent according to the axis role.
///
/// X gets multiplicative padding with more room on the right, where markers
/// and their labels crowd. Y holds percentage-like attributes and gets a fixed
/// additive pad so small ranges near zero keep their shape.
pub fn padded_domain(role: AxisRole, min: f64, max: f64) -> (f64, f64) {
    match role {
        AxisRole::X => (X_DOMAIN_PADDING.0 * min, X_DOMAIN_PADDING.1 * max),
        AxisRole::Y => (min - Y_DOMAIN_PADDING, max + Y_DOMAIN_PADDING),
    }
}

/// Derive the pixel-space scale for `key` on the axis `role`.
///
/// Pure: identical inputs always give an equal [`Scale`].
pub fn compute_scale(
    dataset: &Dataset,
    key: AttributeKey,
    role: AxisRole,
    pixel_range: (f64, f64),
) -> Result<Scale> {
    let (min, max) = dataset
        .extent(key)
        .ok_or(PlotError::EmptyDataset { key })?;
    Ok(Scale::new(padded_domain(role, min, max), pixel_range))
}
