//! Static placement of the dimension labels, in plot coordinates (origin at
//! the top-left of the plot area, Y down).

use crate::config::Viewport;
use crate::data::attributes::{AttributeKey, AxisRole};

/// Distance below the plot of the first X label's centre.
const X_LABEL_FIRST_OFFSET: f64 = 32.0;
const X_LABEL_SPACING: f64 = 16.0;
/// Distance left of the plot of the first Y label's centre.
const Y_LABEL_FIRST_OFFSET: f64 = 33.0;
const Y_LABEL_SPACING: f64 = 17.0;

/// Centre of a dimension label and its rotation (radians, counter-clockwise
/// on screen is negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub center: (f64, f64),
    pub angle: f32,
}

/// X labels are stacked under the plot, Y labels run vertically to its left;
/// in both cases the first eligible attribute sits closest to the axis.
pub fn dimension_label_anchor(key: AttributeKey, viewport: &Viewport) -> LabelAnchor {
    let role = key.role();
    let index = role
        .eligible()
        .iter()
        .position(|&k| k == key)
        .unwrap_or(0) as f64;
    match role {
        AxisRole::X => LabelAnchor {
            center: (
                viewport.plot_width() / 2.0,
                viewport.plot_height() + X_LABEL_FIRST_OFFSET + X_LABEL_SPACING * index,
            ),
            angle: 0.0,
        },
        AxisRole::Y => LabelAnchor {
            center: (
                -(Y_LABEL_FIRST_OFFSET + Y_LABEL_SPACING * index),
                viewport.plot_height() / 2.0,
            ),
            angle: -std::f32::consts::FRAC_PI_2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_labels_stack_below_the_plot() {
        let vp = Viewport::default();
        let first = dimension_label_anchor(AttributeKey::PovertyRate, &vp);
        let third = dimension_label_anchor(AttributeKey::MedianIncome, &vp);
        assert_eq!(first.center, (392.5, 417.0));
        assert_eq!(third.center.1 - first.center.1, 2.0 * X_LABEL_SPACING);
        assert_eq!(first.angle, 0.0);
    }

    #[test]
    fn y_labels_run_left_of_the_plot() {
        let vp = Viewport::default();
        let a = dimension_label_anchor(AttributeKey::HealthcareUninsuredRate, &vp);
        let b = dimension_label_anchor(AttributeKey::SmokingRate, &vp);
        assert_eq!(a.center, (-33.0, 192.5));
        assert_eq!(b.center.0, -50.0);
        assert!(a.angle < 0.0);
    }
}
