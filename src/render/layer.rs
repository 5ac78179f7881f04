//! The five visual layers RenderSync drives, and the table they are bound in.
//!
//! Each layer is a small trait so any rendering toolkit can sit behind it.
//! Layers are infallible: once [`LayerSet::resolve`] has produced every layer a
//! transition needs, applying the transition cannot fail halfway.

use std::fmt;

use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::tooltip::TooltipContent;
use crate::error::{PlotError, Result};
use crate::render::transition::Transition;
use crate::scale::Scale;

/// Identifies one bindable layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerSlot {
    Axis(AxisRole),
    Markers,
    PointLabels,
    Tooltips,
    DimensionLabels(AxisRole),
}

impl LayerSlot {
    pub const ALL: [LayerSlot; 7] = [
        LayerSlot::Axis(AxisRole::X),
        LayerSlot::Axis(AxisRole::Y),
        LayerSlot::Markers,
        LayerSlot::PointLabels,
        LayerSlot::Tooltips,
        LayerSlot::DimensionLabels(AxisRole::X),
        LayerSlot::DimensionLabels(AxisRole::Y),
    ];

    /// Slots a transition on `role` touches, in dispatch order.
    pub fn required_for(role: AxisRole) -> [LayerSlot; 5] {
        [
            LayerSlot::Axis(role),
            LayerSlot::Markers,
            LayerSlot::PointLabels,
            LayerSlot::Tooltips,
            LayerSlot::DimensionLabels(role),
        ]
    }
}

impl fmt::Display for LayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSlot::Axis(role) => write!(f, "{role} axis"),
            LayerSlot::Markers => write!(f, "markers"),
            LayerSlot::PointLabels => write!(f, "point labels"),
            LayerSlot::Tooltips => write!(f, "tooltips"),
            LayerSlot::DimensionLabels(role) => write!(f, "{role} dimension labels"),
        }
    }
}

/// One axis tick: its data value and formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// New tick set for one axis. `previous` is the scale the ticks were laid out
/// with before, so entering ticks can start where it would have put them.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisUpdate {
    pub role: AxisRole,
    pub previous: Scale,
    pub scale: Scale,
    pub ticks: Vec<AxisTick>,
}

/// Styling state of a dimension label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    Active,
    Inactive,
}

impl LabelStyle {
    /// CSS-like class name.
    pub fn class(self) -> &'static str {
        match self {
            LabelStyle::Active => "active",
            LabelStyle::Inactive => "inactive",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, LabelStyle::Active)
    }
}

/// Tick marks and tick labels for one axis.
pub trait AxisLayer {
    fn transition_axis(&mut self, update: &AxisUpdate, transition: Transition);
}

/// Point markers. `positions[i]` is the new pixel coordinate of observation
/// `i` along `role` (`cx` for X, `cy` for Y); the other coordinate stays.
pub trait MarkerLayer {
    fn transition_markers(&mut self, role: AxisRole, positions: &[f64], transition: Transition);
}

/// Short-label text anchored to each marker. Same contract as [`MarkerLayer`].
pub trait PointLabelLayer {
    fn transition_labels(&mut self, role: AxisRole, positions: &[f64], transition: Transition);
}

/// Hover tooltips. `contents[i]` belongs to marker `i`.
pub trait TooltipLayer {
    fn rebind_tooltips(&mut self, contents: &[TooltipContent]);
}

/// Active/inactive styling of the clickable dimension labels of one axis.
pub trait DimensionLabelLayer {
    fn restyle_labels(
        &mut self,
        role: AxisRole,
        styles: &[(AttributeKey, LabelStyle)],
        transition: Transition,
    );
}

/// Every layer a transition on one axis needs, borrowed together.
pub struct BoundLayers<'a> {
    pub axis: &'a mut dyn AxisLayer,
    pub markers: &'a mut dyn MarkerLayer,
    pub point_labels: &'a mut dyn PointLabelLayer,
    pub tooltips: &'a mut dyn TooltipLayer,
    pub dimension_labels: &'a mut dyn DimensionLabelLayer,
}

/// Binding table for the seven layer slots.
#[derive(Default)]
pub struct LayerSet {
    x_axis: Option<Box<dyn AxisLayer>>,
    y_axis: Option<Box<dyn AxisLayer>>,
    markers: Option<Box<dyn MarkerLayer>>,
    point_labels: Option<Box<dyn PointLabelLayer>>,
    tooltips: Option<Box<dyn TooltipLayer>>,
    x_labels: Option<Box<dyn DimensionLabelLayer>>,
    y_labels: Option<Box<dyn DimensionLabelLayer>>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_axis(&mut self, role: AxisRole, layer: Box<dyn AxisLayer>) {
        match role {
            AxisRole::X => self.x_axis = Some(layer),
            AxisRole::Y => self.y_axis = Some(layer),
        }
    }

    pub fn bind_markers(&mut self, layer: Box<dyn MarkerLayer>) {
        self.markers = Some(layer);
    }

    pub fn bind_point_labels(&mut self, layer: Box<dyn PointLabelLayer>) {
        self.point_labels = Some(layer);
    }

    pub fn bind_tooltips(&mut self, layer: Box<dyn TooltipLayer>) {
        self.tooltips = Some(layer);
    }

    pub fn bind_dimension_labels(&mut self, role: AxisRole, layer: Box<dyn DimensionLabelLayer>) {
        match role {
            AxisRole::X => self.x_labels = Some(layer),
            AxisRole::Y => self.y_labels = Some(layer),
        }
    }

    /// Remove whatever is bound in `slot`.
    pub fn unbind(&mut self, slot: LayerSlot) {
        match slot {
            LayerSlot::Axis(AxisRole::X) => self.x_axis = None,
            LayerSlot::Axis(AxisRole::Y) => self.y_axis = None,
            LayerSlot::Markers => self.markers = None,
            LayerSlot::PointLabels => self.point_labels = None,
            LayerSlot::Tooltips => self.tooltips = None,
            LayerSlot::DimensionLabels(AxisRole::X) => self.x_labels = None,
            LayerSlot::DimensionLabels(AxisRole::Y) => self.y_labels = None,
        }
    }

    pub fn is_bound(&self, slot: LayerSlot) -> bool {
        match slot {
            LayerSlot::Axis(AxisRole::X) => self.x_axis.is_some(),
            LayerSlot::Axis(AxisRole::Y) => self.y_axis.is_some(),
            LayerSlot::Markers => self.markers.is_some(),
            LayerSlot::PointLabels => self.point_labels.is_some(),
            LayerSlot::Tooltips => self.tooltips.is_some(),
            LayerSlot::DimensionLabels(AxisRole::X) => self.x_labels.is_some(),
            LayerSlot::DimensionLabels(AxisRole::Y) => self.y_labels.is_some(),
        }
    }

    /// First slot in `slots` with nothing bound.
    pub fn first_missing(&self, slots: &[LayerSlot]) -> Option<LayerSlot> {
        slots.iter().copied().find(|&s| !self.is_bound(s))
    }

    /// Borrow every layer a transition on `role` touches, or report the first
    /// missing one.
    pub fn resolve(&mut self, role: AxisRole) -> Result<BoundLayers<'_>> {
        if let Some(slot) = self.first_missing(&LayerSlot::required_for(role)) {
            return Err(PlotError::LayerNotBound { slot });
        }
        let (axis, labels) = match role {
            AxisRole::X => (&mut self.x_axis, &mut self.x_labels),
            AxisRole::Y => (&mut self.y_axis, &mut self.y_labels),
        };
        let missing = |slot| PlotError::LayerNotBound { slot };
        Ok(BoundLayers {
            axis: axis.as_deref_mut().ok_or(missing(LayerSlot::Axis(role)))?,
            markers: self.markers.as_deref_mut().ok_or(missing(LayerSlot::Markers))?,
            point_labels: self
                .point_labels
                .as_deref_mut()
                .ok_or(missing(LayerSlot::PointLabels))?,
            tooltips: self.tooltips.as_deref_mut().ok_or(missing(LayerSlot::Tooltips))?,
            dimension_labels: labels
                .as_deref_mut()
                .ok_or(missing(LayerSlot::DimensionLabels(role)))?,
        })
    }
}
