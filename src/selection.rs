//! The two-axis selection: which attribute each axis shows and the scale
//! derived for it.
//!
//! [`SelectionState`] is the single long-lived mutable object of the chart and
//! the only authority render layers consult for "where does this value plot".
//! It changes one axis at a time through [`SelectionState::select_attribute`];
//! every failure leaves it exactly as it was.

use std::sync::Arc;

use crate::config::Viewport;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::{Dataset, Observation};
use crate::error::{PlotError, Result};
use crate::scale::{compute_scale, Scale};

/// Description of one axis re-binding, consumed by the render layers.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub axis_role: AxisRole,
    pub old_scale: Arc<Scale>,
    pub new_scale: Arc<Scale>,
    /// The attribute now bound to `axis_role`.
    pub affected_attribute: AttributeKey,
    /// The attribute that was bound before.
    pub previous_attribute: AttributeKey,
}

/// Outcome of a selection request.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The attribute was already selected; nothing changed.
    NoOp,
    Transition(TransitionPlan),
}

impl Selection {
    pub fn plan(&self) -> Option<&TransitionPlan> {
        match self {
            Selection::NoOp => None,
            Selection::Transition(plan) => Some(plan),
        }
    }
}

#[derive(Debug, Clone)]
struct AxisBinding {
    key: AttributeKey,
    scale: Arc<Scale>,
    range: (f64, f64),
}

/// Current `(chosen_x, chosen_y, x_scale, y_scale)`.
#[derive(Debug, Clone)]
pub struct SelectionState {
    dataset: Dataset,
    x: AxisBinding,
    y: AxisBinding,
}

impl SelectionState {
    /// Start with the first eligible attribute on each axis.
    pub fn new(dataset: Dataset, viewport: &Viewport) -> Result<Self> {
        Self::with_selection(
            dataset,
            viewport,
            AxisRole::X.default_attribute(),
            AxisRole::Y.default_attribute(),
        )
    }

    /// Start with an explicit pair of attributes.
    pub fn with_selection(
        dataset: Dataset,
        viewport: &Viewport,
        x_key: AttributeKey,
        y_key: AttributeKey,
    ) -> Result<Self> {
        let x = bind(&dataset, viewport, AxisRole::X, x_key)?;
        let y = bind(&dataset, viewport, AxisRole::Y, y_key)?;
        Ok(Self { dataset, x, y })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn chosen(&self, role: AxisRole) -> AttributeKey {
        self.binding(role).key
    }

    pub fn scale(&self, role: AxisRole) -> &Arc<Scale> {
        &self.binding(role).scale
    }

    pub fn chosen_x(&self) -> AttributeKey {
        self.x.key
    }

    pub fn chosen_y(&self) -> AttributeKey {
        self.y.key
    }

    pub fn x_scale(&self) -> &Arc<Scale> {
        &self.x.scale
    }

    pub fn y_scale(&self) -> &Arc<Scale> {
        &self.y.scale
    }

    /// Pixel coordinate of `value` on the axis `role`.
    pub fn project(&self, role: AxisRole, value: f64) -> f64 {
        self.binding(role).scale.map(value)
    }

    /// Plot-space pixel centre of an observation under the current selection.
    pub fn position(&self, observation: &Observation) -> (f64, f64) {
        (
            self.x.scale.map(self.x.key.value(observation)),
            self.y.scale.map(self.y.key.value(observation)),
        )
    }

    /// Bind `new_key` to the axis `role`.
    ///
    /// Returns [`Selection::NoOp`] without touching anything when `new_key` is
    /// already bound. Otherwise recomputes only that axis's scale from the
    /// full dataset; the other axis keeps its key and its `Arc<Scale>`.
    pub fn select_attribute(&mut self, role: AxisRole, new_key: AttributeKey) -> Result<Selection> {
        if !new_key.is_eligible_for(role) {
            return Err(PlotError::InvalidAttributeForAxis { key: new_key, role });
        }
        if self.chosen(role) == new_key {
            return Ok(Selection::NoOp);
        }

        let range = self.binding(role).range;
        let new_scale = Arc::new(compute_scale(&self.dataset, new_key, role, range)?);

        let binding = self.binding_mut(role);
        let previous_attribute = std::mem::replace(&mut binding.key, new_key);
        let old_scale = std::mem::replace(&mut binding.scale, Arc::clone(&new_scale));

        tracing::debug!(
            %role,
            from = %previous_attribute,
            to = %new_key,
            domain = ?new_scale.domain(),
            "axis re-bound"
        );

        Ok(Selection::Transition(TransitionPlan {
            axis_role: role,
            old_scale,
            new_scale,
            affected_attribute: new_key,
            previous_attribute,
        }))
    }

    fn binding(&self, role: AxisRole) -> &AxisBinding {
        match role {
            AxisRole::X => &self.x,
            AxisRole::Y => &self.y,
        }
    }

    fn binding_mut(&mut self, role: AxisRole) -> &mut AxisBinding {
        match role {
            AxisRole::X => &mut self.x,
            AxisRole::Y => &mut self.y,
        }
    }
}

fn bind(dataset: &Dataset, viewport: &Viewport, role: AxisRole, key: AttributeKey) -> Result<AxisBinding> {
    if !key.is_eligible_for(role) {
        return Err(PlotError::InvalidAttributeForAxis { key, role });
    }
    let range = viewport.pixel_range(role);
    let scale = compute_scale(dataset, key, role, range)?;
    Ok(AxisBinding {
        key,
        scale: Arc::new(scale),
        range,
    })
}
