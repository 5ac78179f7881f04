//! Clickable dimension labels.
//!
//! Each label carries a fixed [`AttributeKey`] tag. Activating a label that
//! already shows the current selection is dropped here, before
//! [`SelectionState`] is consulted; the state's own no-op check is a second,
//! independent guard.

use crate::data::attributes::{AttributeKey, AxisRole};
use crate::error::Result;
use crate::render::sync::RenderSync;
use crate::selection::{Selection, SelectionState, TransitionPlan};

/// One clickable label under (X) or beside (Y) the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionLabel {
    pub key: AttributeKey,
    pub role: AxisRole,
}

impl DimensionLabel {
    pub fn text(&self) -> &'static str {
        self.key.label()
    }
}

/// What an activation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Ignored,
    Applied(TransitionPlan),
}

/// Routes label activations into [`RenderSync`].
#[derive(Debug, Clone)]
pub struct InputBinding {
    labels: Vec<DimensionLabel>,
}

impl Default for InputBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBinding {
    /// One label per attribute, grouped by axis in display order.
    pub fn new() -> Self {
        let labels = AxisRole::ALL
            .into_iter()
            .flat_map(|role| role.eligible().iter().map(move |&key| DimensionLabel { key, role }))
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[DimensionLabel] {
        &self.labels
    }

    pub fn labels_for(&self, role: AxisRole) -> impl Iterator<Item = &DimensionLabel> {
        self.labels.iter().filter(move |l| l.role == role)
    }

    /// Handle a click on the label tagged `key`.
    pub fn activate(
        &self,
        key: AttributeKey,
        state: &mut SelectionState,
        sync: &mut RenderSync,
    ) -> Result<Activation> {
        let role = key.role();
        if state.chosen(role) == key {
            tracing::trace!(%key, "label already active");
            return Ok(Activation::Ignored);
        }
        match sync.select(state, role, key)? {
            Selection::NoOp => Ok(Activation::Ignored),
            Selection::Transition(plan) => Ok(Activation::Applied(plan)),
        }
    }

    /// Same as [`activate`](Self::activate) for a textual tag such as
    /// `"income"`.
    pub fn activate_tag(
        &self,
        tag: &str,
        state: &mut SelectionState,
        sync: &mut RenderSync,
    ) -> Result<Activation> {
        let key: AttributeKey = tag.parse()?;
        self.activate(key, state, sync)
    }
}
