//! RenderSync: applies axis re-bindings to every dependent layer.
//!
//! A selection change runs in two phases. First everything that can fail
//! happens (layer lookup, attribute validation, scale derivation) and every
//! layer payload is computed. Only then are the layers called, in a fixed
//! order, all with the same [`Transition`]:
//!
//! 1. axis ticks
//! 2. markers (`cx` or `cy` only)
//! 3. point labels (same, plus the Y text offset)
//! 4. tooltips
//! 5. dimension-label styling
//!
//! Layers only schedule animations; nothing here waits for them.

use crate::config::ScatterConfig;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::Dataset;
use crate::data::tooltip::{TooltipContent, TooltipFormat};
use crate::error::{PlotError, Result};
use crate::render::layer::{AxisTick, AxisUpdate, BoundLayers, LabelStyle, LayerSet, LayerSlot};
use crate::render::transition::Transition;
use crate::scale::{format_tick, Scale};
use crate::selection::{Selection, SelectionState, TransitionPlan};

/// Parameters shared by every transition RenderSync issues.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub transition: Transition,
    pub tick_count: usize,
    /// Pixels added to a point label's Y so it sits centred in its marker.
    pub label_offset_y: f64,
    pub tooltip: TooltipFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from_config(&ScatterConfig::default())
    }
}

impl RenderSettings {
    pub fn from_config(cfg: &ScatterConfig) -> Self {
        Self {
            transition: cfg.transition.transition(),
            tick_count: cfg.axes.tick_count,
            label_offset_y: cfg.markers.label_offset_y,
            tooltip: cfg.tooltip.format.clone(),
        }
    }
}

/// Everything one axis change sends to the layers, computed up front.
struct AxisFrame {
    axis: AxisUpdate,
    markers: Vec<f64>,
    labels: Vec<f64>,
    styles: Vec<(AttributeKey, LabelStyle)>,
}

/// Active styling for `active`, inactive for the other keys of its axis.
pub fn label_styles(role: AxisRole, active: AttributeKey) -> Vec<(AttributeKey, LabelStyle)> {
    role.eligible()
        .iter()
        .map(|&key| {
            let style = if key == active {
                LabelStyle::Active
            } else {
                LabelStyle::Inactive
            };
            (key, style)
        })
        .collect()
}

/// Formatted ticks for `scale`.
pub fn axis_ticks(scale: &Scale, count: usize) -> Vec<AxisTick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format_tick(value, step),
        })
        .collect()
}

/// Orchestrator owning the bound layers.
pub struct RenderSync {
    layers: LayerSet,
    settings: RenderSettings,
}

impl RenderSync {
    pub fn new(layers: LayerSet, settings: RenderSettings) -> Self {
        Self { layers, settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerSet {
        &mut self.layers
    }

    /// Fail with [`PlotError::LayerNotBound`] unless every layer a transition
    /// on `role` touches is bound.
    pub fn ensure_bound(&self, role: AxisRole) -> Result<()> {
        match self.layers.first_missing(&LayerSlot::required_for(role)) {
            Some(slot) => Err(PlotError::LayerNotBound { slot }),
            None => Ok(()),
        }
    }

    /// Re-bind `role` to `key` and animate every layer to match.
    ///
    /// Layer binding is checked before `state` is touched, so an error leaves
    /// both the state and the layers unchanged.
    pub fn select(
        &mut self,
        state: &mut SelectionState,
        role: AxisRole,
        key: AttributeKey,
    ) -> Result<Selection> {
        self.ensure_bound(role)?;
        let selection = state.select_attribute(role, key)?;
        if let Selection::Transition(plan) = &selection {
            self.apply(state.dataset(), plan)?;
        }
        Ok(selection)
    }

    /// Apply an already computed plan to the layers.
    pub fn apply(&mut self, dataset: &Dataset, plan: &TransitionPlan) -> Result<()> {
        let _span = tracing::debug_span!("render_sync", role = %plan.axis_role).entered();

        let frame = self.axis_frame(
            dataset,
            plan.axis_role,
            plan.affected_attribute,
            &plan.old_scale,
            &plan.new_scale,
        );
        let tooltips = self.settings.tooltip.contents(dataset);
        let transition = self.settings.transition;

        let layers = self.layers.resolve(plan.axis_role)?;
        dispatch(layers, plan.axis_role, frame, &tooltips, transition);

        tracing::info!(
            role = %plan.axis_role,
            attribute = %plan.affected_attribute,
            duration_ms = transition.duration.as_millis() as u64,
            "transition issued"
        );
        Ok(())
    }

    /// First full draw: both axes, both marker coordinates, tooltips and both
    /// label groups, applied immediately. Every slot must be bound.
    pub fn render_initial(&mut self, state: &SelectionState) -> Result<()> {
        if let Some(slot) = self.layers.first_missing(&LayerSlot::ALL) {
            return Err(PlotError::LayerNotBound { slot });
        }
        let dataset = state.dataset();
        let frames: Vec<(AxisRole, AxisFrame)> = AxisRole::ALL
            .into_iter()
            .map(|role| {
                let scale = state.scale(role);
                (role, self.axis_frame(dataset, role, state.chosen(role), scale, scale))
            })
            .collect();
        let tooltips = self.settings.tooltip.contents(dataset);

        for (role, frame) in frames {
            let layers = self.layers.resolve(role)?;
            dispatch(layers, role, frame, &tooltips, Transition::immediate());
        }
        tracing::debug!(observations = dataset.len(), "initial render issued");
        Ok(())
    }

    fn axis_frame(
        &self,
        dataset: &Dataset,
        role: AxisRole,
        key: AttributeKey,
        old_scale: &Scale,
        new_scale: &Scale,
    ) -> AxisFrame {
        let markers: Vec<f64> = dataset.iter().map(|o| new_scale.map(o.value(key))).collect();
        let labels = match role {
            AxisRole::X => markers.clone(),
            AxisRole::Y => markers.iter().map(|y| y + self.settings.label_offset_y).collect(),
        };
        AxisFrame {
            axis: AxisUpdate {
                role,
                previous: *old_scale,
                scale: *new_scale,
                ticks: axis_ticks(new_scale, self.settings.tick_count),
            },
            markers,
            labels,
            styles: label_styles(role, key),
        }
    }
}

fn dispatch(
    layers: BoundLayers<'_>,
    role: AxisRole,
    frame: AxisFrame,
    tooltips: &[TooltipContent],
    transition: Transition,
) {
    layers.axis.transition_axis(&frame.axis, transition);
    layers.markers.transition_markers(role, &frame.markers, transition);
    layers.point_labels.transition_labels(role, &frame.labels, transition);
    layers.tooltips.rebind_tooltips(tooltips);
    layers
        .dimension_labels
        .restyle_labels(role, &frame.styles, transition);
}
