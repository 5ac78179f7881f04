//! A fully wired chart without any window: selection state, render
//! synchronization, input routing and the scene the layers write into.
//!
//! [`ScatterApp`](crate::app::ScatterApp) wraps one of these for the native
//! window; the CLI uses it directly for headless export.

use std::path::Path;

use crate::config::ScatterConfig;
use crate::controllers::SelectionController;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::Dataset;
use crate::error::{ExportError, PlotError, Result};
use crate::input::{Activation, InputBinding};
use crate::render::sync::{RenderSettings, RenderSync};
use crate::scene::{svg, SceneFrame, SceneHandle};
use crate::selection::SelectionState;

pub struct ScatterChart {
    cfg: ScatterConfig,
    state: SelectionState,
    sync: RenderSync,
    input: InputBinding,
    scene: SceneHandle,
}

impl ScatterChart {
    /// Bind the configured initial attributes and draw the first frame.
    pub fn new(dataset: Dataset, cfg: ScatterConfig) -> Result<Self> {
        let state = SelectionState::with_selection(
            dataset,
            &cfg.viewport,
            cfg.initial_attribute(AxisRole::X),
            cfg.initial_attribute(AxisRole::Y),
        )?;
        let scene = SceneHandle::new(state.dataset(), &cfg);
        let mut sync = RenderSync::new(scene.layer_set(), RenderSettings::from_config(&cfg));
        sync.render_initial(&state)?;
        Ok(Self {
            cfg,
            state,
            sync,
            input: InputBinding::new(),
            scene,
        })
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.cfg
    }

    pub(crate) fn config_mut(&mut self) -> &mut ScatterConfig {
        &mut self.cfg
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn input(&self) -> &InputBinding {
        &self.input
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    /// Advance the animation clock (seconds).
    pub fn set_clock(&self, now: f64) {
        self.scene.borrow_mut().set_clock(now);
    }

    /// Route a label activation; an applied change is also published to
    /// `controller` when one is given.
    pub fn activate(
        &mut self,
        key: AttributeKey,
        controller: Option<&SelectionController>,
    ) -> Result<Activation> {
        let activation = self.input.activate(key, &mut self.state, &mut self.sync)?;
        if let (Activation::Applied(plan), Some(ctrl)) = (&activation, controller) {
            ctrl.publish(plan);
        }
        Ok(activation)
    }

    /// Apply the requests queued on `controller`.
    pub fn process_controller(&mut self, controller: &SelectionController) -> Vec<PlotError> {
        controller.process(&self.input, &mut self.state, &mut self.sync)
    }

    /// The scene sampled at its current clock.
    pub fn frame(&self) -> SceneFrame {
        let scene = self.scene.borrow();
        scene.frame(scene.clock())
    }

    pub fn export_svg(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        svg::write_svg(path, &self.frame(), &self.cfg)
    }

    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        svg::write_png(path, &self.frame(), &self.cfg)
    }
}

impl std::fmt::Debug for ScatterChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScatterChart")
            .field("x", &self.state.chosen_x())
            .field("y", &self.state.chosen_y())
            .field("observations", &self.state.dataset().len())
            .finish()
    }
}
