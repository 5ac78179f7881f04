//! Controller for driving the axis selection from outside the UI.
//!
//! The controller records requests and broadcasts what was applied; it never
//! touches [`SelectionState`] itself. The UI thread drains pending requests
//! once per frame through [`SelectionController::process`], so clicks and
//! controller requests share one writer path.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::attributes::{AttributeKey, AxisRole};
use crate::error::PlotError;
use crate::input::{Activation, InputBinding};
use crate::render::sync::RenderSync;
use crate::selection::{SelectionState, TransitionPlan};

/// Broadcast after every applied selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub role: AxisRole,
    pub previous: AttributeKey,
    pub current: AttributeKey,
    /// Domain of the new scale.
    pub domain: (f64, f64),
}

impl From<&TransitionPlan> for SelectionEvent {
    fn from(plan: &TransitionPlan) -> Self {
        Self {
            role: plan.axis_role,
            previous: plan.previous_attribute,
            current: plan.affected_attribute,
            domain: plan.new_scale.domain(),
        }
    }
}

/// Handle to request selections and subscribe to selection changes.
#[derive(Clone, Default)]
pub struct SelectionController {
    pub(crate) inner: Arc<Mutex<SelectionCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct SelectionCtrlInner {
    pub(crate) current: Option<(AttributeKey, AttributeKey)>,
    pub(crate) pending: Vec<AttributeKey>,
    pub(crate) listeners: Vec<Sender<SelectionEvent>>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SelectionCtrlInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Ask the UI to switch the axis `key` belongs to over to `key`.
    pub fn request_select(&self, key: AttributeKey) {
        self.lock().pending.push(key);
    }

    /// Last known `(x, y)` selection, once the UI has attached.
    pub fn current(&self) -> Option<(AttributeKey, AttributeKey)> {
        self.lock().current
    }

    /// Receive a [`SelectionEvent`] for every applied change.
    pub fn subscribe(&self) -> Receiver<SelectionEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Record the selection `state` currently holds.
    pub fn attach(&self, state: &SelectionState) {
        self.lock().current = Some((state.chosen_x(), state.chosen_y()));
    }

    /// Update the current selection and notify subscribers. Subscribers whose
    /// receiver was dropped are removed.
    pub fn publish(&self, plan: &TransitionPlan) {
        let event = SelectionEvent::from(plan);
        let mut inner = self.lock();
        if let Some((x, y)) = inner.current.as_mut() {
            match event.role {
                AxisRole::X => *x = event.current,
                AxisRole::Y => *y = event.current,
            }
        }
        inner.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Apply every pending request in order. Returns the errors of requests
    /// that failed; the rest were applied (or ignored as already active).
    pub fn process(
        &self,
        input: &InputBinding,
        state: &mut SelectionState,
        sync: &mut RenderSync,
    ) -> Vec<PlotError> {
        let pending = std::mem::take(&mut self.lock().pending);
        let mut errors = Vec::new();
        for key in pending {
            match input.activate(key, state, sync) {
                Ok(Activation::Applied(plan)) => self.publish(&plan),
                Ok(Activation::Ignored) => {}
                Err(e) => {
                    tracing::warn!(%key, error = %e, "controller selection request failed");
                    errors.push(e);
                }
            }
        }
        errors
    }
}
