use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::ScatterConfig;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::Dataset;
use crate::data::tooltip::TooltipContent;
use crate::render::layer::{
    AxisLayer, AxisUpdate, DimensionLabelLayer, LabelStyle, LayerSet, MarkerLayer,
    PointLabelLayer, TooltipLayer,
};
use crate::render::transition::Transition;

use super::graph::SceneGraph;

/// Shared handle to a [`SceneGraph`].
///
/// Every layer slot of a [`LayerSet`] can hold a clone of the same handle,
/// while the UI keeps another clone to advance the clock and paint.
#[derive(Clone, Debug)]
pub struct SceneHandle(Rc<RefCell<SceneGraph>>);

impl SceneHandle {
    pub fn new(dataset: &Dataset, cfg: &ScatterConfig) -> Self {
        Self(Rc::new(RefCell::new(SceneGraph::new(dataset, cfg))))
    }

    pub fn borrow(&self) -> Ref<'_, SceneGraph> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, SceneGraph> {
        self.0.borrow_mut()
    }

    /// A layer set with all seven slots bound to this scene.
    pub fn layer_set(&self) -> LayerSet {
        let mut layers = LayerSet::new();
        for role in AxisRole::ALL {
            layers.bind_axis(role, Box::new(self.clone()));
            layers.bind_dimension_labels(role, Box::new(self.clone()));
        }
        layers.bind_markers(Box::new(self.clone()));
        layers.bind_point_labels(Box::new(self.clone()));
        layers.bind_tooltips(Box::new(self.clone()));
        layers
    }
}

impl AxisLayer for SceneHandle {
    fn transition_axis(&mut self, update: &AxisUpdate, transition: Transition) {
        self.0.borrow_mut().transition_axis(update, transition);
    }
}

impl MarkerLayer for SceneHandle {
    fn transition_markers(&mut self, role: AxisRole, positions: &[f64], transition: Transition) {
        self.0
            .borrow_mut()
            .transition_markers(role, positions, transition);
    }
}

impl PointLabelLayer for SceneHandle {
    fn transition_labels(&mut self, role: AxisRole, positions: &[f64], transition: Transition) {
        self.0
            .borrow_mut()
            .transition_labels(role, positions, transition);
    }
}

impl TooltipLayer for SceneHandle {
    fn rebind_tooltips(&mut self, contents: &[TooltipContent]) {
        self.0.borrow_mut().rebind_tooltips(contents);
    }
}

impl DimensionLabelLayer for SceneHandle {
    fn restyle_labels(
        &mut self,
        role: AxisRole,
        styles: &[(AttributeKey, LabelStyle)],
        transition: Transition,
    ) {
        self.0.borrow_mut().restyle_labels(role, styles, transition);
    }
}
