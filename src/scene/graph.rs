use crate::config::ScatterConfig;
use crate::data::attributes::{AttributeKey, AxisRole};
use crate::data::dataset::Dataset;
use crate::data::tooltip::TooltipContent;
use crate::render::layer::{
    AxisLayer, AxisUpdate, DimensionLabelLayer, LabelStyle, MarkerLayer, PointLabelLayer,
    TooltipLayer,
};
use crate::render::transition::Transition;

use super::animated::Animated;
use super::layout::{dimension_label_anchor, LabelAnchor};

/// One tick mark with its label.
#[derive(Debug, Clone)]
pub struct TickNode {
    pub value: f64,
    pub label: String,
    pub position: Animated,
    pub opacity: Animated,
    /// No longer part of the tick set; removed once faded out.
    pub exiting: bool,
}

#[derive(Debug, Clone)]
pub struct MarkerNode {
    pub cx: Animated,
    pub cy: Animated,
}

#[derive(Debug, Clone)]
pub struct TextNode {
    pub text: String,
    pub x: Animated,
    pub y: Animated,
}

#[derive(Debug, Clone)]
pub struct DimensionLabelNode {
    pub key: AttributeKey,
    pub anchor: LabelAnchor,
    pub style: LabelStyle,
    /// 0 = inactive look, 1 = active look.
    pub emphasis: Animated,
}

/// Tick values sampled at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTick {
    pub value: f64,
    pub label: String,
    pub position: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMarker {
    pub center: (f64, f64),
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedText {
    pub text: String,
    pub pos: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLabel {
    pub key: AttributeKey,
    pub text: &'static str,
    pub anchor: LabelAnchor,
    pub style: LabelStyle,
    pub emphasis: f64,
}

/// Everything needed to paint one frame, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub x_ticks: Vec<ResolvedTick>,
    pub y_ticks: Vec<ResolvedTick>,
    pub markers: Vec<ResolvedMarker>,
    pub point_labels: Vec<ResolvedText>,
    pub dimension_labels: Vec<ResolvedLabel>,
}

impl SceneFrame {
    pub fn ticks(&self, role: AxisRole) -> &[ResolvedTick] {
        match role {
            AxisRole::X => &self.x_ticks,
            AxisRole::Y => &self.y_ticks,
        }
    }
}

/// Retained scene the layers write into and the painter samples from.
///
/// Transitions are stamped with the scene clock, which the host advances
/// once per frame with [`set_clock`](Self::set_clock).
#[derive(Debug, Clone)]
pub struct SceneGraph {
    clock: f64,
    x_ticks: Vec<TickNode>,
    y_ticks: Vec<TickNode>,
    markers: Vec<MarkerNode>,
    point_labels: Vec<TextNode>,
    tooltips: Vec<TooltipContent>,
    dimension_labels: Vec<DimensionLabelNode>,
    marker_radius: f64,
}

impl SceneGraph {
    /// One marker and one point label per observation, all at the origin
    /// until the first render positions them.
    pub fn new(dataset: &Dataset, cfg: &ScatterConfig) -> Self {
        let markers = dataset
            .iter()
            .map(|_| MarkerNode {
                cx: Animated::new(0.0),
                cy: Animated::new(0.0),
            })
            .collect();
        let point_labels = dataset
            .iter()
            .map(|o| TextNode {
                text: o.short_label.clone(),
                x: Animated::new(0.0),
                y: Animated::new(0.0),
            })
            .collect();
        let dimension_labels = AttributeKey::ALL
            .into_iter()
            .map(|key| DimensionLabelNode {
                key,
                anchor: dimension_label_anchor(key, &cfg.viewport),
                style: LabelStyle::Inactive,
                emphasis: Animated::new(0.0),
            })
            .collect();
        Self {
            clock: 0.0,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            markers,
            point_labels,
            tooltips: Vec::new(),
            dimension_labels,
            marker_radius: cfg.markers.radius,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advance the clock (seconds) and drop ticks that finished fading out.
    pub fn set_clock(&mut self, now: f64) {
        self.clock = now;
        for ticks in [&mut self.x_ticks, &mut self.y_ticks] {
            ticks.retain(|t| !(t.exiting && t.opacity.is_settled(now)));
        }
    }

    pub fn ticks(&self, role: AxisRole) -> &[TickNode] {
        match role {
            AxisRole::X => &self.x_ticks,
            AxisRole::Y => &self.y_ticks,
        }
    }

    fn ticks_mut(&mut self, role: AxisRole) -> &mut Vec<TickNode> {
        match role {
            AxisRole::X => &mut self.x_ticks,
            AxisRole::Y => &mut self.y_ticks,
        }
    }

    pub fn markers(&self) -> &[MarkerNode] {
        &self.markers
    }

    pub fn point_labels(&self) -> &[TextNode] {
        &self.point_labels
    }

    pub fn dimension_labels(&self) -> &[DimensionLabelNode] {
        &self.dimension_labels
    }

    pub fn tooltip(&self, marker: usize) -> Option<&TooltipContent> {
        self.tooltips.get(marker)
    }

    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    pub fn label_style(&self, key: AttributeKey) -> Option<LabelStyle> {
        self.dimension_labels
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.style)
    }

    /// True while any attribute is still moving.
    pub fn is_animating(&self, now: f64) -> bool {
        let ticks = self
            .x_ticks
            .iter()
            .chain(&self.y_ticks)
            .any(|t| !t.position.is_settled(now) || !t.opacity.is_settled(now));
        let markers = self
            .markers
            .iter()
            .any(|m| !m.cx.is_settled(now) || !m.cy.is_settled(now));
        let labels = self
            .point_labels
            .iter()
            .any(|l| !l.x.is_settled(now) || !l.y.is_settled(now));
        let dims = self
            .dimension_labels
            .iter()
            .any(|l| !l.emphasis.is_settled(now));
        ticks || markers || labels || dims
    }

    /// Topmost marker containing `point` (plot coordinates) at time `now`.
    pub fn hit_marker(&self, point: (f64, f64), now: f64) -> Option<usize> {
        let r2 = self.marker_radius * self.marker_radius;
        self.markers.iter().rposition(|m| {
            let dx = m.cx.value_at(now) - point.0;
            let dy = m.cy.value_at(now) - point.1;
            dx * dx + dy * dy <= r2
        })
    }

    /// Sample every node at `now`.
    pub fn frame(&self, now: f64) -> SceneFrame {
        let resolve_ticks = |ticks: &[TickNode]| {
            ticks
                .iter()
                .map(|t| ResolvedTick {
                    value: t.value,
                    label: t.label.clone(),
                    position: t.position.value_at(now),
                    opacity: t.opacity.value_at(now).clamp(0.0, 1.0),
                })
                .collect()
        };
        SceneFrame {
            x_ticks: resolve_ticks(&self.x_ticks),
            y_ticks: resolve_ticks(&self.y_ticks),
            markers: self
                .markers
                .iter()
                .map(|m| ResolvedMarker {
                    center: (m.cx.value_at(now), m.cy.value_at(now)),
                    radius: self.marker_radius,
                })
                .collect(),
            point_labels: self
                .point_labels
                .iter()
                .map(|l| ResolvedText {
                    text: l.text.clone(),
                    pos: (l.x.value_at(now), l.y.value_at(now)),
                })
                .collect(),
            dimension_labels: self
                .dimension_labels
                .iter()
                .map(|l| ResolvedLabel {
                    key: l.key,
                    text: l.key.label(),
                    anchor: l.anchor,
                    style: l.style,
                    emphasis: l.emphasis.value_at(now).clamp(0.0, 1.0),
                })
                .collect(),
        }
    }
}

fn warn_on_len_mismatch(layer: &str, expected: usize, got: usize) {
    if expected != got {
        tracing::warn!(layer, expected, got, "position count does not match node count");
    }
}

impl AxisLayer for SceneGraph {
    fn transition_axis(&mut self, update: &AxisUpdate, transition: Transition) {
        let now = self.clock;
        let ticks = self.ticks_mut(update.role);

        for node in ticks.iter_mut() {
            let target = update.scale.map(node.value);
            node.position.retarget(target, now, transition);
            match update.ticks.iter().find(|t| t.value == node.value) {
                Some(tick) => {
                    node.label = tick.label.clone();
                    node.exiting = false;
                    node.opacity.retarget(1.0, now, transition);
                }
                None => {
                    node.exiting = true;
                    node.opacity.retarget(0.0, now, transition);
                }
            }
        }

        for tick in &update.ticks {
            if ticks.iter().any(|n| n.value == tick.value) {
                continue;
            }
            let mut position = Animated::new(update.previous.map(tick.value));
            position.retarget(update.scale.map(tick.value), now, transition);
            let mut opacity = Animated::new(0.0);
            opacity.retarget(1.0, now, transition);
            ticks.push(TickNode {
                value: tick.value,
                label: tick.label.clone(),
                position,
                opacity,
                exiting: false,
            });
        }

        ticks.retain(|t| !(t.exiting && t.opacity.is_settled(now)));
        ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
    }
}

impl MarkerLayer for SceneGraph {
    fn transition_markers(&mut self, role: AxisRole, positions: &[f64], transition: Transition) {
        warn_on_len_mismatch("markers", self.markers.len(), positions.len());
        let now = self.clock;
        for (node, &p) in self.markers.iter_mut().zip(positions) {
            let attr = match role {
                AxisRole::X => &mut node.cx,
                AxisRole::Y => &mut node.cy,
            };
            attr.retarget(p, now, transition);
        }
    }
}

impl PointLabelLayer for SceneGraph {
    fn transition_labels(&mut self, role: AxisRole, positions: &[f64], transition: Transition) {
        warn_on_len_mismatch("point labels", self.point_labels.len(), positions.len());
        let now = self.clock;
        for (node, &p) in self.point_labels.iter_mut().zip(positions) {
            let attr = match role {
                AxisRole::X => &mut node.x,
                AxisRole::Y => &mut node.y,
            };
            attr.retarget(p, now, transition);
        }
    }
}

impl TooltipLayer for SceneGraph {
    fn rebind_tooltips(&mut self, contents: &[TooltipContent]) {
        warn_on_len_mismatch("tooltips", self.markers.len(), contents.len());
        self.tooltips = contents.to_vec();
    }
}

impl DimensionLabelLayer for SceneGraph {
    fn restyle_labels(
        &mut self,
        role: AxisRole,
        styles: &[(AttributeKey, LabelStyle)],
        transition: Transition,
    ) {
        let now = self.clock;
        for &(key, style) in styles {
            debug_assert_eq!(key.role(), role);
            if let Some(node) = self.dimension_labels.iter_mut().find(|l| l.key == key) {
                node.style = style;
                let target = if style.is_active() { 1.0 } else { 0.0 };
                node.emphasis.retarget(target, now, transition);
            }
        }
    }
}
