use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use switchplot::config::{ScatterConfig, Viewport};
use switchplot::data::TooltipContent;
use switchplot::render::{
    AxisLayer, AxisUpdate, DimensionLabelLayer, LabelStyle, LayerSet, LayerSlot, MarkerLayer,
    PointLabelLayer, RenderSettings, TooltipLayer, Transition,
};
use switchplot::{AttributeKey, AxisRole, Dataset, Observation, PlotError, RenderSync, SelectionState};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Axis(AxisUpdate, Duration),
    Markers(AxisRole, Vec<f64>, Duration),
    Labels(AxisRole, Vec<f64>, Duration),
    Tooltips(Vec<TooltipContent>),
    Styles(AxisRole, Vec<(AttributeKey, LabelStyle)>, Duration),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl AxisLayer for Recorder {
    fn transition_axis(&mut self, update: &AxisUpdate, t: Transition) {
        self.0.borrow_mut().push(Call::Axis(update.clone(), t.duration));
    }
}
impl MarkerLayer for Recorder {
    fn transition_markers(&mut self, role: AxisRole, p: &[f64], t: Transition) {
        self.0.borrow_mut().push(Call::Markers(role, p.to_vec(), t.duration));
    }
}
impl PointLabelLayer for Recorder {
    fn transition_labels(&mut self, role: AxisRole, p: &[f64], t: Transition) {
        self.0.borrow_mut().push(Call::Labels(role, p.to_vec(), t.duration));
    }
}
impl TooltipLayer for Recorder {
    fn rebind_tooltips(&mut self, contents: &[TooltipContent]) {
        self.0.borrow_mut().push(Call::Tooltips(contents.to_vec()));
    }
}
impl DimensionLabelLayer for Recorder {
    fn restyle_labels(&mut self, role: AxisRole, s: &[(AttributeKey, LabelStyle)], t: Transition) {
        self.0.borrow_mut().push(Call::Styles(role, s.to_vec(), t.duration));
    }
}

fn bound(rec: &Recorder) -> LayerSet {
    let mut layers = LayerSet::new();
    for role in AxisRole::ALL {
        layers.bind_axis(role, Box::new(rec.clone()));
        layers.bind_dimension_labels(role, Box::new(rec.clone()));
    }
    layers.bind_markers(Box::new(rec.clone()));
    layers.bind_point_labels(Box::new(rec.clone()));
    layers.bind_tooltips(Box::new(rec.clone()));
    layers
}

fn dataset() -> Dataset {
    let row = |state: &str, abbr: &str, poverty, income, age, healthcare, smokes, obesity| {
        Observation {
            name: state.to_string(),
            short_label: abbr.to_string(),
            poverty_rate: poverty,
            median_income: income,
            median_age: age,
            healthcare_uninsured_rate: healthcare,
            smoking_rate: smokes,
            obesity_rate: obesity,
        }
    };
    Dataset::new(vec![
        row("Alpha", "AA", 10.0, 50000.0, 35.0, 8.0, 20.0, 30.0),
        row("Beta", "BB", 20.0, 40000.0, 40.0, 12.0, 25.0, 35.0),
    ])
    .unwrap()
}

fn setup() -> (Recorder, RenderSync, SelectionState) {
    let rec = Recorder::default();
    let sync = RenderSync::new(bound(&rec), RenderSettings::default());
    let state = SelectionState::new(dataset(), &Viewport::default()).unwrap();
    (rec, sync, state)
}

#[test]
fn x_change_drives_all_five_layers_in_order_with_one_duration() {
    let (rec, mut sync, mut state) = setup();
    sync.select(&mut state, AxisRole::X, AttributeKey::MedianIncome).unwrap();
    let calls = rec.take();
    assert_eq!(calls.len(), 5);

    let d = Duration::from_millis(800);
    match &calls[0] {
        Call::Axis(update, dur) => {
            assert_eq!(update.role, AxisRole::X);
            assert_eq!(update.scale, **state.x_scale());
            assert_eq!(*dur, d);
        }
        other => panic!("expected axis first, got {other:?}"),
    }
    let expected: Vec<f64> = [50000.0, 40000.0].iter().map(|v| state.x_scale().map(*v)).collect();
    assert_eq!(calls[1], Call::Markers(AxisRole::X, expected.clone(), d));
    assert_eq!(calls[2], Call::Labels(AxisRole::X, expected, d));
    assert!(matches!(calls[3], Call::Tooltips(_)));
    assert_eq!(
        calls[4],
        Call::Styles(
            AxisRole::X,
            vec![
                (AttributeKey::PovertyRate, LabelStyle::Inactive),
                (AttributeKey::MedianAge, LabelStyle::Inactive),
                (AttributeKey::MedianIncome, LabelStyle::Active),
            ],
            d
        )
    );
}

#[test]
fn y_labels_are_offset_from_markers() {
    let (rec, mut sync, mut state) = setup();
    sync.select(&mut state, AxisRole::Y, AttributeKey::SmokingRate).unwrap();
    let calls = rec.take();
    let (markers, labels) = match (&calls[1], &calls[2]) {
        (Call::Markers(AxisRole::Y, m, _), Call::Labels(AxisRole::Y, l, _)) => (m, l),
        other => panic!("unexpected calls {other:?}"),
    };
    for (m, l) in markers.iter().zip(labels) {
        assert_eq!(*l, m + 3.0);
    }
}

#[test]
fn noop_selection_issues_nothing() {
    let (rec, mut sync, mut state) = setup();
    sync.select(&mut state, AxisRole::X, AttributeKey::PovertyRate).unwrap();
    assert!(rec.take().is_empty());
}

#[test]
fn missing_layer_fails_before_state_changes() {
    let (rec, mut sync, mut state) = setup();
    sync.layers_mut().unbind(LayerSlot::Tooltips);
    let x_before = Arc::clone(state.x_scale());

    let err = sync
        .select(&mut state, AxisRole::X, AttributeKey::MedianAge)
        .unwrap_err();
    assert_eq!(err, PlotError::LayerNotBound { slot: LayerSlot::Tooltips });
    assert_eq!(state.chosen_x(), AttributeKey::PovertyRate);
    assert!(Arc::ptr_eq(&x_before, state.x_scale()));
    assert!(rec.take().is_empty());
}

#[test]
fn unrelated_axis_slot_does_not_block() {
    let (rec, mut sync, mut state) = setup();
    sync.layers_mut().unbind(LayerSlot::Axis(AxisRole::Y));
    sync.select(&mut state, AxisRole::X, AttributeKey::MedianAge).unwrap();
    assert_eq!(rec.take().len(), 5);
}

#[test]
fn tooltips_do_not_depend_on_the_selection() {
    let (rec, mut sync, mut state) = setup();
    sync.select(&mut state, AxisRole::X, AttributeKey::MedianAge).unwrap();
    sync.select(&mut state, AxisRole::Y, AttributeKey::SmokingRate).unwrap();
    let tooltips: Vec<Vec<TooltipContent>> = rec
        .take()
        .into_iter()
        .filter_map(|c| match c {
            Call::Tooltips(t) => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(tooltips.len(), 2);
    assert_eq!(tooltips[0], tooltips[1]);
    assert_eq!(tooltips[0][0].title, "Alpha");
    assert_eq!(tooltips[0][0].lines, vec!["Poverty: 10%", "Obesity: 30%"]);
}

#[test]
fn exactly_one_label_per_axis_is_active() {
    let (rec, mut sync, mut state) = setup();
    for key in [AttributeKey::MedianAge, AttributeKey::MedianIncome, AttributeKey::PovertyRate] {
        sync.select(&mut state, AxisRole::X, key).unwrap();
    }
    for call in rec.take() {
        if let Call::Styles(_, styles, _) = call {
            assert_eq!(styles.iter().filter(|(_, s)| s.is_active()).count(), 1);
        }
    }
}

#[test]
fn initial_render_is_immediate_and_needs_every_slot() {
    let (rec, mut sync, state) = setup();
    sync.render_initial(&state).unwrap();
    let calls = rec.take();
    assert_eq!(calls.len(), 10);
    for call in &calls {
        match call {
            Call::Axis(_, d) | Call::Markers(_, _, d) | Call::Labels(_, _, d) | Call::Styles(_, _, d) => {
                assert_eq!(*d, Duration::ZERO)
            }
            Call::Tooltips(_) => {}
        }
    }

    sync.layers_mut().unbind(LayerSlot::DimensionLabels(AxisRole::Y));
    assert_eq!(
        sync.render_initial(&state).unwrap_err(),
        PlotError::LayerNotBound { slot: LayerSlot::DimensionLabels(AxisRole::Y) }
    );
}

#[test]
fn configured_duration_is_shared() {
    let rec = Recorder::default();
    let mut cfg = ScatterConfig::default();
    cfg.transition.duration_ms = 250;
    let mut sync = RenderSync::new(bound(&rec), RenderSettings::from_config(&cfg));
    let mut state = SelectionState::new(dataset(), &cfg.viewport).unwrap();
    sync.select(&mut state, AxisRole::Y, AttributeKey::ObesityRate).unwrap();
    let d = Duration::from_millis(250);
    for call in rec.take() {
        match call {
            Call::Axis(_, x) | Call::Markers(_, _, x) | Call::Labels(_, _, x) | Call::Styles(_, _, x) => {
                assert_eq!(x, d)
            }
            Call::Tooltips(_) => {}
        }
    }
}
