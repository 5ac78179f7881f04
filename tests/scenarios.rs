//! The three reference walkthroughs on a two-row dataset.

use std::sync::Arc;

use switchplot::render::LabelStyle;
use switchplot::{
    Activation, AttributeKey, AxisRole, Dataset, Observation, ScatterChart, ScatterConfig,
};

fn two_rows() -> Dataset {
    Dataset::new(vec![
        Observation {
            name: "A".into(),
            short_label: "AA".into(),
            poverty_rate: 10.0,
            median_income: 50000.0,
            median_age: 35.0,
            healthcare_uninsured_rate: 8.0,
            smoking_rate: 20.0,
            obesity_rate: 30.0,
        },
        Observation {
            name: "B".into(),
            short_label: "BB".into(),
            poverty_rate: 20.0,
            median_income: 40000.0,
            median_age: 40.0,
            healthcare_uninsured_rate: 12.0,
            smoking_rate: 25.0,
            obesity_rate: 35.0,
        },
    ])
    .unwrap()
}

fn chart() -> ScatterChart {
    ScatterChart::new(two_rows(), ScatterConfig::default()).unwrap()
}

#[test]
fn scenario_1_default_selection() {
    let chart = chart();
    let state = chart.state();
    assert_eq!(state.chosen_x(), AttributeKey::PovertyRate);
    assert_eq!(state.chosen_y(), AttributeKey::HealthcareUninsuredRate);
    assert_eq!(state.x_scale().domain(), (9.5, 22.0));
    assert_eq!(state.y_scale().domain(), (6.0, 14.0));

    let scene = chart.scene().borrow();
    assert_eq!(scene.label_style(AttributeKey::PovertyRate), Some(LabelStyle::Active));
    assert_eq!(
        scene.label_style(AttributeKey::HealthcareUninsuredRate),
        Some(LabelStyle::Active)
    );
}

#[test]
fn scenario_2_select_income() {
    let mut chart = chart();
    let y_before = Arc::clone(chart.state().y_scale());

    let activation = chart.activate(AttributeKey::MedianIncome, None).unwrap();
    assert!(matches!(activation, Activation::Applied(_)));

    let state = chart.state();
    let (lo, hi) = state.x_scale().domain();
    assert_eq!(lo, 38000.0);
    assert_eq!(hi, 1.10 * 50000.0);
    assert!((hi - 55000.0).abs() < 1e-6);
    assert_eq!(state.y_scale().domain(), (6.0, 14.0));
    assert!(Arc::ptr_eq(&y_before, state.y_scale()));

    let scene = chart.scene().borrow();
    assert_eq!(scene.label_style(AttributeKey::MedianIncome), Some(LabelStyle::Active));
    assert_eq!(scene.label_style(AttributeKey::PovertyRate), Some(LabelStyle::Inactive));
    assert_eq!(scene.label_style(AttributeKey::MedianAge), Some(LabelStyle::Inactive));
}

#[test]
fn scenario_3_click_active_label() {
    let mut chart = chart();
    let x_before = Arc::clone(chart.state().x_scale());
    let y_before = Arc::clone(chart.state().y_scale());

    let activation = chart.activate(AttributeKey::PovertyRate, None).unwrap();
    assert_eq!(activation, Activation::Ignored);

    let state = chart.state();
    assert_eq!(state.chosen_x(), AttributeKey::PovertyRate);
    assert_eq!(state.chosen_y(), AttributeKey::HealthcareUninsuredRate);
    assert!(Arc::ptr_eq(&x_before, state.x_scale()));
    assert!(Arc::ptr_eq(&y_before, state.y_scale()));
    assert!(!chart.scene().borrow().is_animating(0.0));
}

#[test]
fn markers_settle_on_the_new_positions() {
    let mut chart = chart();
    chart.set_clock(1.0);
    chart.activate(AttributeKey::MedianIncome, None).unwrap();
    assert!(chart.scene().borrow().is_animating(1.2));

    chart.set_clock(2.0);
    let frame = chart.frame();
    let x_scale = chart.state().x_scale();
    let y_scale = chart.state().y_scale();
    assert_eq!(frame.markers[0].center, (x_scale.map(50000.0), y_scale.map(8.0)));
    assert_eq!(frame.point_labels[1].pos, (x_scale.map(40000.0), y_scale.map(12.0) + 3.0));
    assert_eq!(
        frame.x_ticks.iter().map(|t| t.value).collect::<Vec<_>>(),
        (19..=27).map(|i| i as f64 * 2000.0).collect::<Vec<_>>()
    );
    assert_eq!(frame.dimension_labels[0].key.role(), AxisRole::X);
}
