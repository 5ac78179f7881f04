use std::sync::mpsc::TryRecvError;

use switchplot::{
    AttributeKey, AxisRole, Dataset, Observation, ScatterChart, ScatterConfig,
    SelectionController, SelectionEvent,
};

fn chart() -> ScatterChart {
    let row = |abbr: &str, poverty: f64, age: f64, smokes: f64| Observation {
        name: abbr.to_string(),
        short_label: abbr.to_string(),
        poverty_rate: poverty,
        median_income: 50000.0,
        median_age: age,
        healthcare_uninsured_rate: 10.0,
        smoking_rate: smokes,
        obesity_rate: 30.0,
    };
    let ds = Dataset::new(vec![row("AA", 10.0, 30.0, 15.0), row("BB", 20.0, 40.0, 25.0)]).unwrap();
    ScatterChart::new(ds, ScatterConfig::default()).unwrap()
}

#[test]
fn requests_are_applied_and_broadcast() {
    let mut chart = chart();
    let ctrl = SelectionController::new();
    assert_eq!(ctrl.current(), None);
    ctrl.attach(chart.state());
    assert_eq!(
        ctrl.current(),
        Some((AttributeKey::PovertyRate, AttributeKey::HealthcareUninsuredRate))
    );

    let rx = ctrl.subscribe();
    ctrl.request_select(AttributeKey::MedianAge);
    ctrl.request_select(AttributeKey::SmokingRate);
    // Nothing happens until the UI drains the queue.
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

    let errors = chart.process_controller(&ctrl);
    assert!(errors.is_empty());
    assert_eq!(chart.state().chosen_x(), AttributeKey::MedianAge);
    assert_eq!(chart.state().chosen_y(), AttributeKey::SmokingRate);

    assert_eq!(
        rx.try_recv().unwrap(),
        SelectionEvent {
            role: AxisRole::X,
            previous: AttributeKey::PovertyRate,
            current: AttributeKey::MedianAge,
            domain: (0.95 * 30.0, 1.10 * 40.0),
        }
    );
    let y = rx.try_recv().unwrap();
    assert_eq!(y.role, AxisRole::Y);
    assert_eq!(y.domain, (13.0, 27.0));
    assert_eq!(
        ctrl.current(),
        Some((AttributeKey::MedianAge, AttributeKey::SmokingRate))
    );
}

#[test]
fn already_active_requests_are_silent() {
    let mut chart = chart();
    let ctrl = SelectionController::new();
    let rx = ctrl.subscribe();
    ctrl.request_select(AttributeKey::PovertyRate);
    assert!(chart.process_controller(&ctrl).is_empty());
    assert!(rx.try_recv().is_err());
}

#[test]
fn ui_activations_are_published_too() {
    let mut chart = chart();
    let ctrl = SelectionController::new();
    ctrl.attach(chart.state());
    let rx = ctrl.subscribe();
    chart.activate(AttributeKey::ObesityRate, Some(&ctrl)).unwrap();
    assert_eq!(rx.try_recv().unwrap().current, AttributeKey::ObesityRate);
    assert_eq!(ctrl.current().map(|(_, y)| y), Some(AttributeKey::ObesityRate));
}

#[test]
fn dropped_subscribers_are_pruned() {
    let mut chart = chart();
    let ctrl = SelectionController::new();
    drop(ctrl.subscribe());
    let rx = ctrl.subscribe();
    ctrl.request_select(AttributeKey::MedianIncome);
    chart.process_controller(&ctrl);
    assert!(rx.try_recv().is_ok());

    ctrl.request_select(AttributeKey::PovertyRate);
    chart.process_controller(&ctrl);
    assert_eq!(rx.try_recv().unwrap().current, AttributeKey::PovertyRate);
}
