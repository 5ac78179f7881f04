use std::sync::Arc;

use switchplot::config::Viewport;
use switchplot::{
    AttributeKey, AxisRole, Dataset, Observation, PlotError, Selection, SelectionState,
};

fn dataset() -> Dataset {
    let row = |abbr: &str, poverty, income, age, healthcare, smokes, obesity| Observation {
        name: abbr.to_string(),
        short_label: abbr.to_string(),
        poverty_rate: poverty,
        median_income: income,
        median_age: age,
        healthcare_uninsured_rate: healthcare,
        smoking_rate: smokes,
        obesity_rate: obesity,
    };
    Dataset::new(vec![
        row("AA", 10.0, 50000.0, 35.0, 8.0, 20.0, 30.0),
        row("BB", 20.0, 40000.0, 40.0, 12.0, 25.0, 35.0),
    ])
    .unwrap()
}

fn state() -> SelectionState {
    SelectionState::new(dataset(), &Viewport::default()).unwrap()
}

#[test]
fn starts_with_first_eligible_keys() {
    let s = state();
    assert_eq!(s.chosen_x(), AttributeKey::PovertyRate);
    assert_eq!(s.chosen_y(), AttributeKey::HealthcareUninsuredRate);
}

#[test]
fn selecting_the_current_key_is_a_noop_with_identical_scales() {
    let mut s = state();
    let x_before = Arc::clone(s.x_scale());
    let y_before = Arc::clone(s.y_scale());

    let sel = s.select_attribute(AxisRole::X, AttributeKey::PovertyRate).unwrap();
    assert_eq!(sel, Selection::NoOp);
    assert!(Arc::ptr_eq(&x_before, s.x_scale()));
    assert!(Arc::ptr_eq(&y_before, s.y_scale()));
    assert_eq!(s.chosen_x(), AttributeKey::PovertyRate);
}

#[test]
fn changing_x_leaves_y_untouched() {
    let mut s = state();
    let y_before = Arc::clone(s.y_scale());
    let x_before = Arc::clone(s.x_scale());

    let sel = s.select_attribute(AxisRole::X, AttributeKey::MedianAge).unwrap();
    let plan = sel.plan().expect("transition");
    assert_eq!(plan.axis_role, AxisRole::X);
    assert_eq!(plan.previous_attribute, AttributeKey::PovertyRate);
    assert_eq!(plan.affected_attribute, AttributeKey::MedianAge);
    assert!(Arc::ptr_eq(&plan.old_scale, &x_before));
    assert!(Arc::ptr_eq(&plan.new_scale, s.x_scale()));

    assert_eq!(s.chosen_y(), AttributeKey::HealthcareUninsuredRate);
    assert!(Arc::ptr_eq(&y_before, s.y_scale()));
    assert_eq!(s.x_scale().domain(), (0.95 * 35.0, 1.10 * 40.0));
}

#[test]
fn changing_y_leaves_x_untouched() {
    let mut s = state();
    let x_before = Arc::clone(s.x_scale());
    s.select_attribute(AxisRole::Y, AttributeKey::ObesityRate).unwrap();
    assert_eq!(s.chosen_x(), AttributeKey::PovertyRate);
    assert!(Arc::ptr_eq(&x_before, s.x_scale()));
    assert_eq!(s.y_scale().domain(), (28.0, 37.0));
}

#[test]
fn ineligible_attribute_is_rejected_without_change() {
    let mut s = state();
    let x_before = Arc::clone(s.x_scale());
    let err = s
        .select_attribute(AxisRole::X, AttributeKey::SmokingRate)
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::InvalidAttributeForAxis {
            key: AttributeKey::SmokingRate,
            role: AxisRole::X
        }
    );
    assert_eq!(s.chosen_x(), AttributeKey::PovertyRate);
    assert!(Arc::ptr_eq(&x_before, s.x_scale()));
}

#[test]
fn explicit_initial_selection_is_validated() {
    let err = SelectionState::with_selection(
        dataset(),
        &Viewport::default(),
        AttributeKey::ObesityRate,
        AttributeKey::SmokingRate,
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::InvalidAttributeForAxis { role: AxisRole::X, .. }));
}

#[test]
fn empty_dataset_cannot_build_a_state() {
    let err = SelectionState::new(Dataset::new(Vec::new()).unwrap(), &Viewport::default())
        .unwrap_err();
    assert!(matches!(err, PlotError::EmptyDataset { .. }));
}

#[test]
fn position_projects_both_axes() {
    let s = state();
    let ds = dataset();
    let (x, y) = s.position(&ds.observations()[0]);
    assert_eq!(x, s.project(AxisRole::X, 10.0));
    assert_eq!(y, s.project(AxisRole::Y, 8.0));
}
