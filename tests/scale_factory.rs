use switchplot::config::Viewport;
use switchplot::scale::{compute_scale, padded_domain, Scale};
use switchplot::{AttributeKey, AxisRole, Dataset, Observation, PlotError};

fn obs(abbr: &str, poverty: f64, income: f64, age: f64, healthcare: f64) -> Observation {
    Observation {
        name: abbr.to_string(),
        short_label: abbr.to_string(),
        poverty_rate: poverty,
        median_income: income,
        median_age: age,
        healthcare_uninsured_rate: healthcare,
        smoking_rate: 20.0,
        obesity_rate: 30.0,
    }
}

fn dataset() -> Dataset {
    Dataset::new(vec![
        obs("AA", 10.0, 50000.0, 35.0, 8.0),
        obs("BB", 20.0, 40000.0, 40.0, 12.0),
        obs("CC", 14.5, 47250.0, 38.0, 9.5),
    ])
    .unwrap()
}

#[test]
fn same_inputs_give_identical_scales() {
    let ds = dataset();
    let range = Viewport::default().pixel_range(AxisRole::X);
    let a = compute_scale(&ds, AttributeKey::MedianAge, AxisRole::X, range).unwrap();
    let b = compute_scale(&ds, AttributeKey::MedianAge, AxisRole::X, range).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.domain().0.to_bits(), b.domain().0.to_bits());
    assert_eq!(a.domain().1.to_bits(), b.domain().1.to_bits());
}

#[test]
fn x_domain_is_multiplicatively_padded() {
    let ds = dataset();
    for key in AxisRole::X.eligible() {
        let (min, max) = ds.extent(*key).unwrap();
        let s = compute_scale(&ds, *key, AxisRole::X, (0.0, 785.0)).unwrap();
        assert_eq!(s.domain(), (0.95 * min, 1.10 * max), "{key}");
    }
}

#[test]
fn y_domain_is_additively_padded() {
    let ds = dataset();
    for key in AxisRole::Y.eligible() {
        let (min, max) = ds.extent(*key).unwrap();
        let s = compute_scale(&ds, *key, AxisRole::Y, (385.0, 0.0)).unwrap();
        assert_eq!(s.domain(), (min - 2.0, max + 2.0), "{key}");
    }
}

#[test]
fn padded_domain_examples() {
    assert_eq!(padded_domain(AxisRole::X, 10.0, 20.0), (9.5, 22.0));
    assert_eq!(padded_domain(AxisRole::Y, 8.0, 12.0), (6.0, 14.0));
}

#[test]
fn domain_endpoints_map_to_range_endpoints() {
    let vp = Viewport::default();
    let ds = dataset();
    for role in AxisRole::ALL {
        for key in role.eligible() {
            let range = vp.pixel_range(role);
            let s = compute_scale(&ds, *key, role, range).unwrap();
            let (d0, d1) = s.domain();
            assert!((s.map(d0) - range.0).abs() < 1e-9);
            assert!((s.map(d1) - range.1).abs() < 1e-9);
        }
    }
}

#[test]
fn y_range_is_inverted() {
    let vp = Viewport::default();
    assert_eq!(vp.pixel_range(AxisRole::X), (0.0, 785.0));
    assert_eq!(vp.pixel_range(AxisRole::Y), (385.0, 0.0));
    let s = Scale::new((6.0, 14.0), vp.pixel_range(AxisRole::Y));
    assert!(s.map(12.0) < s.map(8.0));
}

#[test]
fn empty_dataset_is_an_error() {
    let ds = Dataset::new(Vec::new()).unwrap();
    let err = compute_scale(&ds, AttributeKey::PovertyRate, AxisRole::X, (0.0, 785.0)).unwrap_err();
    assert_eq!(err, PlotError::EmptyDataset { key: AttributeKey::PovertyRate });
}

#[test]
fn ticks_cover_the_padded_domain() {
    let s = Scale::new((38000.0, 55000.00000000001), (0.0, 785.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks.first().copied(), Some(38000.0));
    assert_eq!(ticks.last().copied(), Some(54000.0));
    assert_eq!(ticks.len(), 9);
    assert_eq!(s.tick_step(10), 2000.0);
}
