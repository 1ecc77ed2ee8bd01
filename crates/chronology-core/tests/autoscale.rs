// File: crates/chronology-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and warped axes.

use chronology_core::{Axis, Chart, CoordinateTransform, Series, ViewState, WarpScale};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::markers(vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn margin_is_applied_in_warped_space() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::new("y", -1.0, 1.0).with_scale(WarpScale::new(0.0, &[100.0, 20.0]).expect("valid"));
    chart.add_series(Series::markers(vec![(1900.0, -50.0), (2000.0, 1e5)]));
    chart.autoscale_axes(0.1);

    let t = chart.y_axis.transform();
    let (lo, hi) = (t.forward(-50.0), t.forward(1e5));
    let pad = (hi - lo) * 0.1;
    assert!((t.forward(chart.y_axis.min) - (lo - pad)).abs() < 1e-9);
    assert!((t.forward(chart.y_axis.max) - (hi + pad)).abs() < 1e-9);
    // on the linear x axis the same margin is a plain 10%
    assert!((chart.x_axis.min - 1890.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 2010.0).abs() < 1e-9);
}

#[test]
fn bands_do_not_drive_autoscale() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(1900.0, 0.0), (1950.0, 10.0)]));
    chart.fill_between(vec![0.0, 1.0], vec![-1e6, -1e6], vec![1e6, 1e6], skia_safe::Color::BLUE);
    chart.autoscale_axes(0.0);
    assert_eq!(ViewState::capture(&chart), ViewState { x_min: 1900.0, x_max: 1950.0, y_min: 0.0, y_max: 10.0 });
}

#[test]
fn growth_can_be_switched_off() {
    let mut chart = Chart::new();
    chart.autoscale = false;
    let before = ViewState::capture(&chart);
    chart.add_series(Series::line(vec![(-5000.0, 1e9)]));
    assert_eq!(ViewState::capture(&chart), before);
}

#[test]
fn empty_chart_keeps_its_view() {
    let mut chart = Chart::new();
    let before = ViewState::capture(&chart);
    chart.autoscale_axes(0.05);
    assert_eq!(ViewState::capture(&chart), before);
}
