// File: crates/chronology-core/tests/scale.rs
// Purpose: Scale adapters install the right tick policy on an axis; formatter output.

use chronology_core::scale::auto_tick_multipliers;
use chronology_core::{AsinhScale, Axis, AxisScale, CoordinateTransform, Formatter, Locator, Scale, Subs, WarpScale};

#[test]
fn asinh_scale_defaults() {
    let scale = AsinhScale::new(1.0, 0.0).expect("valid");
    assert_eq!(scale.name(), "asinh");
    assert_eq!(scale.base(), 10);
    assert_eq!(scale.subs(), Some(vec![2.0, 5.0]));

    let d = scale.default_locators_and_formatters();
    assert_eq!(d.major_formatter, Formatter::LogSciNotation { base: 10 });
    assert_eq!(d.minor_formatter, Formatter::Null);
    match (&d.major_locator, &d.minor_locator) {
        (Locator::Asinh(major), Locator::Asinh(minor)) => {
            assert_eq!(major.linear_width(), 1.0);
            assert_eq!(major.subs(), None);
            assert_eq!(minor.subs(), Some(&[2.0, 5.0][..]));
        }
        other => panic!("expected asinh locators, got {other:?}"),
    }
}

#[test]
fn off_center_or_baseless_scales_use_general_labels() {
    let shifted = AsinhScale::new(20.0, 2000.0).expect("valid");
    assert_eq!(shifted.default_locators_and_formatters().major_formatter, Formatter::General { precision: 3 });

    let baseless = AsinhScale::new(20.0, 0.0).expect("valid").with_base(0);
    assert_eq!(baseless.default_locators_and_formatters().major_formatter, Formatter::General { precision: 3 });
    assert_eq!(baseless.subs(), None);
}

#[test]
fn subs_resolution() {
    assert_eq!(auto_tick_multipliers(2), None);
    assert_eq!(auto_tick_multipliers(4), Some(&[2.0][..]));
    assert_eq!(auto_tick_multipliers(16), Some(&[2.0, 4.0, 8.0][..]));
    assert_eq!(auto_tick_multipliers(1024), Some(&[256.0, 512.0][..]));

    let explicit = AsinhScale::new(1.0, 0.0).expect("valid").with_subs(Subs::Explicit(vec![3.0]));
    assert_eq!(explicit.subs(), Some(vec![3.0]));
    let cleared = AsinhScale::new(1.0, 0.0).expect("valid").with_subs(Subs::Explicit(Vec::new()));
    assert_eq!(cleared.subs(), None);
    match cleared.default_locators_and_formatters().minor_locator {
        Locator::Asinh(minor) => assert_eq!(minor.subs(), None),
        other => panic!("expected asinh locator, got {other:?}"),
    }
}

#[test]
fn invalid_scale_parameters_are_rejected() {
    assert!(AsinhScale::new(-1.0, 0.0).is_err());
    assert!(WarpScale::new(0.0, &[]).is_err());
    assert!(WarpScale::new(0.0, &[20.0, f64::NAN]).is_err());
}

#[test]
fn concrete_transform_matches_the_installed_one() {
    let asinh = AsinhScale::new(20.0, 2000.0).expect("valid");
    let warp = WarpScale::new(2026.0, &[50.0, 20.0]).expect("valid");
    assert_eq!(asinh.get_transform().linear_width(), 20.0);
    assert_eq!(asinh.get_transform().center(), 2000.0);
    for x in [-1e6, -2000.0, 0.0, 1800.0, 2000.0, 2026.0, 1e5] {
        assert_eq!(asinh.get_transform().forward(x), asinh.transform().forward(x));
        assert_eq!(warp.get_transform().forward(x), warp.transform().forward(x));
        let y = warp.transform().forward(x);
        assert_eq!(warp.get_transform().inverse(y), warp.transform().inverse(y));
    }
}

#[test]
fn setting_a_scale_replaces_locators_and_formatters() {
    let mut axis = Axis::new("y", -1000.0, 1000.0);
    assert_eq!(axis.scale().name(), "linear");
    axis.major_formatter = Formatter::Engineering { places: 1 };

    axis.set_scale(AsinhScale::new(20.0, 0.0).expect("valid"));
    assert_eq!(axis.scale().name(), "asinh");
    assert!(matches!(axis.major_locator, Locator::Asinh(_)));
    assert_eq!(axis.major_formatter, Formatter::LogSciNotation { base: 10 });

    axis.set_scale(WarpScale::new(0.0, &[100.0, 20.0]).expect("valid"));
    assert_eq!(axis.scale().name(), "warp");
    assert_eq!(axis.major_locator, Locator::Linear { numticks: 11 });
    assert_eq!(axis.minor_locator, Locator::Null);

    axis.set_scale(AxisScale::default());
    assert_eq!(axis.scale().name(), "linear");
}

#[test]
fn one_scale_value_serves_many_axes() {
    let scale = AsinhScale::new(20.0, 0.0).expect("valid");
    let a = Axis::new("a", -500.0, 500.0).with_scale(scale.clone());
    let b = Axis::new("b", 0.0, 1e4).with_scale(scale);
    assert_eq!(a.scale(), b.scale());
    assert_eq!(a.major_ticks(), vec![-100.0, -10.0, 0.0, 10.0, 100.0]);
    assert!(b.major_ticks().contains(&1000.0));
}

#[test]
fn unit_mapping_is_measured_in_warped_space() {
    let axis = Axis::new("y", -1000.0, 1000.0).with_scale(AsinhScale::new(20.0, 0.0).expect("valid"));
    assert_eq!(axis.to_unit(-1000.0), 0.0);
    assert_eq!(axis.to_unit(1000.0), 1.0);
    assert!((axis.to_unit(0.0) - 0.5).abs() < 1e-12);
    // far more than 10% of the axis height for the first 10% of the range
    assert!(axis.to_unit(100.0) > 0.7);
    for v in [-700.0, -3.0, 0.0, 42.0, 999.0] {
        assert!((axis.from_unit(axis.to_unit(v)) - v).abs() < 1e-9);
    }

    let flat = Axis::new("flat", 5.0, 5.0);
    assert_eq!(flat.to_unit(5.0), 0.5);
}

#[test]
fn minor_ticks_skip_major_positions() {
    let mut axis = Axis::new("y", 0.0, 1000.0).with_scale(AsinhScale::new(1.0, 0.0).expect("valid"));
    axis.minor_locator = Locator::Asinh(
        chronology_core::AsinhLocator::new(1.0, 0.0).expect("valid").with_subs(vec![1.0, 5.0]),
    );
    let majors = axis.major_ticks();
    let minors = axis.minor_ticks();
    assert!(majors.contains(&100.0));
    assert!(minors.contains(&500.0));
    assert!(minors.iter().all(|m| !majors.contains(m)), "majors {majors:?} minors {minors:?}");
}

#[test]
fn axis_labels_use_the_major_formatter() {
    let axis = Axis::new("y", -500.0, 500.0).with_scale(AsinhScale::new(20.0, 0.0).expect("valid"));
    let labels: Vec<String> = axis.major_labels().into_iter().map(|(_, s)| s).collect();
    assert_eq!(labels, vec!["-10^2", "-10^1", "0", "10^1", "10^2"]);
}

#[test]
fn formatter_output() {
    let g = Formatter::General { precision: 3 };
    assert_eq!(g.format(2026.0), "2.03e+03");
    assert_eq!(g.format(0.5), "0.5");
    assert_eq!(g.format(100.0), "100");
    assert_eq!(g.format(0.0), "0");
    assert_eq!(g.format(-12.5), "-12.5");

    let sci = Formatter::LogSciNotation { base: 10 };
    assert_eq!(sci.format(0.0), "0");
    assert_eq!(sci.format(1000.0), "10^3");
    assert_eq!(sci.format(-100.0), "-10^2");
    assert_eq!(sci.format(2000.0), "2×10^3");

    let eng = Formatter::Engineering { places: 0 };
    assert_eq!(eng.format(-2000.0), "-2 k");
    assert_eq!(eng.format(5.0), "5");
    assert_eq!(eng.format(0.0), "0");
    assert_eq!(eng.format(3e6), "3 M");
    assert_eq!(Formatter::Engineering { places: 1 }.format(1500.0), "1.5 k");

    assert_eq!(Formatter::Null.format(42.0), "");
    assert_eq!(Formatter::default().format_ticks(&[1.0, 10.0]), vec!["1", "10"]);
}
