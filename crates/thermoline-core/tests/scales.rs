// File: crates/thermoline-core/tests/scales.rs
// Purpose: Dimension invariants, scale monotonicity/inversion, and the
// reference viewport-1000 layout.

use chrono::NaiveDate;
use thermoline_core::{
    DataPoint, Dataset, Dimensions, Graph, LinearScale, Margin, TimeScale,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bounded_dimensions_follow_margins() {
    let dims = Dimensions::from_viewport(1000.0);
    assert_eq!(dims.width, 900.0);
    assert_eq!(dims.height, 400.0);
    assert_eq!(dims.bounded_width, dims.width - dims.margin.left - dims.margin.right);
    assert_eq!(dims.bounded_height, dims.height - dims.margin.top - dims.margin.bottom);
    assert_eq!(dims.bounded_width, 825.0);
    assert_eq!(dims.bounded_height, 345.0);

    let custom = Dimensions::new(640.0, 480.0, Margin::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(custom.bounded_width, 640.0 - 30.0 - 40.0);
    assert_eq!(custom.bounded_height, 480.0 - 10.0 - 20.0);
}

#[test]
fn time_scale_is_monotonic_and_spans_the_range() {
    let scale = TimeScale::new(day(2018, 1, 1), day(2018, 1, 5), 825.0);
    assert!((scale.to_px(day(2018, 1, 1)) - 0.0).abs() <= 1e-6);
    assert!((scale.to_px(day(2018, 1, 5)) - 825.0).abs() <= 1e-6);

    let mut prev = f32::NEG_INFINITY;
    for d in 1..=5 {
        let px = scale.to_px(day(2018, 1, d));
        assert!(px >= prev, "x scale must be monotonic");
        prev = px;
    }
}

#[test]
fn time_scale_inverts_and_extrapolates() {
    let scale = TimeScale::new(day(2018, 1, 1), day(2018, 1, 5), 825.0);
    let mid = scale.from_px(825.0 / 2.0);
    // Half the range is exactly two days in
    let start = scale.domain().0;
    assert!((mid - (start + 2.0)).abs() <= 1e-9);

    // Past the right edge, inversion extrapolates linearly
    let beyond = scale.from_px(825.0 * 1.5);
    assert!((beyond - (start + 6.0)).abs() <= 1e-9);
}

#[test]
fn value_scale_is_inverted() {
    let scale = LinearScale::new(32.0, 50.0, 345.0);
    // larger value, smaller pixel y
    assert!((scale.to_px(32.0) - 345.0).abs() <= 1e-6);
    assert!((scale.to_px(50.0) - 0.0).abs() <= 1e-6);
    assert!(scale.to_px(40.0) < scale.to_px(35.0));

    let v = scale.from_px(scale.to_px(41.0) as f64);
    assert!((v - 41.0).abs() <= 1e-6);
}

#[test]
fn degenerate_domains_are_widened() {
    let t = TimeScale::new(day(2018, 1, 1), day(2018, 1, 1), 825.0);
    let (min_d, max_d) = t.domain();
    assert!(max_d > min_d);

    let v = LinearScale::new(32.0, 32.0, 345.0);
    let (vmin, vmax) = v.domain();
    assert!(vmax > vmin);
}

#[test]
fn axis_ticks_cover_the_domain() {
    use thermoline_core::axis::{time_ticks, value_ticks, X_TICKS, Y_TICKS};

    let t = TimeScale::new(day(2018, 1, 1), day(2018, 1, 10), 825.0);
    let ticks = time_ticks(&t, X_TICKS);
    assert_eq!(ticks.len(), X_TICKS);
    assert!((ticks[0].px - 0.0).abs() <= 1e-4);
    assert!((ticks.last().unwrap().px - 825.0).abs() <= 1e-4);
    assert_eq!(ticks[0].label, "Jan 1");
    assert_eq!(ticks.last().unwrap().label, "Jan 10");

    let v = LinearScale::new(30.0, 50.0, 345.0);
    let vt = value_ticks(&v, Y_TICKS);
    assert_eq!(vt.len(), Y_TICKS);
    assert_eq!(vt[0].label, "30.0");
    assert_eq!(vt.last().unwrap().label, "50.0");
    // inverted range: the smallest value sits at the largest pixel y
    assert!(vt[0].px > vt.last().unwrap().px);
}

#[test]
fn viewport_1000_reference_layout() {
    let dataset = Dataset::new(vec![
        DataPoint { date: day(2018, 1, 1), temperature_max: 32.0 },
        DataPoint { date: day(2018, 1, 5), temperature_max: 50.0 },
    ]);
    let mut graph = Graph::new(dataset, Dimensions::from_viewport(1000.0)).unwrap();

    assert_eq!(graph.dimensions().width, 900.0);
    assert_eq!(graph.dimensions().bounded_width, 825.0);
    assert!((graph.x_scale().to_px(day(2018, 1, 1)) - 0.0).abs() <= 1e-6);
    assert!((graph.x_scale().to_px(day(2018, 1, 5)) - 825.0).abs() <= 1e-6);

    // Hovering the left edge selects the first record
    graph.on_pointer_move(0.0, 100.0);
    match graph.hover() {
        thermoline_core::HoverState::Visible { index, tooltip } => {
            assert_eq!(*index, 0);
            assert_eq!(tooltip.date_text, "January Monday 1, 2018");
            assert_eq!(tooltip.temp_text, "32.0 F");
        }
        other => panic!("expected visible hover, got {other:?}"),
    }
}
