mod common;

use common::*;
use insta::assert_json_snapshot;
use pinch_zoom_wasm::domain::chart::FieldRange;
use pinch_zoom_wasm::infrastructure::{ColumnDef, InMemoryChart};
use pinch_zoom_wasm::{PinchConfig, PinchGestureController};

fn category_chart(visible: &str) -> InMemoryChart {
    InMemoryChart::new(plot_area())
        .with_dataset(records("x", letters("ABCDE")))
        .with_x("x", ColumnDef::category(letters(visible)))
}

#[test]
fn fourth_narrowing_tick_drops_the_far_category() {
    let mut chart = category_chart("BCD");
    let mut controller = PinchGestureController::attach(PinchConfig::default(), &mut chart);

    controller.on_gesture_start();
    for (i, scale) in [1.1, 1.21, 1.331].into_iter().enumerate() {
        controller.on_gesture_update(&mut chart, &horizontal(scale, (50.0, 50.0), i as f64 * 20.0));
        assert_eq!(joined(&values_of(&chart, "x")), "BCD");
    }
    assert_eq!(controller.state().zoom_accumulator, 3);

    controller.on_gesture_update(&mut chart, &horizontal(1.4641, (50.0, 50.0), 60.0));

    assert_eq!(joined(&values_of(&chart, "x")), "BC");
    assert_eq!(controller.state().zoom_accumulator, 0);
    let ticks = chart.column("x").and_then(|def| def.ticks.clone()).unwrap();
    assert_eq!(joined(&ticks), "BCD");
    assert_eq!(controller.x_range(), Some(FieldRange::new(0.25, 0.5)));
}

#[test]
fn center_right_of_midpoint_narrows_from_the_start() {
    let mut chart = category_chart("BCD");
    let config = PinchConfig::default().with_sensitivity(0);
    let mut controller = PinchGestureController::attach(config, &mut chart);

    controller.on_gesture_start();
    controller.on_gesture_update(&mut chart, &horizontal(1.1, (150.0, 50.0), 0.0));

    assert_eq!(joined(&values_of(&chart, "x")), "CD");
}

#[test]
fn widening_trace_saturates_at_the_full_list() {
    let mut chart = category_chart("ABC");
    let config = PinchConfig::default().with_sensitivity(0);
    let mut controller = PinchGestureController::attach(config, &mut chart);

    controller.on_gesture_start();
    let mut trace = Vec::new();
    for (i, scale) in [0.9, 0.81, 0.729, 0.6561].into_iter().enumerate() {
        controller.on_gesture_update(&mut chart, &horizontal(scale, (150.0, 50.0), i as f64 * 20.0));
        trace.push(joined(&values_of(&chart, "x")));
    }

    assert_json_snapshot!(trace, @r###"
    [
      "ABCD",
      "ABCDE",
      "ABCDE",
      "ABCDE"
    ]
    "###);
}

#[test]
fn narrowing_never_empties_the_window() {
    let mut chart = category_chart("C");
    let config = PinchConfig::default().with_sensitivity(0);
    let mut controller = PinchGestureController::attach(config, &mut chart);

    controller.on_gesture_start();
    controller.on_gesture_update(&mut chart, &horizontal(1.5, (50.0, 50.0), 0.0));
    controller.on_gesture_update(&mut chart, &horizontal(2.25, (150.0, 50.0), 20.0));

    assert_eq!(joined(&values_of(&chart, "x")), "C");
}

#[test]
fn data_change_drops_the_tick_snapshot() {
    let mut chart = category_chart("BCD");
    let config = PinchConfig::default().with_sensitivity(0);
    let mut controller = PinchGestureController::attach(config, &mut chart);

    controller.on_gesture_start();
    controller.on_gesture_update(&mut chart, &horizontal(1.1, (50.0, 50.0), 0.0));
    assert!(controller.state().origin_ticks.contains_key("x"));

    chart.set_dataset(records("x", letters("ABCDEF")));
    controller.on_data_changed();
    assert!(controller.state().origin_ticks.is_empty());

    controller.on_gesture_update(&mut chart, &horizontal(1.1 * 0.9, (50.0, 50.0), 20.0));
    // widening left of center grows the end
    assert_eq!(joined(&values_of(&chart, "x")), "BCD");
    let ticks = chart.column("x").and_then(|def| def.ticks.clone()).unwrap();
    assert_eq!(joined(&ticks), "BCD");
}
