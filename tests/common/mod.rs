#![allow(dead_code)]

use pinch_zoom_wasm::domain::chart::{CartesianCoord, Dataset, FieldValue, Point, Record};
use pinch_zoom_wasm::domain::gesture::GestureSample;
use pinch_zoom_wasm::infrastructure::{ColumnDef, InMemoryChart};

/// Plot area 200 x 100 at the chart origin; midpoint x = 100.
pub fn plot_area() -> CartesianCoord {
    CartesianCoord::from_plot_rect(0.0, 0.0, 200.0, 100.0)
}

pub fn records(field: &str, values: Vec<FieldValue>) -> Dataset {
    Dataset::new(
        values
            .into_iter()
            .map(|v| Record::from([(field.to_string(), v)]))
            .collect(),
    )
}

pub fn letters(s: &str) -> Vec<FieldValue> {
    s.chars().map(|c| FieldValue::from(c.to_string())).collect()
}

pub fn joined(values: &[FieldValue]) -> String {
    values
        .iter()
        .map(|v| match v {
            FieldValue::Text(t) => t.clone(),
            FieldValue::Number(n) => n.to_string(),
        })
        .collect()
}

/// Linear x over 0..=100 and linear y over 0..=10.
pub fn linear_chart() -> InMemoryChart {
    let mut data = Vec::new();
    for i in 0..=10 {
        data.push(Record::from([
            ("x".to_string(), FieldValue::Number(i as f64 * 10.0)),
            ("y".to_string(), FieldValue::Number(i as f64)),
        ]));
    }
    InMemoryChart::new(plot_area())
        .with_dataset(Dataset::new(data))
        .with_x("x", ColumnDef::linear(0.0, 100.0))
        .with_y("y", ColumnDef::linear(0.0, 10.0))
}

/// Fingers spread horizontally around `center`.
pub fn horizontal(scale: f64, center: (f64, f64), timestamp: f64) -> GestureSample {
    let (cx, cy) = center;
    GestureSample::new(
        scale,
        Point::new(cx, cy),
        [Point::new(cx - 40.0, cy), Point::new(cx + 40.0, cy)],
        timestamp,
    )
}

/// Fingers spread vertically around `center`.
pub fn vertical(scale: f64, center: (f64, f64), timestamp: f64) -> GestureSample {
    let (cx, cy) = center;
    GestureSample::new(
        scale,
        Point::new(cx, cy),
        [Point::new(cx, cy - 40.0), Point::new(cx + 2.0, cy + 40.0)],
        timestamp,
    )
}

/// Fingers spread along the diagonal around `center`.
pub fn diagonal(scale: f64, center: (f64, f64), timestamp: f64) -> GestureSample {
    let (cx, cy) = center;
    GestureSample::new(
        scale,
        Point::new(cx, cy),
        [Point::new(cx - 30.0, cy - 30.0), Point::new(cx + 30.0, cy + 30.0)],
        timestamp,
    )
}

pub fn range_of(chart: &InMemoryChart, field: &str) -> (f64, f64) {
    let def = chart.column(field).expect("column defined");
    (def.min.expect("min set"), def.max.expect("max set"))
}

pub fn values_of(chart: &InMemoryChart, field: &str) -> Vec<FieldValue> {
    chart
        .column(field)
        .and_then(|def| def.values.clone())
        .expect("values set")
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
