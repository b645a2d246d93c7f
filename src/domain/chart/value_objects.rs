use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - point in screen, local or normalized space
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn offset_by(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Value Object - one cell of a dataset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Total order used for time buckets: numbers first, then text.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Value Object - scale type as named by column definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum ScaleKind {
    #[strum(serialize = "linear")]
    #[serde(rename = "linear")]
    Linear,
    #[strum(serialize = "cat")]
    #[serde(rename = "cat")]
    Category,
    #[strum(serialize = "timeCat")]
    #[serde(rename = "timeCat")]
    TimeCategory,
    #[strum(serialize = "log")]
    #[serde(rename = "log")]
    Log,
    #[strum(serialize = "pow")]
    #[serde(rename = "pow")]
    Pow,
    #[strum(serialize = "identity")]
    #[serde(rename = "identity")]
    Identity,
}

/// Value Object - plot rectangle of a cartesian coordinate system.
///
/// `start` is the bottom-left corner and `end` the top-right corner, both in
/// the chart's local pixel space, so normalized y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct CartesianCoord {
    pub start: Point,
    pub end: Point,
}

impl CartesianCoord {
    pub fn from_plot_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            start: Point::new(left, top + height),
            end: Point::new(left + width, top),
        }
    }
}

/// Value Object - visible window as fractions of the limit range
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct FieldRange {
    pub start: f64,
    pub end: f64,
}

impl FieldRange {
    pub const FULL: FieldRange = FieldRange { start: 0.0, end: 1.0 };
}
