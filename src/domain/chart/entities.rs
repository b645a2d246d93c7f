use super::value_objects::{FieldValue, ScaleKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Record = HashMap<String, FieldValue>;

/// Entity - the chart's full source data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldValue> + 'a {
        self.records.iter().filter_map(move |record| record.get(field))
    }

    /// `(min, max)` over the finite numeric values of `field`.
    pub fn numeric_range(&self, field: &str) -> Option<(f64, f64)> {
        self.values(field)
            .filter_map(FieldValue::as_number)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Distinct values of `field` in first-appearance order.
    pub fn distinct_values(&self, field: &str) -> Vec<FieldValue> {
        let mut distinct: Vec<FieldValue> = Vec::new();
        for value in self.values(field) {
            if !distinct.contains(value) {
                distinct.push(value.clone());
            }
        }
        distinct
    }
}

/// Entity - continuous numeric scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub field: String,
    pub min: f64,
    pub max: f64,
}

/// Entity - ordered category scale (plain or time-bucketed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    pub field: String,
    /// Currently visible ordered subset.
    pub values: Vec<FieldValue>,
    pub ticks: Vec<FieldValue>,
}

/// Entity - an axis scale as seen by the zoom pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Category(CategoryScale),
    TimeCategory(CategoryScale),
    /// Scales the pipeline cannot rescale (log, pow, identity).
    Unsupported { field: String, kind: ScaleKind },
}

impl AxisScale {
    pub fn field(&self) -> &str {
        match self {
            AxisScale::Linear(scale) => &scale.field,
            AxisScale::Category(scale) | AxisScale::TimeCategory(scale) => &scale.field,
            AxisScale::Unsupported { field, .. } => field,
        }
    }

    pub fn kind(&self) -> ScaleKind {
        match self {
            AxisScale::Linear(_) => ScaleKind::Linear,
            AxisScale::Category(_) => ScaleKind::Category,
            AxisScale::TimeCategory(_) => ScaleKind::TimeCategory,
            AxisScale::Unsupported { kind, .. } => *kind,
        }
    }
}

/// New visible configuration pushed to the host for one field
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleUpdate {
    Range { min: f64, max: f64, nice: bool },
    Values { values: Vec<FieldValue>, ticks: Vec<FieldValue> },
}
