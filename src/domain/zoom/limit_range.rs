use crate::domain::chart::{AxisScale, Dataset, FieldRange, FieldValue};
use std::collections::HashMap;

/// Full-dataset bound of one axis field
#[derive(Debug, Clone, PartialEq)]
pub enum LimitRange {
    Continuous { min: f64, max: f64 },
    Categorical(Vec<FieldValue>),
}

impl LimitRange {
    /// Derive the limit range of `scale`'s field from the whole dataset.
    ///
    /// Returns `None` for scales the pipeline cannot zoom.
    pub fn compute(dataset: &Dataset, scale: &AxisScale) -> Option<LimitRange> {
        match scale {
            AxisScale::Linear(linear) => {
                // a field without numeric data is bounded by its current domain
                let (min, max) = dataset
                    .numeric_range(&linear.field)
                    .unwrap_or((linear.min, linear.max));
                Some(LimitRange::Continuous { min, max })
            }
            AxisScale::Category(category) => {
                let mut values = dataset.distinct_values(&category.field);
                if values.is_empty() {
                    values = category.values.clone();
                }
                Some(LimitRange::Categorical(values))
            }
            AxisScale::TimeCategory(category) => {
                let mut values = dataset.distinct_values(&category.field);
                if values.is_empty() {
                    values = category.values.clone();
                }
                values.sort_by(FieldValue::chronological_cmp);
                Some(LimitRange::Categorical(values))
            }
            AxisScale::Unsupported { .. } => None,
        }
    }

    pub fn span(&self) -> f64 {
        match self {
            LimitRange::Continuous { min, max } => max - min,
            LimitRange::Categorical(values) => values.len() as f64,
        }
    }

    pub fn categories(&self) -> Option<&[FieldValue]> {
        match self {
            LimitRange::Categorical(values) => Some(values),
            LimitRange::Continuous { .. } => None,
        }
    }

    /// Visible window of `scale` as fractions of this limit range.
    pub fn field_range(&self, scale: &AxisScale) -> FieldRange {
        match (self, scale) {
            (LimitRange::Continuous { min, max }, AxisScale::Linear(linear)) => {
                let span = max - min;
                if span == 0.0 {
                    return FieldRange::FULL;
                }
                FieldRange::new((linear.min - min) / span, (linear.max - min) / span)
            }
            (
                LimitRange::Categorical(origin),
                AxisScale::Category(category) | AxisScale::TimeCategory(category),
            ) => {
                let Some(window) = IndexWindow::locate(origin, &category.values) else {
                    return FieldRange::FULL;
                };
                if origin.len() <= 1 {
                    return FieldRange::FULL;
                }
                let last = (origin.len() - 1) as f64;
                FieldRange::new(window.first as f64 / last, window.last as f64 / last)
            }
            _ => FieldRange::FULL,
        }
    }
}

/// Inclusive `[first, last]` index window over an ordered category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWindow {
    pub first: usize,
    pub last: usize,
}

impl IndexWindow {
    /// Position of the visible subset inside `origin`, by its end values.
    pub fn locate(origin: &[FieldValue], visible: &[FieldValue]) -> Option<IndexWindow> {
        let first = origin.iter().position(|v| Some(v) == visible.first())?;
        let last = origin.iter().position(|v| Some(v) == visible.last())?;
        (first <= last).then_some(IndexWindow { first, last })
    }

    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn slice(&self, origin: &[FieldValue]) -> Vec<FieldValue> {
        origin[self.first..=self.last.min(origin.len().saturating_sub(1))].to_vec()
    }
}

/// Per-field memo of limit ranges, dropped wholesale on data change.
#[derive(Debug, Clone, Default)]
pub struct RangeLimiter {
    by_field: HashMap<String, LimitRange>,
}

impl RangeLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, dataset: &Dataset, scale: &AxisScale) -> Option<&LimitRange> {
        let field = scale.field();
        if !self.by_field.contains_key(field) {
            let computed = LimitRange::compute(dataset, scale)?;
            crate::log_trace!(
                crate::domain::logging::LogComponent::Domain("RangeLimiter"),
                "cached limit range for `{}`: {:?}",
                field,
                computed
            );
            self.by_field.insert(field.to_string(), computed);
        }
        self.by_field.get(field)
    }

    pub fn get(&self, field: &str) -> Option<&LimitRange> {
        self.by_field.get(field)
    }

    pub fn invalidate(&mut self) {
        self.by_field.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}
