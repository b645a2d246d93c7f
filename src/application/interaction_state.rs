use crate::domain::chart::{FieldRange, FieldValue};
use crate::domain::zoom::RangeLimiter;
use std::collections::HashMap;

/// Mutable state of one attached pinch interaction
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// A long press (tooltip mode) is active; pinches are ignored meanwhile.
    pub pressed: bool,
    /// Cumulative scale of the previous tick; `Some` only mid-gesture.
    pub current_scale: Option<f64>,
    /// Timestamp of the last applied zoom step.
    pub last_update_timestamp: Option<f64>,
    pub limits: RangeLimiter,
    /// Tick lists captured the first time a category field is zoomed.
    pub origin_ticks: HashMap<String, Vec<FieldValue>>,
    pub zoom_accumulator: i32,
    pub x_range: Option<FieldRange>,
    pub y_range: Option<FieldRange>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.current_scale.is_none()
    }

    /// Drop everything derived from the chart's data.
    pub fn invalidate_caches(&mut self) {
        self.limits.invalidate();
        self.origin_ticks.clear();
    }
}
