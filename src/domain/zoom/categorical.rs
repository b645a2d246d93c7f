use super::limit_range::IndexWindow;
use crate::domain::chart::FieldValue;

pub const DEFAULT_SENSITIVITY: u32 = 3;

/// Side of the plot midpoint the gesture center falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSide {
    Left,
    Right,
}

impl CenterSide {
    pub fn of(center_x: f64, chart_center_x: f64) -> Self {
        if center_x >= chart_center_x { CenterSide::Right } else { CenterSide::Left }
    }
}

/// One-index window shifts over an ordered category list, debounced by a
/// signed pressure accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalZoomer {
    pub sensitivity: u32,
}

impl Default for CategoricalZoomer {
    fn default() -> Self {
        Self { sensitivity: DEFAULT_SENSITIVITY }
    }
}

impl CategoricalZoomer {
    pub fn new(sensitivity: u32) -> Self {
        Self { sensitivity }
    }

    /// Feed one incremental zoom into `accumulator` and, once the pressure
    /// exceeds the sensitivity, return the shifted window.
    ///
    /// Scale above one narrows the window, below one widens it; either way
    /// the boundary opposite the gesture center moves. The accumulator is
    /// zeroed whenever a step is taken.
    pub fn zoom(
        &self,
        accumulator: &mut i32,
        origin: &[FieldValue],
        visible: &[FieldValue],
        zoom: f64,
        side: CenterSide,
    ) -> Option<IndexWindow> {
        if zoom > 1.0 {
            *accumulator += 1;
        } else if zoom < 1.0 {
            *accumulator -= 1;
        }

        if accumulator.unsigned_abs() <= self.sensitivity {
            return None;
        }
        let window = IndexWindow::locate(origin, visible)?;
        let widen = *accumulator < 0;
        *accumulator = 0;
        Some(step_window(window, origin.len() - 1, widen, side))
    }
}

/// Move exactly one boundary of `window` by at most one index.
pub fn step_window(window: IndexWindow, last_index: usize, widen: bool, side: CenterSide) -> IndexWindow {
    let IndexWindow { mut first, mut last } = window;
    match (widen, side) {
        (true, CenterSide::Right) => {
            if first == 0 {
                last = (last + 1).min(last_index);
            } else {
                first -= 1;
            }
        }
        (true, CenterSide::Left) => {
            if last >= last_index {
                first = first.saturating_sub(1);
            } else {
                last += 1;
            }
        }
        (false, CenterSide::Right) => {
            if first < last {
                first += 1;
            }
        }
        (false, CenterSide::Left) => {
            if last > first {
                last -= 1;
            }
        }
    }
    IndexWindow { first, last }
}
