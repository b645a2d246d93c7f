use crate::domain::chart::Point;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// One reported frame of a two-finger pinch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Cumulative scale since gesture start (1.0 = unchanged).
    pub scale: f64,
    /// Gesture center in screen coordinates.
    pub center: Point,
    /// The two finger positions in screen coordinates.
    pub pointers: [Point; 2],
    /// Wall-clock time in milliseconds.
    pub timestamp: f64,
}

impl GestureSample {
    pub fn new(scale: f64, center: Point, pointers: [Point; 2], timestamp: f64) -> Self {
        Self { scale, center, pointers, timestamp }
    }
}

/// A recognized long press
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct PressEvent {
    pub center: Point,
    /// Pointer travel in pixels while pressing.
    pub distance: f64,
    /// Press duration in milliseconds.
    pub duration: f64,
}

/// Long-press gating: small movement, long enough hold
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct PressGate {
    pub threshold: f64,
    pub time: f64,
}

impl PressGate {
    pub fn accepts(&self, press: &PressEvent) -> bool {
        press.distance <= self.threshold && press.duration >= self.time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Axis {
    #[display(fmt = "x")]
    X,
    #[display(fmt = "y")]
    Y,
}

/// Configured zoom direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    #[default]
    #[display(fmt = "x")]
    #[strum(serialize = "x")]
    X,
    #[display(fmt = "y")]
    #[strum(serialize = "y")]
    Y,
    #[display(fmt = "xy")]
    #[strum(serialize = "xy")]
    XY,
}

impl ZoomMode {
    pub fn includes(&self, axis: Axis) -> bool {
        match self {
            ZoomMode::X => axis == Axis::X,
            ZoomMode::Y => axis == Axis::Y,
            ZoomMode::XY => true,
        }
    }
}

/// Which axes one gesture step affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct AxisSet {
    pub x: bool,
    pub y: bool,
}

impl AxisSet {
    pub const BOTH: AxisSet = AxisSet { x: true, y: true };
    pub const X_ONLY: AxisSet = AxisSet { x: true, y: false };
    pub const Y_ONLY: AxisSet = AxisSet { x: false, y: true };

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}
