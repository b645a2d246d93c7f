use crate::domain::errors::{AppError, ConfigResult, ConfigurationError};
use crate::domain::gesture::{PressGate, ZoomMode};
use crate::domain::zoom::DEFAULT_SENSITIVITY;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PRESS_THRESHOLD: f64 = 9.0;
pub const DEFAULT_PRESS_TIME: f64 = 251.0;

/// Options recognized by the pinch interaction.
///
/// Deserializes from the camelCase keys chart configs use
/// (`{"mode": "xy", "minScale": 1, "maxScale": 4}`); missing keys fall back
/// to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinchConfig {
    pub mode: ZoomMode,
    pub min_scale: Option<f64>,
    pub max_scale: Option<f64>,
    /// Net pinch ticks needed before a category window moves.
    pub sensitivity: u32,
    /// Max pointer travel (px) still counted as a long press.
    pub press_threshold: f64,
    /// Min hold (ms) for a long press.
    pub press_time: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            mode: ZoomMode::X,
            min_scale: None,
            max_scale: None,
            sensitivity: DEFAULT_SENSITIVITY,
            press_threshold: DEFAULT_PRESS_THRESHOLD,
            press_time: DEFAULT_PRESS_TIME,
        }
    }
}

impl PinchConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: PinchConfig = serde_json::from_str(json).map_err(ConfigurationError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_mode(mut self, mode: ZoomMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scale_bounds(mut self, min_scale: Option<f64>, max_scale: Option<f64>) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: u32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn press_gate(&self) -> PressGate {
        PressGate::new(self.press_threshold, self.press_time)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (name, bound) in [("minScale", self.min_scale), ("maxScale", self.max_scale)] {
            if let Some(value) = bound {
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(name, format!("must be a positive number, got {}", value)));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_scale, self.max_scale) {
            if min > max {
                return Err(invalid("minScale", format!("{} exceeds maxScale {}", min, max)));
            }
        }
        if !self.press_threshold.is_finite() || self.press_threshold < 0.0 {
            return Err(invalid("pressThreshold", format!("must be >= 0, got {}", self.press_threshold)));
        }
        if !self.press_time.is_finite() || self.press_time < 0.0 {
            return Err(invalid("pressTime", format!("must be >= 0, got {}", self.press_time)));
        }
        Ok(())
    }
}

/// Parse a `"x" | "y" | "xy"` mode string.
pub fn parse_mode(mode: &str) -> ConfigResult<ZoomMode> {
    ZoomMode::from_str(mode).map_err(|_| AppError::from(ConfigurationError::InvalidMode(mode.to_string())))
}

fn invalid(name: &'static str, reason: String) -> AppError {
    ConfigurationError::InvalidParameter { name, reason }.into()
}
