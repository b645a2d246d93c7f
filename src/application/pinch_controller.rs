use super::config::PinchConfig;
use super::interaction_state::InteractionState;
use crate::domain::chart::{AxisScale, ChartHost, CoordinateTransform, FieldRange, Point, ScaleUpdate};
use crate::domain::gesture::{AxisSet, GestureSample, PressEvent, PressGate, classify_geometry, eligible_axes};
use crate::domain::logging::{self, LogComponent, LogEntry, LogLevel};
use crate::domain::zoom::{CategoricalZoomer, CenterSide, ContinuousZoomer, TimeCategoricalZoomer};
use crate::{log_debug, log_trace};

/// Minimum spacing (ms) between two applied zoom steps.
pub const THROTTLE_INTERVAL_MS: f64 = 16.0;

const COMPONENT: LogComponent = LogComponent::Application("PinchController");

/// Turns pinch lifecycle events into axis rescaling on a [`ChartHost`].
///
/// The controller owns all interaction state; the host is borrowed per event
/// so one host value can be shared with rendering code between events.
#[derive(Debug, Clone)]
pub struct PinchGestureController {
    config: PinchConfig,
    state: InteractionState,
    continuous: ContinuousZoomer,
    categorical: CategoricalZoomer,
    time_categorical: TimeCategoricalZoomer,
    /// Present when the host has a tooltip the long press takes over.
    press_gate: Option<PressGate>,
}

impl PinchGestureController {
    /// Attach to `host`. A host tooltip is switched off until a long press
    /// asks for it.
    pub fn attach<H: ChartHost>(config: PinchConfig, host: &mut H) -> Self {
        let press_gate = if host.has_tooltip() {
            host.set_tooltip_enabled(false);
            Some(config.press_gate())
        } else {
            None
        };
        log_debug!(COMPONENT, "attached with {:?}, tooltip integration: {}", config, press_gate.is_some());

        Self {
            continuous: ContinuousZoomer::new(config.min_scale, config.max_scale),
            categorical: CategoricalZoomer::new(config.sensitivity),
            time_categorical: TimeCategoricalZoomer::new(config.min_scale, config.max_scale),
            state: InteractionState::new(),
            press_gate,
            config,
        }
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn tooltip_integration(&self) -> bool {
        self.press_gate.is_some()
    }

    /// Visible x window as fractions of its limit range, after the last zoom.
    pub fn x_range(&self) -> Option<FieldRange> {
        self.state.x_range
    }

    pub fn y_range(&self) -> Option<FieldRange> {
        self.state.y_range
    }

    pub fn on_gesture_start(&mut self) {
        if self.state.pressed {
            return;
        }
        self.state.current_scale = Some(1.0);
    }

    pub fn on_gesture_update<H: ChartHost>(&mut self, host: &mut H, sample: &GestureSample) {
        if self.state.pressed {
            return;
        }
        self.handle_pinch(host, sample);
    }

    pub fn on_gesture_end<H: ChartHost>(&mut self, host: &mut H, sample: &GestureSample) {
        if self.state.pressed {
            return;
        }
        self.handle_pinch(host, sample);
        self.state.current_scale = None;
    }

    /// Long press: hand the surface over to the tooltip. Returns whether the
    /// press was honoured.
    pub fn on_press<H: ChartHost>(&mut self, host: &mut H, press: &PressEvent) -> bool {
        let Some(gate) = self.press_gate else {
            return false;
        };
        if !gate.accepts(press) {
            log_trace!(COMPONENT, "press rejected: {:?}", press);
            return false;
        }
        self.state.pressed = true;
        let center = press.center.offset_by(host.surface_offset());
        host.set_tooltip_enabled(true);
        host.show_tooltip(center);
        true
    }

    /// External cancellation (e.g. all touches lifted).
    pub fn on_reset<H: ChartHost>(&mut self, host: &mut H) {
        if host.has_tooltip() {
            self.state.pressed = false;
            host.hide_tooltip();
            host.set_tooltip_enabled(false);
        }
        self.state.current_scale = None;
    }

    pub fn on_data_changed(&mut self) {
        log_debug!(COMPONENT, "data changed, dropping limit ranges");
        self.state.invalidate_caches();
    }

    pub fn on_cleared(&mut self) {
        log_debug!(COMPONENT, "chart cleared, dropping limit ranges");
        self.state.invalidate_caches();
    }

    fn handle_pinch<H: ChartHost>(&mut self, host: &mut H, sample: &GestureSample) {
        let Some(current_scale) = self.state.current_scale else {
            log_trace!(COMPONENT, "pinch tick outside a gesture ignored");
            return;
        };
        let diff = 1.0 / current_scale * sample.scale;
        let center = sample.center.offset_by(host.surface_offset());
        let classified = classify_geometry(sample);

        let due = self
            .state
            .last_update_timestamp
            .is_none_or(|last| sample.timestamp - last >= THROTTLE_INTERVAL_MS);
        if due && diff.is_finite() && diff > 0.0 {
            self.do_zoom(host, diff, center, Some(classified));
            self.state.last_update_timestamp = Some(sample.timestamp);
        } else {
            trace_dropped(sample, diff);
        }

        // tracked on every tick so the next diff is relative to this one
        self.state.current_scale = Some(sample.scale);
    }

    fn do_zoom<H: ChartHost>(&mut self, host: &mut H, diff: f64, center: Point, classified: Option<AxisSet>) {
        let axes = eligible_axes(self.config.mode, classified);
        log_trace!(COMPONENT, "zoom {:.4} at ({:.1}, {:.1}) on {:?}", diff, center.x, center.y, axes);

        if axes.x {
            self.zoom_x_axis(host, diff, center);
        }
        if axes.y {
            self.zoom_y_axes(host, diff, center);
        }
        host.request_redraw();
    }

    fn zoom_x_axis<H: ChartHost>(&mut self, host: &mut H, diff: f64, center: Point) {
        let Some(scale) = host.x_scale() else {
            return;
        };
        let field = scale.field().to_string();
        let Some(limit) = self.state.limits.get_or_compute(host.dataset(), &scale) else {
            log_trace!(COMPONENT, "x field `{}` ({}) is not zoomable", field, scale.kind());
            return;
        };

        let update = match &scale {
            AxisScale::Linear(_) => {
                let percent = host.coordinate().invert_point(center).x;
                self.continuous.zoom(&scale, limit, diff, percent)
            }
            AxisScale::Category(category) => {
                let ticks = self
                    .state
                    .origin_ticks
                    .entry(field.clone())
                    .or_insert_with(|| category.ticks.clone())
                    .clone();
                let origin = limit.categories().unwrap_or_default();
                let side = CenterSide::of(center.x, host.coordinate().center_x());
                self.categorical
                    .zoom(&mut self.state.zoom_accumulator, origin, &category.values, diff, side)
                    .map(|window| ScaleUpdate::Values { values: window.slice(origin), ticks })
            }
            AxisScale::TimeCategory(category) => {
                let ticks = self
                    .state
                    .origin_ticks
                    .entry(field.clone())
                    .or_insert_with(|| category.ticks.clone())
                    .clone();
                let origin = limit.categories().unwrap_or_default();
                let percent = host.coordinate().invert_point(center).x;
                self.time_categorical
                    .zoom(origin, &category.values, diff, percent)
                    .map(|values| ScaleUpdate::Values { values, ticks })
            }
            AxisScale::Unsupported { .. } => None,
        };

        if let Some(update) = update {
            log_trace!(COMPONENT, "x `{}` -> {:?}", field, update);
            host.set_scale(&field, update);
        }
        self.state.x_range = Some(
            host.x_scale()
                .map(|rescaled| limit.field_range(&rescaled))
                .unwrap_or(FieldRange::FULL),
        );
    }

    fn zoom_y_axes<H: ChartHost>(&mut self, host: &mut H, diff: f64, center: Point) {
        let scales = host.y_scales();
        for scale in &scales {
            let field = scale.field();
            let Some(limit) = self.state.limits.get_or_compute(host.dataset(), scale) else {
                continue;
            };
            // only continuous y axes are pinch-zoomed
            let percent = host.coordinate().invert_point(center).y;
            if let Some(update) = self.continuous.zoom(scale, limit, diff, percent) {
                log_trace!(COMPONENT, "y `{}` -> {:?}", field, update);
                host.set_scale(field, update);
            }
        }

        let Some(first_field) = scales.first().map(|scale| scale.field().to_string()) else {
            return;
        };
        let rescaled = host.y_scales().into_iter().find(|scale| scale.field() == first_field);
        self.state.y_range = match (rescaled, self.state.limits.get(&first_field)) {
            (Some(scale), Some(limit)) => Some(limit.field_range(&scale)),
            _ => Some(FieldRange::FULL),
        };
    }
}

/// Dropped ticks are logged with the full sample attached.
fn trace_dropped(sample: &GestureSample, diff: f64) {
    if !cfg!(debug_assertions) || !logging::enabled(LogLevel::Trace) {
        return;
    }
    let entry = LogEntry::new(LogLevel::Trace, COMPONENT, format!("tick dropped (diff {})", diff));
    let entry = match serde_json::to_string(sample) {
        Ok(json) => entry.with_metadata(json),
        Err(_) => entry,
    };
    logging::logger().log(entry);
}
