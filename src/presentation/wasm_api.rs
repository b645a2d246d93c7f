use wasm_bindgen::prelude::*;

use crate::application::{PinchConfig, PinchGestureController};
use crate::domain::{
    chart::{CartesianCoord, Dataset, FieldRange, Point},
    errors::{AppError, PresentationError},
    gesture::{GestureSample, PressEvent},
    logging::LogComponent,
};
use crate::infrastructure::{ColumnDef, InMemoryChart};
use crate::{log_error, log_info};

const COMPONENT: LogComponent = LogComponent::Presentation("PinchZoomApi");

/// JavaScript bridge: forwards recognizer events (e.g. from Hammer.js) to the
/// pinch controller and exposes the rescaled column definitions.
#[wasm_bindgen]
pub struct PinchZoomApi {
    controller: PinchGestureController,
    chart: InMemoryChart,
    redraw_callback: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl PinchZoomApi {
    /// `config_json` holds the pinch options; the rectangle is the plot area
    /// in chart-local pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        with_tooltip: bool,
    ) -> Result<PinchZoomApi, JsValue> {
        let config = PinchConfig::from_json(config_json).map_err(to_js)?;
        let mut chart = InMemoryChart::new(CartesianCoord::from_plot_rect(left, top, width, height));
        if with_tooltip {
            chart = chart.with_tooltip();
        }
        let controller = PinchGestureController::attach(config, &mut chart);
        log_info!(COMPONENT, "pinch interaction ready");
        Ok(Self { controller, chart, redraw_callback: None })
    }

    #[wasm_bindgen(js_name = setSurfaceOffset)]
    pub fn set_surface_offset(&mut self, x: f64, y: f64) {
        self.chart.set_surface_offset(Point::new(x, y));
    }

    #[wasm_bindgen(js_name = setPlotArea)]
    pub fn set_plot_area(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.chart.set_coordinate(CartesianCoord::from_plot_rect(left, top, width, height));
    }

    #[wasm_bindgen(js_name = setXColumn)]
    pub fn set_x_column(&mut self, field: &str, column_json: &str) -> Result<(), JsValue> {
        let def = parse_column(column_json).map_err(to_js)?;
        self.chart.set_x(field, def);
        Ok(())
    }

    #[wasm_bindgen(js_name = addYColumn)]
    pub fn add_y_column(&mut self, field: &str, column_json: &str) -> Result<(), JsValue> {
        let def = parse_column(column_json).map_err(to_js)?;
        self.chart.add_y(field, def);
        Ok(())
    }

    /// Replace the chart data (JSON array of records).
    #[wasm_bindgen(js_name = changeData)]
    pub fn change_data(&mut self, data_json: &str) -> Result<(), JsValue> {
        let dataset: Dataset = serde_json::from_str(data_json)
            .map_err(|e| to_js(PresentationError::DeserializationFailed(e.to_string()).into()))?;
        self.chart.set_dataset(dataset);
        self.controller.on_data_changed();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.chart.clear();
        self.controller.on_cleared();
    }

    /// Called with no arguments whenever the chart needs a repaint.
    #[wasm_bindgen(js_name = onRedraw)]
    pub fn on_redraw(&mut self, callback: js_sys::Function) {
        self.redraw_callback = Some(callback);
    }

    #[wasm_bindgen(js_name = pinchStart)]
    pub fn pinch_start(&mut self) {
        self.controller.on_gesture_start();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pinch(
        &mut self,
        scale: f64,
        center_x: f64,
        center_y: f64,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        timestamp: f64,
    ) -> Result<(), JsValue> {
        let sample = sample(scale, center_x, center_y, [x0, y0, x1, y1], timestamp);
        self.controller.on_gesture_update(&mut self.chart, &sample);
        self.flush_redraw()
    }

    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen(js_name = pinchEnd)]
    pub fn pinch_end(
        &mut self,
        scale: f64,
        center_x: f64,
        center_y: f64,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        timestamp: f64,
    ) -> Result<(), JsValue> {
        let sample = sample(scale, center_x, center_y, [x0, y0, x1, y1], timestamp);
        self.controller.on_gesture_end(&mut self.chart, &sample);
        self.flush_redraw()
    }

    /// Long press; returns whether the tooltip took over.
    pub fn press(&mut self, center_x: f64, center_y: f64, distance: f64, duration: f64) -> bool {
        let press = PressEvent::new(Point::new(center_x, center_y), distance, duration);
        self.controller.on_press(&mut self.chart, &press)
    }

    pub fn reset(&mut self) {
        self.controller.on_reset(&mut self.chart);
    }

    /// Current column definition of `field` as JSON.
    pub fn column(&self, field: &str) -> Result<String, JsValue> {
        let def = self
            .chart
            .column(field)
            .ok_or_else(|| JsValue::from_str(&format!("unknown field `{}`", field)))?;
        serde_json::to_string(def)
            .map_err(|e| to_js(PresentationError::SerializationFailed(e.to_string()).into()))
    }

    /// `[start, end]` of the visible x window, empty before the first zoom.
    #[wasm_bindgen(js_name = xRange)]
    pub fn x_range(&self) -> Vec<f64> {
        range_pair(self.controller.x_range())
    }

    #[wasm_bindgen(js_name = yRange)]
    pub fn y_range(&self) -> Vec<f64> {
        range_pair(self.controller.y_range())
    }

    #[wasm_bindgen(js_name = tooltipPoint)]
    pub fn tooltip_point(&self) -> Vec<f64> {
        self.chart
            .tooltip()
            .and_then(|tooltip| tooltip.shown_at)
            .map(|point| vec![point.x, point.y])
            .unwrap_or_default()
    }

    fn flush_redraw(&mut self) -> Result<(), JsValue> {
        if !self.chart.take_redraw_request() {
            return Ok(());
        }
        if let Some(callback) = &self.redraw_callback {
            callback.call0(&JsValue::NULL).map_err(|e| {
                log_error!(COMPONENT, "redraw callback threw: {:?}", e);
                to_js(PresentationError::CallbackFailed(format!("{:?}", e)).into())
            })?;
        }
        Ok(())
    }
}

fn sample(scale: f64, center_x: f64, center_y: f64, pointers: [f64; 4], timestamp: f64) -> GestureSample {
    let [x0, y0, x1, y1] = pointers;
    GestureSample::new(
        scale,
        Point::new(center_x, center_y),
        [Point::new(x0, y0), Point::new(x1, y1)],
        timestamp,
    )
}

fn parse_column(json: &str) -> Result<ColumnDef, AppError> {
    serde_json::from_str(json).map_err(|e| PresentationError::DeserializationFailed(e.to_string()).into())
}

fn range_pair(range: Option<FieldRange>) -> Vec<f64> {
    range.map(|r| vec![r.start, r.end]).unwrap_or_default()
}

fn to_js(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
