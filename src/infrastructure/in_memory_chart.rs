use crate::domain::chart::{
    AxisScale, CartesianCoord, CategoryScale, ChartHost, Dataset, FieldValue, LinearScale, Point, ScaleKind,
    ScaleUpdate,
};
use crate::domain::logging::LogComponent;
use crate::log_warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column definition as a chart config states it.
///
/// Fields the pinch interaction does not touch (`alias`, `tickCount`) are
/// carried through every rescale untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(rename = "type")]
    pub kind: ScaleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FieldValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Vec<FieldValue>>,
    #[serde(default = "default_nice")]
    pub nice: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<u32>,
}

fn default_nice() -> bool {
    true
}

impl ColumnDef {
    pub fn of_kind(kind: ScaleKind) -> Self {
        Self {
            kind,
            min: None,
            max: None,
            values: None,
            ticks: None,
            nice: true,
            alias: None,
            tick_count: None,
        }
    }

    pub fn linear(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max), ..Self::of_kind(ScaleKind::Linear) }
    }

    pub fn category(values: Vec<FieldValue>) -> Self {
        Self { values: Some(values), ..Self::of_kind(ScaleKind::Category) }
    }

    pub fn time_category(values: Vec<FieldValue>) -> Self {
        Self { values: Some(values), ..Self::of_kind(ScaleKind::TimeCategory) }
    }

    fn merge(&mut self, update: ScaleUpdate) {
        match update {
            ScaleUpdate::Range { min, max, nice } => {
                self.min = Some(min);
                self.max = Some(max);
                self.nice = nice;
            }
            ScaleUpdate::Values { values, ticks } => {
                self.values = Some(values);
                self.ticks = Some(ticks);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub enabled: bool,
    pub shown_at: Option<Point>,
}

/// Self-contained [`ChartHost`]: dataset, column definitions, plot area and
/// tooltip flags, with redraw requests counted instead of painted.
#[derive(Debug, Clone)]
pub struct InMemoryChart {
    dataset: Dataset,
    columns: HashMap<String, ColumnDef>,
    x_field: Option<String>,
    y_fields: Vec<String>,
    coord: CartesianCoord,
    surface_offset: Point,
    tooltip: Option<TooltipState>,
    redraw_requests: usize,
}

impl InMemoryChart {
    pub fn new(coord: CartesianCoord) -> Self {
        Self {
            dataset: Dataset::default(),
            columns: HashMap::new(),
            x_field: None,
            y_fields: Vec::new(),
            coord,
            surface_offset: Point::default(),
            tooltip: None,
            redraw_requests: 0,
        }
    }

    pub fn with_surface_offset(mut self, offset: Point) -> Self {
        self.surface_offset = offset;
        self
    }

    pub fn set_surface_offset(&mut self, offset: Point) {
        self.surface_offset = offset;
    }

    /// Give the chart a tooltip controller (initially enabled).
    pub fn with_tooltip(mut self) -> Self {
        self.tooltip = Some(TooltipState { enabled: true, shown_at: None });
        self
    }

    pub fn with_x(mut self, field: &str, def: ColumnDef) -> Self {
        self.set_x(field, def);
        self
    }

    pub fn with_y(mut self, field: &str, def: ColumnDef) -> Self {
        self.add_y(field, def);
        self
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn set_x(&mut self, field: &str, def: ColumnDef) {
        self.columns.insert(field.to_string(), def);
        self.x_field = Some(field.to_string());
    }

    pub fn add_y(&mut self, field: &str, def: ColumnDef) {
        self.columns.insert(field.to_string(), def);
        if !self.y_fields.iter().any(|f| f == field) {
            self.y_fields.push(field.to_string());
        }
    }

    /// Replace the data. Callers must forward the change to the attached
    /// interaction so its limit ranges are rebuilt.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    pub fn clear(&mut self) {
        self.dataset = Dataset::default();
    }

    pub fn set_coordinate(&mut self, coord: CartesianCoord) {
        self.coord = coord;
    }

    pub fn column(&self, field: &str) -> Option<&ColumnDef> {
        self.columns.get(field)
    }

    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Consume pending redraw requests; true if any were made.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requests) > 0
    }

    /// Resolve the current scale of `field` from its column definition,
    /// filling unset bounds and lists from the data.
    pub fn scale_for(&self, field: &str) -> Option<AxisScale> {
        let def = self.columns.get(field)?;
        let scale = match def.kind {
            ScaleKind::Linear => {
                let (data_min, data_max) = self.dataset.numeric_range(field).unwrap_or((0.0, 1.0));
                AxisScale::Linear(LinearScale {
                    field: field.to_string(),
                    min: def.min.unwrap_or(data_min),
                    max: def.max.unwrap_or(data_max),
                })
            }
            ScaleKind::Category => AxisScale::Category(self.category_scale(field, def, false)),
            ScaleKind::TimeCategory => AxisScale::TimeCategory(self.category_scale(field, def, true)),
            kind => AxisScale::Unsupported { field: field.to_string(), kind },
        };
        Some(scale)
    }

    fn category_scale(&self, field: &str, def: &ColumnDef, chronological: bool) -> CategoryScale {
        let values = def.values.clone().unwrap_or_else(|| {
            let mut values = self.dataset.distinct_values(field);
            if chronological {
                values.sort_by(FieldValue::chronological_cmp);
            }
            values
        });
        let ticks = def.ticks.clone().unwrap_or_else(|| values.clone());
        CategoryScale { field: field.to_string(), values, ticks }
    }
}

impl ChartHost for InMemoryChart {
    type Coord = CartesianCoord;

    fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn coordinate(&self) -> &CartesianCoord {
        &self.coord
    }

    fn surface_offset(&self) -> Point {
        self.surface_offset
    }

    fn x_scale(&self) -> Option<AxisScale> {
        self.x_field.as_deref().and_then(|field| self.scale_for(field))
    }

    fn y_scales(&self) -> Vec<AxisScale> {
        self.y_fields.iter().filter_map(|field| self.scale_for(field)).collect()
    }

    fn set_scale(&mut self, field: &str, update: ScaleUpdate) {
        match self.columns.get_mut(field) {
            Some(def) => def.merge(update),
            None => {
                log_warn!(LogComponent::Infrastructure("InMemoryChart"), "rescale of undefined field `{}`", field);
            }
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn has_tooltip(&self) -> bool {
        self.tooltip.is_some()
    }

    fn set_tooltip_enabled(&mut self, enabled: bool) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.enabled = enabled;
        }
    }

    fn show_tooltip(&mut self, point: Point) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            if tooltip.enabled {
                tooltip.shown_at = Some(point);
            }
        }
    }

    fn hide_tooltip(&mut self) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.shown_at = None;
        }
    }
}
