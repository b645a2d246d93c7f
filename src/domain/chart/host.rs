use super::entities::{AxisScale, Dataset, ScaleUpdate};
use super::value_objects::{CartesianCoord, Point};

/// Screen-to-data-space projection of the plot area
pub trait CoordinateTransform {
    /// Local pixel point to normalized `[0, 1]` axis space.
    fn invert_point(&self, point: Point) -> Point;
    fn start(&self) -> Point;
    fn end(&self) -> Point;

    /// Horizontal midpoint of the plot area in local pixels.
    fn center_x(&self) -> f64 {
        (self.start().x + self.end().x) / 2.0
    }
}

impl CoordinateTransform for CartesianCoord {
    fn invert_point(&self, point: Point) -> Point {
        let width = self.end.x - self.start.x;
        let height = self.end.y - self.start.y;
        let x = if width == 0.0 { 0.0 } else { (point.x - self.start.x) / width };
        let y = if height == 0.0 { 0.0 } else { (point.y - self.start.y) / height };
        Point::new(x, y)
    }

    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }
}

/// Everything the pinch interaction needs from the chart it is attached to
pub trait ChartHost {
    type Coord: CoordinateTransform;

    fn dataset(&self) -> &Dataset;
    fn coordinate(&self) -> &Self::Coord;
    /// Top-left corner of the chart surface in screen coordinates.
    fn surface_offset(&self) -> Point;

    fn x_scale(&self) -> Option<AxisScale>;
    fn y_scales(&self) -> Vec<AxisScale>;
    /// Merge `update` into the column definition of `field`, keeping its
    /// other attributes.
    fn set_scale(&mut self, field: &str, update: ScaleUpdate);
    fn request_redraw(&mut self);

    /// Whether the chart carries a tooltip controller at all.
    fn has_tooltip(&self) -> bool {
        false
    }
    fn set_tooltip_enabled(&mut self, _enabled: bool) {}
    fn show_tooltip(&mut self, _point: Point) {}
    fn hide_tooltip(&mut self) {}
}
