use super::limit_range::LimitRange;
use crate::domain::chart::{AxisScale, ScaleUpdate};

/// Rescales a numeric axis around the data value under the gesture center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuousZoomer {
    /// Widest visible span is `origin / min_scale`.
    pub min_scale: Option<f64>,
    /// Narrowest visible span is `origin / max_scale`.
    pub max_scale: Option<f64>,
}

impl ContinuousZoomer {
    pub fn new(min_scale: Option<f64>, max_scale: Option<f64>) -> Self {
        Self { min_scale, max_scale }
    }

    /// New `[min, max]` for `scale`; `None` unless it is linear with a
    /// continuous limit.
    ///
    /// `percent` is the gesture center projected onto the axis, so the data
    /// value at `min + percent * (max - min)` is identical before and after.
    pub fn zoom(&self, scale: &AxisScale, limit: &LimitRange, zoom: f64, percent: f64) -> Option<ScaleUpdate> {
        let AxisScale::Linear(linear) = scale else {
            return None;
        };
        let LimitRange::Continuous { .. } = limit else {
            return None;
        };

        let value_range = linear.max - linear.min;
        let origin_span = limit.span();

        let mut new_diff = value_range * (zoom - 1.0);
        if let Some(min_scale) = self.min_scale.filter(|_| zoom < 1.0) {
            new_diff = new_diff.max(value_range - origin_span / min_scale);
        }
        if let Some(max_scale) = self.max_scale.filter(|_| zoom >= 1.0) {
            new_diff = new_diff.min(value_range - origin_span / max_scale);
        }

        let min_delta = new_diff * percent;
        let max_delta = new_diff * (1.0 - percent);
        Some(ScaleUpdate::Range {
            min: linear.min + min_delta,
            max: linear.max - max_delta,
            nice: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::LinearScale;

    fn linear(min: f64, max: f64) -> AxisScale {
        AxisScale::Linear(LinearScale { field: "v".into(), min, max })
    }

    fn range(update: Option<ScaleUpdate>) -> (f64, f64) {
        match update {
            Some(ScaleUpdate::Range { min, max, .. }) => (min, max),
            other => panic!("expected a range update, got {:?}", other),
        }
    }

    const FULL: LimitRange = LimitRange::Continuous { min: 0.0, max: 100.0 };

    #[test]
    fn scale_below_one_widens_around_pivot() {
        let (min, max) = range(ContinuousZoomer::default().zoom(&linear(0.0, 100.0), &FULL, 0.8, 0.5));
        assert!((min - -10.0).abs() < 1e-9);
        assert!((max - 110.0).abs() < 1e-9);
    }

    #[test]
    fn scale_above_one_narrows_around_pivot() {
        let (min, max) = range(ContinuousZoomer::default().zoom(&linear(0.0, 100.0), &FULL, 1.25, 0.5));
        assert!((min - 12.5).abs() < 1e-9);
        assert!((max - 87.5).abs() < 1e-9);
    }

    #[test]
    fn off_center_pivot_moves_boundaries_proportionally() {
        let (min, max) = range(ContinuousZoomer::default().zoom(&linear(0.0, 100.0), &FULL, 1.5, 0.2));
        // diff 50 split 10 / 40
        assert!((min - 10.0).abs() < 1e-9);
        assert!((max - 60.0).abs() < 1e-9);
    }

    #[test]
    fn min_scale_caps_widening() {
        let zoomer = ContinuousZoomer::new(Some(1.0), None);
        let (min, max) = range(zoomer.zoom(&linear(10.0, 90.0), &FULL, 0.5, 0.5));
        assert!((max - min - 100.0).abs() < 1e-9);
    }

    #[test]
    fn max_scale_caps_narrowing() {
        let zoomer = ContinuousZoomer::new(None, Some(4.0));
        let (min, max) = range(zoomer.zoom(&linear(0.0, 40.0), &FULL, 3.0, 0.5));
        assert!((max - min - 25.0).abs() < 1e-9);
    }

    #[test]
    fn unit_scale_keeps_range() {
        let zoomer = ContinuousZoomer::new(Some(1.0), Some(4.0));
        assert_eq!(range(zoomer.zoom(&linear(20.0, 80.0), &FULL, 1.0, 0.3)), (20.0, 80.0));
    }

    #[test]
    fn non_linear_scales_are_skipped() {
        let scale = AxisScale::Unsupported { field: "v".into(), kind: crate::domain::chart::ScaleKind::Log };
        assert_eq!(ContinuousZoomer::default().zoom(&scale, &FULL, 2.0, 0.5), None);
    }
}
