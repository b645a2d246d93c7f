use super::limit_range::IndexWindow;
use crate::domain::chart::FieldValue;

pub const DEFAULT_TIME_MIN_SCALE: f64 = 1.0;
pub const DEFAULT_TIME_MAX_SCALE: f64 = 4.0;

/// Bulk window shifts over time buckets, bounded by visible item counts
/// rather than by a pressure threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeCategoricalZoomer {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for TimeCategoricalZoomer {
    fn default() -> Self {
        Self { min_scale: DEFAULT_TIME_MIN_SCALE, max_scale: DEFAULT_TIME_MAX_SCALE }
    }
}

impl TimeCategoricalZoomer {
    pub fn new(min_scale: Option<f64>, max_scale: Option<f64>) -> Self {
        Self {
            min_scale: min_scale.unwrap_or(DEFAULT_TIME_MIN_SCALE),
            max_scale: max_scale.unwrap_or(DEFAULT_TIME_MAX_SCALE),
        }
    }

    /// Fewest buckets that may stay visible.
    pub fn min_count(&self, total: usize) -> f64 {
        total as f64 / self.max_scale
    }

    /// Most buckets that may become visible.
    pub fn max_count(&self, total: usize) -> f64 {
        total as f64 / self.min_scale
    }

    /// New visible buckets, or `None` when the count bound is already hit,
    /// the step rounds to no change, or the visible subset is not part of
    /// `origin`.
    ///
    /// Scale at or above one narrows inside the visible slice; below one
    /// widens inside the full list. `percent` (horizontal gesture center)
    /// splits the change between the two ends.
    pub fn zoom(&self, origin: &[FieldValue], visible: &[FieldValue], zoom: f64, percent: f64) -> Option<Vec<FieldValue>> {
        let total = origin.len();
        let len = visible.len();
        if total == 0 || len == 0 {
            return None;
        }
        let percent = percent.clamp(0.0, 1.0);
        let delta_count = (len as f64 * (zoom - 1.0).abs()).floor() as usize;

        let next = if zoom >= 1.0 && (len as f64) > self.min_count(total) {
            let floor_count = (self.min_count(total).ceil() as usize).max(1);
            let delta = delta_count.min(len.saturating_sub(floor_count));
            let (min_delta, max_delta) = split(delta, percent);
            visible[min_delta..len - max_delta].to_vec()
        } else if zoom < 1.0 && (len as f64) < self.max_count(total) {
            let window = IndexWindow::locate(origin, visible)?;
            let ceiling = (self.max_count(total).floor() as usize).min(total);
            let delta = delta_count.min(ceiling.saturating_sub(len));
            let (min_delta, max_delta) = split(delta, percent);
            let first = window.first.saturating_sub(min_delta);
            let end = (window.last + 1 + max_delta).min(total);
            origin[first..end].to_vec()
        } else {
            return None;
        };
        // a zero-size step leaves the scale untouched
        (next.as_slice() != visible).then_some(next)
    }
}

fn split(delta: usize, percent: f64) -> (usize, usize) {
    let min_delta = (delta as f64 * percent).floor() as usize;
    (min_delta, delta - min_delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(range: std::ops::Range<usize>) -> Vec<FieldValue> {
        range.map(|i| FieldValue::Number(i as f64)).collect()
    }

    #[test]
    fn narrowing_splits_by_center_position() {
        let zoomer = TimeCategoricalZoomer::default();
        // 20 visible, |1.5 - 1| -> 10 removed, 3 from the start, 7 from the end
        let out = zoomer.zoom(&buckets(0..40), &buckets(10..30), 1.5, 0.3).unwrap();
        assert_eq!(out, buckets(13..23));
    }

    #[test]
    fn narrowing_never_goes_below_min_count() {
        let zoomer = TimeCategoricalZoomer::default();
        let out = zoomer.zoom(&buckets(0..40), &buckets(0..12), 3.0, 0.5).unwrap();
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn at_min_count_narrowing_is_refused() {
        let zoomer = TimeCategoricalZoomer::default();
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(0..10), 2.0, 0.5), None);
    }

    #[test]
    fn widening_grows_inside_origin() {
        let zoomer = TimeCategoricalZoomer::default();
        let out = zoomer.zoom(&buckets(0..40), &buckets(10..20), 0.5, 0.5).unwrap();
        // delta 5: 2 before, 3 after
        assert_eq!(out, buckets(8..23));
    }

    #[test]
    fn widening_clamps_to_list_edges() {
        let zoomer = TimeCategoricalZoomer::default();
        let out = zoomer.zoom(&buckets(0..40), &buckets(0..20), 0.25, 0.5).unwrap();
        // delta 15: the 7 asked for before the start are lost, 8 land after
        assert_eq!(out, buckets(0..28));
    }

    #[test]
    fn full_list_cannot_widen() {
        let zoomer = TimeCategoricalZoomer::default();
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(0..40), 0.5, 0.5), None);
    }

    #[test]
    fn unit_scale_is_not_a_step() {
        let zoomer = TimeCategoricalZoomer::default();
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(5..25), 1.0, 0.7), None);
    }

    #[test]
    fn step_rounding_to_zero_buckets_is_not_a_step() {
        let zoomer = TimeCategoricalZoomer::default();
        // 20 * 0.04 floors to 0
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(5..25), 1.04, 0.5), None);
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(5..25), 0.96, 0.5), None);
    }

    #[test]
    fn widening_fully_clipped_at_the_edge_is_not_a_step() {
        let zoomer = TimeCategoricalZoomer::default();
        // all 5 added buckets are asked for before index 0
        assert_eq!(zoomer.zoom(&buckets(0..40), &buckets(0..10), 0.5, 1.0), None);
    }
}
