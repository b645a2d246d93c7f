use super::value_objects::{Axis, AxisSet, GestureSample, ZoomMode};
use strum::IntoEnumIterator;

/// Finger-spread ratios strictly inside this band count as diagonal.
const DIAGONAL_RATIO: (f64, f64) = (0.3, 1.7);

/// Classify the two-finger shape of a sample.
///
/// A diagonal spread affects both axes, otherwise the dominant direction
/// wins. Fingers on the same horizontal line (`dy == 0`) count as `X`.
pub fn classify_geometry(sample: &GestureSample) -> AxisSet {
    let [first, second] = sample.pointers;
    let dx = (first.x - second.x).abs();
    let dy = (first.y - second.y).abs();
    if dy == 0.0 {
        return AxisSet::X_ONLY;
    }

    let ratio = dx / dy;
    if ratio > DIAGONAL_RATIO.0 && ratio < DIAGONAL_RATIO.1 {
        AxisSet::BOTH
    } else if dx > dy {
        AxisSet::X_ONLY
    } else {
        AxisSet::Y_ONLY
    }
}

/// Only `xy` mode honours the per-gesture geometry; every other mode
/// resolves to both axes and is narrowed by [`eligible_axes`].
pub fn resolve_axes(mode: ZoomMode, classified: Option<AxisSet>) -> AxisSet {
    match (mode, classified) {
        (ZoomMode::XY, Some(axes)) => axes,
        _ => AxisSet::BOTH,
    }
}

/// Intersection of the configured mode and the resolved axis set.
pub fn eligible_axes(mode: ZoomMode, classified: Option<AxisSet>) -> AxisSet {
    let resolved = resolve_axes(mode, classified);
    let mut eligible = AxisSet::new(false, false);
    for axis in Axis::iter() {
        let enabled = mode.includes(axis) && resolved.contains(axis);
        match axis {
            Axis::X => eligible.x = enabled,
            Axis::Y => eligible.y = enabled,
        }
    }
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Point;

    fn sample(a: (f64, f64), b: (f64, f64)) -> GestureSample {
        GestureSample::new(1.0, Point::default(), [Point::new(a.0, a.1), Point::new(b.0, b.1)], 0.0)
    }

    #[test]
    fn horizontal_spread_is_x() {
        assert_eq!(classify_geometry(&sample((0.0, 0.0), (100.0, 10.0))), AxisSet::X_ONLY);
    }

    #[test]
    fn vertical_spread_is_y() {
        assert_eq!(classify_geometry(&sample((0.0, 0.0), (10.0, 100.0))), AxisSet::Y_ONLY);
    }

    #[test]
    fn diagonal_spread_is_both() {
        assert_eq!(classify_geometry(&sample((0.0, 0.0), (100.0, 100.0))), AxisSet::BOTH);
    }

    #[test]
    fn ratio_band_edges_are_exclusive() {
        // dx / dy == 1.7 exactly falls back to the dominant axis
        assert_eq!(classify_geometry(&sample((0.0, 0.0), (170.0, 100.0))), AxisSet::X_ONLY);
        assert_eq!(classify_geometry(&sample((0.0, 0.0), (30.0, 100.0))), AxisSet::Y_ONLY);
    }

    #[test]
    fn coincident_rows_do_not_divide_by_zero() {
        assert_eq!(classify_geometry(&sample((5.0, 40.0), (5.0, 40.0))), AxisSet::X_ONLY);
        assert_eq!(classify_geometry(&sample((0.0, 40.0), (80.0, 40.0))), AxisSet::X_ONLY);
    }

    #[test]
    fn only_xy_mode_follows_geometry() {
        assert_eq!(resolve_axes(ZoomMode::XY, Some(AxisSet::Y_ONLY)), AxisSet::Y_ONLY);
        assert_eq!(resolve_axes(ZoomMode::XY, None), AxisSet::BOTH);
        assert_eq!(resolve_axes(ZoomMode::X, Some(AxisSet::Y_ONLY)), AxisSet::BOTH);
    }

    #[test]
    fn eligibility_intersects_mode_and_geometry() {
        assert_eq!(eligible_axes(ZoomMode::X, Some(AxisSet::Y_ONLY)), AxisSet::X_ONLY);
        assert_eq!(eligible_axes(ZoomMode::Y, Some(AxisSet::X_ONLY)), AxisSet::Y_ONLY);
        assert_eq!(eligible_axes(ZoomMode::XY, Some(AxisSet::X_ONLY)), AxisSet::X_ONLY);
        assert_eq!(eligible_axes(ZoomMode::XY, Some(AxisSet::BOTH)), AxisSet::BOTH);
    }
}
