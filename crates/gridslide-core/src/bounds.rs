//! Saturating bounds clamp for panel offsets.

use kurbo::{Size, Vec2};

/// Clamp a proposed offset on one axis to the legal range implied by the
/// container and element extents.
///
/// The legal range is `[-(container - element), 0]`. When the container is
/// smaller than the element the range inverts; the axis then pins to `0.0`
/// so the result stays deterministic.
pub fn clamp_axis(proposed: f64, container: f64, element: f64) -> f64 {
    let min = -(container - element);
    if min > 0.0 {
        return 0.0;
    }
    proposed.clamp(min, 0.0)
}

/// Clamp a proposed offset against container/element geometry, per axis.
pub fn clamp_offset(proposed: Vec2, container: Size, element: Size) -> Vec2 {
    Vec2::new(
        clamp_axis(proposed.x, container.width, element.width),
        clamp_axis(proposed.y, container.height, element.height),
    )
}

/// Round to two decimal places, the sub-pixel precision the render sink
/// receives.
pub fn round_px(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_range_passes_through() {
        let allowed = clamp_offset(
            Vec2::new(-40.0, -40.0),
            Size::new(500.0, 300.0),
            Size::new(200.0, 100.0),
        );
        assert_eq!(allowed, Vec2::new(-40.0, -40.0));
    }

    #[test]
    fn test_overshoot_saturates_to_min() {
        let allowed = clamp_offset(
            Vec2::new(-490.0, -490.0),
            Size::new(500.0, 300.0),
            Size::new(200.0, 100.0),
        );
        assert_eq!(allowed, Vec2::new(-300.0, -200.0));
    }

    #[test]
    fn test_positive_overshoot_saturates_to_zero() {
        let allowed = clamp_offset(
            Vec2::new(125.0, 3.5),
            Size::new(500.0, 300.0),
            Size::new(200.0, 100.0),
        );
        assert_eq!(allowed, Vec2::ZERO);
    }

    #[test]
    fn test_container_smaller_than_element_pins_to_zero() {
        let allowed = clamp_offset(
            Vec2::new(-50.0, 50.0),
            Size::new(100.0, 100.0),
            Size::new(200.0, 200.0),
        );
        assert_eq!(allowed, Vec2::ZERO);
    }

    #[test]
    fn test_equal_sizes_collapse_range_to_zero() {
        assert_eq!(clamp_axis(-10.0, 300.0, 300.0), 0.0);
        assert_eq!(clamp_axis(10.0, 300.0, 300.0), 0.0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let container = Size::new(500.0, 300.0);
        let element = Size::new(200.0, 100.0);
        for proposed in [
            Vec2::new(-490.0, -490.0),
            Vec2::new(12.0, -7.0),
            Vec2::new(-300.0, 0.0),
        ] {
            let once = clamp_offset(proposed, container, element);
            let twice = clamp_offset(once, container, element);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_round_px() {
        assert_eq!(round_px(-40.005), -40.0);
        assert_eq!(round_px(-40.006), -40.01);
        assert_eq!(round_px(13.333333), 13.33);
        assert_eq!(round_px(0.0), 0.0);
    }
}
