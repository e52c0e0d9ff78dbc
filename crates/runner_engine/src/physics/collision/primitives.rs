//! Primitive collision tests
//!
//! Axis-aligned bounding box overlap on [`Rect`] values.

use crate::foundation::math::Rect;

/// Axis-Aligned Bounding Box overlap test
///
/// True when the two rectangles overlap on both axes. Comparisons are
/// strict, so rectangles that only share an edge do not overlap, and any
/// NaN coordinate makes the test false. A rectangle with a zero or
/// negative width or height overlaps nothing, not even a box around it.
#[inline]
pub fn boxes_overlap(a: &Rect, b: &Rect) -> bool {
    a.width > 0.0
        && a.height > 0.0
        && b.width > 0.0
        && b.height > 0.0
        && a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}

impl Rect {
    /// Check if this rectangle overlaps another (see [`boxes_overlap`])
    pub fn intersects(&self, other: &Rect) -> bool {
        boxes_overlap(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_boxes() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 10.0, 10.0),
            Rect::new(-3.0, 9.5, 4.0, 1.0),
            Rect::new(100.0, 100.0, 1.0, 1.0),
            Rect::new(2.0, 2.0, 0.0, 5.0),
            Rect::new(0.0, 0.0, -4.0, -4.0),
        ]
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = sample_boxes();
        for a in &boxes {
            for b in &boxes {
                assert_eq!(boxes_overlap(a, b), boxes_overlap(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_identical_box_overlaps_itself() {
        let rect = Rect::new(3.0, 4.0, 8.0, 2.0);
        assert!(boxes_overlap(&rect, &rect));
    }

    #[test]
    fn test_translated_outside_does_not_overlap() {
        let rect = Rect::new(3.0, 4.0, 8.0, 2.0);
        assert!(!boxes_overlap(&rect, &rect.translated([8.5, 0.0].into())));
        assert!(!boxes_overlap(&rect, &rect.translated([-9.0, 0.0].into())));
        assert!(!boxes_overlap(&rect, &rect.translated([0.0, 2.5].into())));
        assert!(!boxes_overlap(&rect, &rect.translated([0.0, -3.0].into())));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!boxes_overlap(&a, &right));
        assert!(!boxes_overlap(&a, &below));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_zero_area_never_overlaps() {
        let flat = Rect::new(2.0, 2.0, 0.0, 5.0);
        let big = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!boxes_overlap(&flat, &big));
        assert!(!boxes_overlap(&flat, &flat));
        assert!(!boxes_overlap(&big, &flat));
    }

    #[test]
    fn test_negative_size_never_overlaps() {
        let big = Rect::new(-100.0, -100.0, 200.0, 200.0);
        let negative = Rect::new(0.0, 0.0, -4.0, -4.0);
        let upside_down = Rect::new(0.0, 5.0, 4.0, -4.0);

        assert!(!boxes_overlap(&negative, &big));
        assert!(!boxes_overlap(&big, &negative));
        assert!(!boxes_overlap(&upside_down, &big));
    }

    #[test]
    fn test_over_inset_box_overlaps_nothing() {
        let big = Rect::new(-100.0, -100.0, 200.0, 200.0);
        let thin = Rect::new(0.0, 0.0, 1.5, 30.0).inset(1.0);

        assert!(thin.width < 0.0);
        assert!(!thin.intersects(&big));
        assert!(!big.intersects(&thin));
    }

    #[test]
    fn test_positive_boxes_unaffected_by_size_guard() {
        let a = Rect::new(0.0, 0.0, 0.5, 0.5);
        let b = Rect::new(0.25, 0.25, 0.5, 0.5);
        assert!(boxes_overlap(&a, &b));
    }

    #[test]
    fn test_nan_never_overlaps() {
        let nan = Rect::new(f32::NAN, 0.0, 10.0, 10.0);
        let big = Rect::new(-100.0, -100.0, 200.0, 200.0);
        assert!(!boxes_overlap(&nan, &big));
        assert!(!boxes_overlap(&big, &nan));
    }
}
