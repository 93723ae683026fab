//! Axis-aligned shape primitives
//!
//! Screen space: origin top-left, y grows downward. Positions are the
//! top-left corner of the shape's bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.half_extents()
    }

    /// Point on (or inside) the rectangle closest to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let half = self.half_extents();
        let center = self.center();
        center + (p - center).clamp(-half, half)
    }
}

/// A circle given by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// AABB overlap test. Edges that touch count as overlapping.
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    let overlap_x = a.pos.x + a.size.x >= b.pos.x && b.pos.x + b.size.x >= a.pos.x;
    let overlap_y = a.pos.y + a.size.y >= b.pos.y && b.pos.y + b.size.y >= a.pos.y;
    overlap_x && overlap_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_overlap_edge_touching() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rect_overlap(&a, &b));

        let c = Rect::new(Vec2::new(10.5, 0.0), Vec2::new(10.0, 10.0));
        assert!(!rect_overlap(&a, &c));
    }

    #[test]
    fn test_rect_overlap_one_axis_only() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Same column, far below
        let b = Rect::new(Vec2::new(2.0, 50.0), Vec2::new(4.0, 4.0));
        assert!(!rect_overlap(&a, &b));
    }

    #[test]
    fn test_closest_point_clamps_to_edges() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.closest_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(r.closest_point(Vec2::new(30.0, -4.0)), Vec2::new(20.0, 0.0));
        // Inside: the point itself
        assert_eq!(r.closest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(Vec2::new(x, y), Vec2::new(w, h)))
    }

    proptest! {
        #[test]
        fn prop_rect_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(rect_overlap(&a, &b), rect_overlap(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in arb_rect()) {
            prop_assert!(rect_overlap(&a, &a));
        }
    }
}
