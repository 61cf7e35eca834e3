//! World-space geometric primitives and their overlap predicates

use crate::foundation::math::Vec2;

/// An axis-aligned rectangle in world space, anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRect {
    /// World x of the left edge
    pub left: f32,
    /// World y of the bottom edge
    pub bottom: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl WorldRect {
    /// Creates a rectangle from its lower-left corner and extents
    pub const fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self { left, bottom, width, height }
    }

    /// World x of the right edge
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// World y of the top edge
    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    /// Lower-left corner, used as the rect's reference point for directions
    pub fn corner(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom)
    }

    /// Check if this rectangle overlaps another
    ///
    /// Edges that only touch do not count.
    pub fn overlaps(&self, other: &WorldRect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.bottom < other.top()
            && self.top() > other.bottom
    }
}

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldCircle {
    /// World-space center
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl WorldCircle {
    /// Creates a circle from its world center and radius
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Check if this circle overlaps another
    ///
    /// Touching circles overlap. Two circles with the same center and radius
    /// do not: that case is an entity tested against itself.
    pub fn overlaps(&self, other: &WorldCircle) -> bool {
        if self.center == other.center && self.radius == other.radius {
            return false;
        }

        let distance = (self.center - other.center).magnitude();
        distance <= self.radius + other.radius
    }

    /// Square of side `2 * radius` centered on the circle
    pub fn bounding_square(&self) -> WorldRect {
        let side = self.radius * 2.0;
        WorldRect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            side,
            side,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_partial_overlap() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let b = WorldRect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_rect_disjoint() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let b = WorldRect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let right = WorldRect::new(10.0, 0.0, 10.0, 10.0);
        let above = WorldRect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_rect_overlap_needs_both_axes() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let same_column = WorldRect::new(2.0, 30.0, 4.0, 4.0);
        assert!(!a.overlaps(&same_column));
    }

    #[test]
    fn test_circle_boundary_is_inclusive() {
        let a = WorldCircle::new(0.0, 0.0, 5.0);
        let touching = WorldCircle::new(10.0, 0.0, 5.0);
        let apart = WorldCircle::new(10.001, 0.0, 5.0);
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_identical_circles_do_not_overlap() {
        let a = WorldCircle::new(3.0, 4.0, 5.0);
        assert!(!a.overlaps(&a));
        // Same center, different radius still collides
        assert!(a.overlaps(&WorldCircle::new(3.0, 4.0, 1.0)));
    }

    #[test]
    fn test_bounding_square() {
        let square = WorldCircle::new(100.0, 100.0, 16.0).bounding_square();
        assert_eq!(square, WorldRect::new(84.0, 84.0, 32.0, 32.0));
    }
}
