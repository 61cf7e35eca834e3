//! Narrow-phase collision tests for 2D shapes
//!
//! # Module Organization
//!
//! - [`shape`] - Offset-relative shapes attached to entities
//! - [`primitives`] - World-space rectangles and circles
//!
//! Shapes are stored relative to their entity and placed in world space only
//! for the duration of a test. A rect/circle pair is tested by treating the
//! circle as its bounding square, so corners of that square count as hits
//! even though the circle does not reach them.

pub mod primitives;
pub mod shape;

pub use primitives::{WorldCircle, WorldRect};
pub use shape::{CollisionError, Shape, ShapeKind, WorldSpaceShape};

use crate::foundation::math::{Vec2, Vec3};

/// Check whether two positioned shapes overlap
///
/// Symmetric: swapping target and other never changes the answer.
pub fn test_overlap(
    target_shape: &Shape,
    target_pos: &Vec3,
    other_shape: &Shape,
    other_pos: &Vec3,
) -> bool {
    detect(target_shape, target_pos, other_shape, other_pos).is_some()
}

/// Test two positioned shapes and return the collision direction on overlap
///
/// The direction points from the target's reference point toward the
/// other's: the lower-left corner for rects, the center for circles, and the
/// bounding square's corner for a circle tested against a rect.
pub fn detect(
    target_shape: &Shape,
    target_pos: &Vec3,
    other_shape: &Shape,
    other_pos: &Vec3,
) -> Option<Vec3> {
    use WorldSpaceShape::{Circle, Rect};

    match (
        target_shape.to_world_space(target_pos),
        other_shape.to_world_space(other_pos),
    ) {
        (Rect(a), Rect(b)) => a
            .overlaps(&b)
            .then(|| resolve_direction(a.corner(), b.corner())),

        (Circle(a), Circle(b)) => a
            .overlaps(&b)
            .then(|| resolve_direction(a.center, b.center)),

        (Rect(rect), Circle(circle)) => {
            let square = circle.bounding_square();
            rect.overlaps(&square)
                .then(|| resolve_direction(rect.corner(), square.corner()))
        }

        (Circle(circle), Rect(rect)) => {
            let square = circle.bounding_square();
            square
                .overlaps(&rect)
                .then(|| resolve_direction(square.corner(), rect.corner()))
        }
    }
}

/// Unit direction from `from` toward `to`
///
/// The z component is always 0. Coincident points give the zero vector.
pub fn resolve_direction(from: Vec2, to: Vec2) -> Vec3 {
    let delta = to - from;
    let length = delta.magnitude();
    if length == 0.0 {
        return Vec3::zeros();
    }
    Vec3::new(delta.x / length, delta.y / length, 0.0)
}
