//! Collision shape descriptors
//!
//! Shapes are stored as offsets relative to the owning entity's position and
//! are placed in world space only while a test runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::primitives::{WorldCircle, WorldRect};
use crate::foundation::math::Vec3;

/// Errors raised when building a shape from raw tagged data
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// The data slice has the wrong number of values for the shape kind
    #[error("malformed {kind} shape: expected {expected} values, got {actual}")]
    MalformedShape {
        /// Kind that was requested
        kind: ShapeKind,
        /// Number of values that kind needs
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// The shape tag is not one the engine knows
    #[error("unknown shape tag: {0:?}")]
    UnknownShapeTag(String),
}

/// Shape kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    Rect,
    /// Circle
    Circle,
}

impl ShapeKind {
    /// Number of values a shape of this kind is described by
    pub const fn data_len(self) -> usize {
        match self {
            Self::Rect => 4,
            Self::Circle => 3,
        }
    }

    /// Parse the lowercase tag used in level data (`"rect"` or `"circle"`)
    pub fn from_tag(tag: &str) -> Result<Self, CollisionError> {
        match tag {
            "rect" => Ok(Self::Rect),
            "circle" => Ok(Self::Circle),
            other => Err(CollisionError::UnknownShapeTag(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect => f.write_str("rect"),
            Self::Circle => f.write_str("circle"),
        }
    }
}

/// Collision shape, offset-relative to an entity position
///
/// For rects the four fields are offsets from the position, not a
/// width/height pair: the world span starts at `position + (left, bottom)`
/// and extends `|left| + |right|` wide and `|bottom| + |top|` high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect {
        /// Horizontal offset of the left edge
        left: f32,
        /// Horizontal extent past the left edge
        right: f32,
        /// Vertical offset of the bottom edge
        bottom: f32,
        /// Vertical extent past the bottom edge
        top: f32,
    },
    /// Circle
    Circle {
        /// Horizontal offset of the center
        center_x: f32,
        /// Vertical offset of the center
        center_y: f32,
        /// Radius
        radius: f32,
    },
}

impl Shape {
    /// Creates a rectangle shape from its four offsets
    pub const fn rect(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self::Rect { left, right, bottom, top }
    }

    /// Creates a circle shape from a center offset and radius
    pub const fn circle(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::Circle { center_x, center_y, radius }
    }

    /// Builds a shape from a kind and its flat data
    ///
    /// Rect data is `[left, right, bottom, top]`, circle data is
    /// `[center_x, center_y, radius]`.
    pub fn from_raw(kind: ShapeKind, data: &[f32]) -> Result<Self, CollisionError> {
        let expected = kind.data_len();
        if data.len() != expected {
            return Err(CollisionError::MalformedShape {
                kind,
                expected,
                actual: data.len(),
            });
        }

        Ok(match kind {
            ShapeKind::Rect => Self::rect(data[0], data[1], data[2], data[3]),
            ShapeKind::Circle => Self::circle(data[0], data[1], data[2]),
        })
    }

    /// Builds a shape from a string tag and its flat data
    pub fn from_tagged(tag: &str, data: &[f32]) -> Result<Self, CollisionError> {
        Self::from_raw(ShapeKind::from_tag(tag)?, data)
    }

    /// Kind tag of this shape
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect { .. } => ShapeKind::Rect,
            Self::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Flat data in the same layout [`Shape::from_raw`] accepts
    pub fn data(&self) -> Vec<f32> {
        match *self {
            Self::Rect { left, right, bottom, top } => vec![left, right, bottom, top],
            Self::Circle { center_x, center_y, radius } => vec![center_x, center_y, radius],
        }
    }

    /// Place this shape in world space at `position`
    pub fn to_world_space(&self, position: &Vec3) -> WorldSpaceShape {
        match *self {
            Self::Rect { left, right, bottom, top } => WorldSpaceShape::Rect(WorldRect::new(
                position.x + left,
                position.y + bottom,
                left.abs() + right.abs(),
                bottom.abs() + top.abs(),
            )),
            Self::Circle { center_x, center_y, radius } => WorldSpaceShape::Circle(WorldCircle::new(
                position.x + center_x,
                position.y + center_y,
                radius,
            )),
        }
    }
}

/// World-space shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// World-space rectangle
    Rect(WorldRect),
    /// World-space circle
    Circle(WorldCircle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rect() {
        let shape = Shape::from_raw(ShapeKind::Rect, &[5.0, 10.0, 15.0, 20.0]).unwrap();
        assert_eq!(shape, Shape::rect(5.0, 10.0, 15.0, 20.0));
        assert_eq!(shape.kind(), ShapeKind::Rect);
        assert_eq!(shape.data(), vec![5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_from_raw_circle() {
        let shape = Shape::from_raw(ShapeKind::Circle, &[10.0, 15.0, 20.0]).unwrap();
        assert_eq!(shape, Shape::circle(10.0, 15.0, 20.0));
        assert_eq!(shape.data().len(), 3);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = Shape::from_raw(ShapeKind::Circle, &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(
            err,
            CollisionError::MalformedShape {
                kind: ShapeKind::Circle,
                expected: 3,
                actual: 4,
            }
        );
        assert!(Shape::from_raw(ShapeKind::Rect, &[]).is_err());
    }

    #[test]
    fn test_from_tagged() {
        assert_eq!(
            Shape::from_tagged("rect", &[0.0, 1.0, 0.0, 1.0]).unwrap().kind(),
            ShapeKind::Rect
        );
        assert_eq!(
            Shape::from_tagged("hexagon", &[0.0]).unwrap_err(),
            CollisionError::UnknownShapeTag("hexagon".to_string())
        );
    }

    #[test]
    fn test_rect_world_span_uses_absolute_offsets() {
        let shape = Shape::rect(-4.0, 6.0, -2.0, 3.0);
        match shape.to_world_space(&Vec3::new(100.0, 50.0, 7.0)) {
            WorldSpaceShape::Rect(rect) => {
                assert_eq!(rect.left, 96.0);
                assert_eq!(rect.bottom, 48.0);
                assert_eq!(rect.width, 10.0);
                assert_eq!(rect.height, 5.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_ron_round_trip() {
        let shape = Shape::circle(16.0, 16.0, 16.0);
        let text = ron::to_string(&shape).unwrap();
        let back: Shape = ron::from_str(&text).unwrap();
        assert_eq!(shape, back);
    }
}
