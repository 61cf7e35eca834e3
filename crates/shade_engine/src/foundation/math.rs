//! Math utilities and types
//!
//! The engine works in 2D, but positions carry a z component for draw
//! ordering, so most APIs take [`Vec3`] and ignore z.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type (x, y, draw depth)
pub type Vec3 = Vector3<f32>;
