//! Physics module for collision detection and response
//!
//! Provides narrow-phase overlap tests for rects and circles, a stateless
//! per-entity collision query, and the bounce helpers game loops use to
//! react to hits.

pub mod collision;
pub mod collision_system;
pub mod resolution;

#[cfg(test)]
mod tests;

pub use collision::{
    detect,
    resolve_direction,
    test_overlap,
    CollisionError,
    Shape,
    ShapeKind,
};
pub use collision_system::{collide, Collider, Hit};
pub use resolution::{CollisionAxis, HitPolicy, Motion, ReflectAxes};
