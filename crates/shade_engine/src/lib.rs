//! # Shade Engine
//!
//! Collision detection and frame plumbing for small 2D sprite games.
//!
//! ## Features
//!
//! - **Shapes**: Offset-relative rects and circles attached to entities
//! - **Collision Queries**: Stateless per-frame overlap tests with hit directions
//! - **Collision Response**: Axis classification and bounce helpers
//! - **Input Buffering**: Bounded key-event queue owned by the windowing layer
//! - **Frame Timing**: Millisecond frame clock with a frames-per-second limiter
//! - **Configuration**: TOML/RON engine settings
//!
//! ## Quick Start
//!
//! ```rust
//! use shade_engine::prelude::*;
//!
//! struct Ball {
//!     motion: Motion,
//! }
//!
//! impl Collider for Ball {
//!     fn position(&self) -> Vec3 {
//!         self.motion.position
//!     }
//!
//!     fn shape(&self) -> Shape {
//!         Shape::circle(0.0, 0.0, 16.0)
//!     }
//! }
//!
//! struct Wall;
//!
//! impl Collider for Wall {
//!     fn position(&self) -> Vec3 {
//!         Vec3::new(116.0, 84.0, 0.0)
//!     }
//!
//!     fn shape(&self) -> Shape {
//!         Shape::rect(0.0, 16.0, 0.0, 32.0)
//!     }
//! }
//!
//! let walls = [Wall];
//! let mut ball = Ball {
//!     motion: Motion::new(Vec3::new(100.0, 100.0, 1.0), Vec2::new(50.0, 0.0)),
//! };
//!
//! let previous = ball.motion.step(0.1);
//! let axes = HitPolicy::All.resolve(&collide(&ball, &walls));
//! ball.motion.bounce(&previous, axes);
//!
//! assert_eq!(ball.motion.velocity.x, -50.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod events;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, EngineConfig, EventConfig, PhysicsConfig},
        events::{EventError, EventQueue, KeyAction, KeyCode, KeyEvent, Modifiers},
        foundation::math::{Vec2, Vec3},
        foundation::time::Clock,
        physics::{
            collide, detect, resolve_direction, test_overlap, Collider, CollisionAxis,
            CollisionError, Hit, HitPolicy, Motion, ReflectAxes, Shape, ShapeKind,
        },
    };
}
