//! Collision response helpers
//!
//! A hit's direction decides which velocity axis caused it: the dominant
//! component wins, and an exact tie counts as a corner hit on both axes.
//! Ties are compared exactly, so a perfectly diagonal approach reflects
//! both components.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::collision_system::Hit;
use crate::foundation::math::{Vec2, Vec3};

/// Axis a collision is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionAxis {
    /// Side hit, reflect x
    Horizontal,
    /// Top or bottom hit, reflect y
    Vertical,
    /// Corner hit, reflect both
    Diagonal,
}

impl CollisionAxis {
    /// Classify a collision direction
    ///
    /// The zero direction (coincident reference points) classifies as
    /// [`CollisionAxis::Diagonal`].
    pub fn from_direction(direction: &Vec3) -> Self {
        let x = direction.x.abs();
        let y = direction.y.abs();
        if x > y {
            Self::Horizontal
        } else if y > x {
            Self::Vertical
        } else {
            Self::Diagonal
        }
    }

    /// Velocity axes to reflect for this classification
    pub const fn reflect_axes(self) -> ReflectAxes {
        match self {
            Self::Horizontal => ReflectAxes::X,
            Self::Vertical => ReflectAxes::Y,
            Self::Diagonal => ReflectAxes::X.union(ReflectAxes::Y),
        }
    }
}

bitflags! {
    /// Velocity components to reflect after a collision
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReflectAxes: u8 {
        /// Reflect the x component
        const X = 1 << 0;
        /// Reflect the y component
        const Y = 1 << 1;
    }
}

/// How a frame's hit list is folded into a single response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Only the last hit counts (the behavior older game loops relied on)
    LastWins,
    /// Only the first hit counts
    FirstWins,
    /// Every hit contributes its axes
    #[default]
    All,
}

impl HitPolicy {
    /// Axes to reflect for a list of directions
    pub fn resolve_directions<'d, I>(self, directions: I) -> ReflectAxes
    where
        I: IntoIterator<Item = &'d Vec3>,
    {
        let mut axes = directions
            .into_iter()
            .map(|dir| CollisionAxis::from_direction(dir).reflect_axes());

        match self {
            Self::LastWins => axes.last().unwrap_or_else(ReflectAxes::empty),
            Self::FirstWins => axes.next().unwrap_or_else(ReflectAxes::empty),
            Self::All => axes.fold(ReflectAxes::empty(), |acc, a| acc | a),
        }
    }

    /// Axes to reflect for a hit list returned by
    /// [`collide`](super::collision_system::collide)
    pub fn resolve<C: ?Sized>(self, hits: &[Hit<'_, C>]) -> ReflectAxes {
        self.resolve_directions(hits.iter().map(|hit| &hit.direction))
    }
}

/// Position and velocity of a moving entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Current position (z is draw depth and is never integrated)
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec2,
}

impl Motion {
    /// Create a motion state
    pub const fn new(position: Vec3, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Advance the position by `velocity * dt` and return the previous position
    pub fn step(&mut self, dt: f32) -> Vec3 {
        let previous = self.position;
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        previous
    }

    /// Reflect the given axes
    ///
    /// Each reflected axis has its velocity negated and its position reverted
    /// to `previous`. Other axes keep the stepped value.
    pub fn bounce(&mut self, previous: &Vec3, axes: ReflectAxes) {
        if axes.contains(ReflectAxes::X) {
            self.velocity.x = -self.velocity.x;
            self.position.x = previous.x;
        }
        if axes.contains(ReflectAxes::Y) {
            self.velocity.y = -self.velocity.y;
            self.position.y = previous.y;
        }
    }
}
