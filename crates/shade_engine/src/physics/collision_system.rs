//! Per-entity collision queries
//!
//! The query is stateless: every frame the game loop moves its entities and
//! then asks which candidates the moved entity now overlaps. Nothing is
//! retained between calls.

use std::fmt;

use crate::foundation::math::Vec3;
use crate::physics::collision::{self, Shape};

/// Anything that occupies space and can be tested for collisions
pub trait Collider {
    /// World position (z is draw depth and is ignored by collision tests)
    fn position(&self) -> Vec3;

    /// Collision shape, relative to [`Collider::position`]
    fn shape(&self) -> Shape;

    /// Address [`collide`] uses to recognize the target in its own candidate list
    ///
    /// Zero-sized colliders share one address, so they return `None` and are
    /// never skipped. Callers with such types exclude the target themselves.
    fn address(&self) -> Option<*const ()> {
        (std::mem::size_of_val(self) != 0).then(|| (self as *const Self).cast::<()>())
    }
}

impl<T: Collider + ?Sized> Collider for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn address(&self) -> Option<*const ()> {
        (**self).address()
    }
}

impl<T: Collider + ?Sized> Collider for Box<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
    fn address(&self) -> Option<*const ()> {
        (**self).address()
    }
}

/// A candidate the target overlaps, with the direction toward it
pub struct Hit<'a, C: ?Sized> {
    /// The candidate that was hit
    pub entity: &'a C,
    /// Unit direction from the target toward `entity` (z is always 0)
    pub direction: Vec3,
}

impl<C: ?Sized> Clone for Hit<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Hit<'_, C> {}

impl<C: ?Sized> fmt::Debug for Hit<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Test `target` against every candidate and return all hits
///
/// A candidate that is the target itself (same [`Collider::address`]) is
/// skipped, so a loop may pass its whole entity list. References and boxes
/// are looked through, so `&Box<dyn Collider>` and `&dyn Collider` views of
/// one entity match. Hits come back in candidate order.
pub fn collide<'a, T, C, I>(target: &T, candidates: I) -> Vec<Hit<'a, C>>
where
    T: Collider + ?Sized,
    C: Collider + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let target_shape = target.shape();
    let target_pos = target.position();
    let target_addr = target.address();

    let mut hits = Vec::new();
    for candidate in candidates {
        if target_addr.is_some() && target_addr == candidate.address() {
            continue;
        }

        let shape = candidate.shape();
        let position = candidate.position();
        if let Some(direction) = collision::detect(&target_shape, &target_pos, &shape, &position) {
            log::trace!(
                "{} at {:?} hit {} at {:?}, direction {:?}",
                target_shape.kind(),
                target_pos,
                shape.kind(),
                position,
                direction
            );
            hits.push(Hit {
                entity: candidate,
                direction,
            });
        }
    }

    hits
}
