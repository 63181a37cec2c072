//! Greiner-Hormann clipping internals.
//!
//! The clip runs as a sequence of stages over two vertex rings:
//!
//! 1. both outer boundaries are normalized to clockwise winding;
//! 2. [`scan`] pairs up every segment hit and classifies input points;
//! 3. degenerate touches are promoted to intersection vertices;
//! 4. [`quit`] answers directly when nothing crosses;
//! 5. [`label`] marks each intersection as entry or exit, suppressing bounces;
//! 6. [`walk`] traces the output boundaries;
//! 7. [`walk::assign_holes`] groups holes with their outer boundary.
//!
//! All of this state is scratch memory owned by a single clip call.

pub(crate) mod label;
pub(crate) mod quit;
pub(crate) mod ring;
pub(crate) mod scan;
pub(crate) mod vertex;
pub(crate) mod walk;

use self::ring::Ring;
use self::vertex::Role;
use crate::polygon::Polygon;
use num_traits::Float;

/// The two rings of one clip call.
#[derive(Debug, Clone)]
pub(crate) struct Overlay<F> {
    pub subject: Ring<F>,
    pub clipper: Ring<F>,
}

impl<F: Float> Overlay<F> {
    /// Builds rings from the outer boundaries of both (already normalized) inputs.
    pub fn new(subject: &Polygon<F>, clipper: &Polygon<F>) -> Self {
        Self {
            subject: Ring::new(&subject.outer),
            clipper: Ring::new(&clipper.outer),
        }
    }

    #[inline]
    pub fn ring(&self, role: Role) -> &Ring<F> {
        match role {
            Role::Subject => &self.subject,
            Role::Clipper => &self.clipper,
        }
    }

    #[inline]
    pub fn ring_mut(&mut self, role: Role) -> &mut Ring<F> {
        match role {
            Role::Subject => &mut self.subject,
            Role::Clipper => &mut self.clipper,
        }
    }

    /// Number of intersection vertices still live on the subject ring.
    ///
    /// Pairs are symmetric, so this equals the clipper's count.
    pub fn intersections(&self) -> usize {
        self.subject.count(|v| v.intersect)
    }
}
