//! Augmented vertices used while clipping.

use crate::primitives::Vec2;
use num_traits::Float;
use std::fmt;

/// Which input polygon a ring was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The polygon being clipped.
    Subject,
    /// The polygon clipping the subject.
    Clipper,
}

impl Role {
    /// Returns the role of the opposite ring.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Role::Subject => Role::Clipper,
            Role::Clipper => Role::Subject,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Subject => f.write_str("subject"),
            Role::Clipper => f.write_str("clipper"),
        }
    }
}

/// Where a vertex sits relative to the other polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside the other polygon.
    In,
    /// Strictly outside the other polygon.
    Out,
    /// On the other polygon's boundary.
    On,
}

/// A ring vertex with the bookkeeping the clipper needs.
///
/// `next`, `prev` and `neighbor` are arena indices. `next`/`prev` index the
/// vertex's own ring, `neighbor` indexes the opposite ring.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<F> {
    pub point: Vec2<F>,
    /// Position along the source segment; 0 and 1 mean an existing vertex.
    pub alpha: F,
    pub intersect: bool,
    pub degenerate: bool,
    pub location: Location,
    pub entry: bool,
    pub neighbor: Option<usize>,
    pub remove: bool,
    pub checked: bool,
    pub next: usize,
    pub prev: usize,
}

impl<F: Float> Vertex<F> {
    /// Creates an unlinked vertex for an input polygon point.
    pub fn source(point: Vec2<F>) -> Self {
        Self {
            point,
            alpha: F::zero(),
            intersect: false,
            degenerate: false,
            location: Location::Out,
            entry: false,
            neighbor: None,
            remove: false,
            checked: false,
            next: 0,
            prev: 0,
        }
    }

    /// Creates a crossing vertex at `alpha` along its source segment.
    pub fn crossing(point: Vec2<F>, alpha: F) -> Self {
        Self {
            alpha,
            intersect: true,
            location: Location::On,
            ..Self::source(point)
        }
    }
}
