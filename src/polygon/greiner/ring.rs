//! Circular doubly-linked vertex ring stored in an arena.

use std::ops::{Index, IndexMut};

use super::vertex::Vertex;
use crate::primitives::{Segment2, Vec2};
use num_traits::Float;

/// One polygon boundary during clipping.
///
/// Vertices live in a `Vec` and link to each other by index. The first
/// `sources` entries are the input points in order; crossing vertices are
/// appended behind them and spliced into the links. Following `next` from any
/// linked vertex returns to it, and `prev` is the exact inverse of `next`.
#[derive(Debug, Clone)]
pub(crate) struct Ring<F> {
    vertices: Vec<Vertex<F>>,
    first: usize,
    sources: usize,
}

impl<F: Float> Ring<F> {
    /// Builds a ring from a closed sequence of points.
    pub fn new(points: &[Vec2<F>]) -> Self {
        let n = points.len();
        let vertices = points
            .iter()
            .enumerate()
            .map(|(i, &p)| Vertex {
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
                ..Vertex::source(p)
            })
            .collect();

        Self {
            vertices,
            first: 0,
            sources: n,
        }
    }

    /// Returns the number of input points the ring was built from.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.sources
    }

    /// Returns the number of vertices ever stored, linked or not.
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if `idx` is one of the input points.
    #[inline]
    pub fn is_source(&self, idx: usize) -> bool {
        idx < self.sources
    }

    /// Returns the source vertex that closes source segment `i`.
    #[inline]
    pub fn source_end(&self, i: usize) -> usize {
        (i + 1) % self.sources
    }

    /// Returns source segment `i`, from input point `i` to the next input point.
    #[inline]
    pub fn segment(&self, i: usize) -> Segment2<F> {
        Segment2::new(
            self.vertices[i].point,
            self.vertices[self.source_end(i)].point,
        )
    }

    /// Inserts `vertex` on source segment `start`, keeping crossings ordered by alpha.
    ///
    /// Returns the arena index of the new vertex.
    pub fn insert(&mut self, start: usize, vertex: Vertex<F>) -> usize {
        let mut before = self.vertices[start].next;
        while !self.is_source(before) && self.vertices[before].alpha < vertex.alpha {
            before = self.vertices[before].next;
        }
        let after = self.vertices[before].prev;

        let idx = self.vertices.len();
        self.vertices.push(Vertex {
            next: before,
            prev: after,
            ..vertex
        });
        self.vertices[after].next = idx;
        self.vertices[before].prev = idx;
        idx
    }

    /// Splices a crossing vertex out of the ring. Its arena slot is kept.
    pub fn unlink(&mut self, idx: usize) {
        debug_assert!(!self.is_source(idx), "source vertices stay linked");
        let Vertex { next, prev, .. } = self.vertices[idx];
        self.vertices[prev].next = next;
        self.vertices[next].prev = prev;
    }

    /// Iterates over linked vertex indices in ring order, starting at the first point.
    pub fn indices(&self) -> Indices<'_, F> {
        Indices {
            ring: self,
            current: Some(self.first),
        }
    }

    /// Counts linked vertices matching `pred`.
    pub fn count(&self, pred: impl Fn(&Vertex<F>) -> bool) -> usize {
        self.indices().filter(|&i| pred(&self.vertices[i])).count()
    }

    /// Finds the first linked vertex in ring order matching `pred`.
    pub fn find(&self, pred: impl Fn(&Vertex<F>) -> bool) -> Option<usize> {
        self.indices().find(|&i| pred(&self.vertices[i]))
    }
}

impl<F> Index<usize> for Ring<F> {
    type Output = Vertex<F>;

    #[inline]
    fn index(&self, idx: usize) -> &Vertex<F> {
        &self.vertices[idx]
    }
}

impl<F> IndexMut<usize> for Ring<F> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Vertex<F> {
        &mut self.vertices[idx]
    }
}

/// Iterator over the linked vertices of a [`Ring`].
pub(crate) struct Indices<'a, F> {
    ring: &'a Ring<F>,
    current: Option<usize>,
}

impl<F> Iterator for Indices<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.current?;
        let next = self.ring.vertices[idx].next;
        self.current = (next != self.ring.first).then_some(next);
        Some(idx)
    }
}
