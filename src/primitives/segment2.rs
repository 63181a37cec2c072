//! 2D line segment type.

use super::Vec2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Vec2<F>,
    pub end: Vec2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Vec2<F>, end: Vec2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// `t = 0` and `t = 1` return the stored endpoints exactly, so callers
    /// comparing against existing vertices see bit-identical coordinates.
    #[inline]
    pub fn point_at(self, t: F) -> Vec2<F> {
        if t == F::zero() {
            self.start
        } else if t == F::one() {
            self.end
        } else {
            self.start.lerp(self.end, t)
        }
    }

    /// Returns `true` if `p` lies exactly on the segment (endpoints included).
    ///
    /// No tolerance is applied: the point must be exactly collinear and
    /// within the segment's extent.
    pub fn contains_point(self, p: Vec2<F>) -> bool {
        let d = self.direction();
        let offset = p - self.start;
        if d.cross(offset) != F::zero() {
            return false;
        }
        let along = offset.dot(d);
        along >= F::zero() && along <= d.length_squared()
    }

    /// Intersects two segments.
    ///
    /// Returns `Some((point, t, u))` where `t` is the parameter along `self` and
    /// `u` the parameter along `other`, both in `[0, 1]`. Parallel and collinear
    /// segments (determinant exactly zero) report no intersection.
    pub fn intersect_params(self, other: Self) -> Option<(Vec2<F>, F, F)> {
        let r = self.direction();
        let s = other.direction();
        let denom = r.cross(s);

        if denom == F::zero() {
            return None;
        }

        let delta = other.start - self.start;
        let t = delta.cross(s) / denom;
        let u = delta.cross(r) / denom;

        let unit = |v: F| v >= F::zero() && v <= F::one();
        if unit(t) && unit(u) {
            Some((self.point_at(t), t, u))
        } else {
            None
        }
    }

    /// Returns the intersection point of two segments, if any.
    #[inline]
    pub fn intersect(self, other: Self) -> Option<Vec2<F>> {
        self.intersect_params(other).map(|(point, _, _)| point)
    }
}
