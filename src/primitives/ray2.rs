//! 2D ray type.

use super::{Segment2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use ringclip::primitives::{Ray2, Segment2, Vec2};
///
/// let ray: Ray2<f64> = Ray2::new(Vec2::zero(), Vec2::new(1.0, 0.0));
/// let segment = Segment2::from_coords(5.0, -1.0, 5.0, 1.0);
///
/// let hit = ray.intersect(&segment);
/// assert_eq!(hit, Some(Vec2::new(5.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Vec2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Vec2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Vec2<F> {
        self.origin + self.direction * t
    }

    /// Intersects this ray with a line segment.
    ///
    /// Returns `Some((point, t_ray, t_segment))` if they intersect, where
    /// `t_ray >= 0` and `t_segment` is in `[0, 1]`. A ray parallel to the
    /// segment (determinant exactly zero) never intersects it.
    pub fn intersect_params(&self, segment: &Segment2<F>) -> Option<(Vec2<F>, F, F)> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross == F::zero() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        if t_ray >= F::zero() && t_seg >= F::zero() && t_seg <= F::one() {
            Some((self.point_at(t_ray), t_ray, t_seg))
        } else {
            None
        }
    }

    /// Returns the point where this ray hits `segment`, if any.
    #[inline]
    pub fn intersect(&self, segment: &Segment2<F>) -> Option<Vec2<F>> {
        self.intersect_params(segment).map(|(point, _, _)| point)
    }

    /// Casts the ray against many segments and returns the hit nearest to the origin.
    pub fn cast<'a, I>(&self, segments: I) -> Option<Vec2<F>>
    where
        F: 'a,
        I: IntoIterator<Item = &'a Segment2<F>>,
    {
        segments
            .into_iter()
            .filter_map(|segment| self.intersect(segment))
            .map(|hit| (self.origin.distance_squared(hit), hit))
            .fold(None, |nearest: Option<(F, Vec2<F>)>, (dist, hit)| match nearest {
                Some((best, _)) if best <= dist => nearest,
                _ => Some((dist, hit)),
            })
            .map(|(_, hit)| hit)
    }
}
