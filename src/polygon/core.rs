//! Core polygon types and basic operations.

use crate::error::ClipError;
use crate::primitives::{Ray2, Segment2, Vec2};
use num_traits::Float;

/// A simple polygon: an outer boundary plus zero or more holes.
///
/// Every ring is implicitly closed (the last point connects to the first).
/// The clipper expects clockwise outer boundaries and normalizes its inputs
/// itself; see [`Polygon::to_clockwise`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The outer boundary.
    pub outer: Vec<Vec2<F>>,
    /// Holes inside the outer boundary.
    pub inners: Vec<Vec<Vec2<F>>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon without holes.
    #[inline]
    pub fn new(outer: Vec<Vec2<F>>) -> Self {
        Self {
            outer,
            inners: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    #[inline]
    pub fn with_inners(outer: Vec<Vec2<F>>, inners: Vec<Vec<Vec2<F>>>) -> Self {
        Self { outer, inners }
    }

    /// Packs a clip result group `[outer, hole, hole, ...]` into one polygon.
    ///
    /// Each hole contributes its outer ring to `inners`. Returns `None` for an
    /// empty group.
    pub fn from_group(group: Vec<Polygon<F>>) -> Option<Self> {
        let mut rings = group.into_iter();
        let outer = rings.next()?;
        Some(Self {
            outer: outer.outer,
            inners: rings.map(|hole| hole.outer).collect(),
        })
    }

    /// Returns the number of points on the outer boundary.
    #[inline]
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if the outer boundary has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Checks that the outer boundary can be treated as a closed shape.
    pub fn validate(&self) -> Result<(), ClipError> {
        if self.outer.len() < 3 {
            return Err(ClipError::InvalidPolygon {
                points: self.outer.len(),
            });
        }
        if let Some(index) = self.outer.iter().position(|p| !p.is_finite()) {
            return Err(ClipError::NonFiniteCoordinate { index });
        }
        Ok(())
    }

    /// Returns the signed area of the outer boundary (shoelace formula).
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.outer)
    }

    /// Returns the absolute area enclosed by the outer boundary.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the outer area minus the area of every hole.
    pub fn net_area(&self) -> F {
        self.inners
            .iter()
            .fold(self.area(), |area, hole| area - polygon_signed_area(hole).abs())
    }

    /// Returns true if the outer boundary winds clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < F::zero()
    }

    /// Returns a copy with a clockwise outer boundary and counter-clockwise holes.
    pub fn to_clockwise(&self) -> Self {
        let mut outer = self.outer.clone();
        if polygon_signed_area(&outer) > F::zero() {
            outer.reverse();
        }
        let inners = self
            .inners
            .iter()
            .map(|hole| {
                let mut hole = hole.clone();
                if polygon_signed_area(&hole) < F::zero() {
                    hole.reverse();
                }
                hole
            })
            .collect();
        Self { outer, inners }
    }

    /// Returns a polygon with every ring's winding reversed.
    pub fn reversed(&self) -> Self {
        let reverse = |ring: &Vec<Vec2<F>>| ring.iter().rev().copied().collect::<Vec<_>>();
        Self {
            outer: reverse(&self.outer),
            inners: self.inners.iter().map(reverse).collect(),
        }
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Returns a copy rotated counter-clockwise by `angle` radians about `pivot`.
    pub fn rotated(&self, angle: F, pivot: Vec2<F>) -> Self {
        self.map_points(|p| (p - pivot).rotate(angle) + pivot)
    }

    fn map_points(&self, f: impl Fn(Vec2<F>) -> Vec2<F>) -> Self {
        Self {
            outer: self.outer.iter().map(|&p| f(p)).collect(),
            inners: self
                .inners
                .iter()
                .map(|hole| hole.iter().map(|&p| f(p)).collect())
                .collect(),
        }
    }

    /// Returns the closed edge list of the outer boundary.
    pub fn outer_segments(&self) -> Vec<Segment2<F>> {
        ring_segments(&self.outer).collect()
    }

    /// Returns the closed edge lists of the outer boundary followed by every hole.
    pub fn segments(&self) -> Vec<Segment2<F>> {
        let mut segments = self.outer_segments();
        for hole in &self.inners {
            segments.extend(ring_segments(hole));
        }
        segments
    }

    /// Flattens the polygon into interleaved `[x0, y0, x1, y1, ...]` coordinates.
    ///
    /// The outer boundary comes first, then each hole. The second vector holds
    /// the vertex index at which each hole starts.
    pub fn linearize(&self) -> (Vec<F>, Vec<usize>) {
        let total = self.outer.len() + self.inners.iter().map(Vec::len).sum::<usize>();
        let mut coords = Vec::with_capacity(total * 2);
        let mut hole_starts = Vec::with_capacity(self.inners.len());

        for p in &self.outer {
            coords.push(p.x);
            coords.push(p.y);
        }
        for hole in &self.inners {
            hole_starts.push(coords.len() / 2);
            for p in hole {
                coords.push(p.x);
                coords.push(p.y);
            }
        }

        (coords, hole_starts)
    }

    /// Tests if a point is inside the polygon using the even-odd rule.
    ///
    /// A ray is fired from `point` along +X and the boundary crossings are
    /// counted; holes are part of the boundary, so points inside a hole are
    /// outside the polygon. An edge counts only when it straddles the ray's
    /// line half-open (one endpoint strictly above), so a ray passing through
    /// a vertex is counted once. Points on the boundary may return either value.
    pub fn contains_vector(&self, point: Vec2<F>) -> bool {
        let ray = Ray2::new(point, Vec2::unit_x());
        let crossings = self
            .segments()
            .iter()
            .filter(|s| (s.start.y > point.y) != (s.end.y > point.y))
            .filter(|s| ray.intersect(s).is_some())
            .count();
        crossings % 2 == 1
    }

    /// Returns the boundary point nearest to the ray's origin that the ray hits.
    pub fn cast_ray(&self, ray: &Ray2<F>) -> Option<Vec2<F>> {
        ray.cast(&self.segments())
    }
}

/// Returns the closed edge sequence of a ring.
fn ring_segments<F: Float>(
    ring: &[Vec2<F>],
) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = ring.len();
    (0..n).map(move |i| Segment2::new(ring[i], ring[(i + 1) % n]))
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Vec2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].cross(vertices[j])
    });

    twice / (F::one() + F::one())
}

/// Computes the absolute area of a ring.
pub fn polygon_area<F: Float>(vertices: &[Vec2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}
