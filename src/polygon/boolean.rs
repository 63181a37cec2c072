//! Polygon boolean operations.
//!
//! Provides intersection, union, difference and XOR for simple polygons on
//! top of a Greiner-Hormann clipper. Every operation returns a list of groups
//! `[outer, hole, hole, ...]`; see [`Polygon::from_group`] to pack a group
//! into a single polygon.

use crate::error::ClipError;
use crate::polygon::greiner::vertex::Role;
use crate::polygon::greiner::{label, quit, scan, walk, Overlay};
use crate::polygon::Polygon;
use num_traits::Float;

/// The boolean operation performed by a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Area covered by both polygons.
    Intersection,
    /// Area covered by either polygon.
    Union,
    /// Area of the subject not covered by the clipper.
    Difference,
    /// Area of the clipper not covered by the subject.
    ReverseDifference,
}

impl BooleanOp {
    /// Selects an operation from the pair of walk direction flags.
    ///
    /// | subject_forward | clipper_forward | operation |
    /// |---|---|---|
    /// | true | true | `Intersection` |
    /// | true | false | `Difference` |
    /// | false | true | `ReverseDifference` |
    /// | false | false | `Union` |
    pub fn from_flags(subject_forward: bool, clipper_forward: bool) -> Self {
        match (subject_forward, clipper_forward) {
            (true, true) => BooleanOp::Intersection,
            (true, false) => BooleanOp::Difference,
            (false, true) => BooleanOp::ReverseDifference,
            (false, false) => BooleanOp::Union,
        }
    }

    /// Returns `(subject_forward, clipper_forward)` for this operation.
    pub fn flags(self) -> (bool, bool) {
        match self {
            BooleanOp::Intersection => (true, true),
            BooleanOp::Difference => (true, false),
            BooleanOp::ReverseDifference => (false, true),
            BooleanOp::Union => (false, false),
        }
    }

    /// Whether the output follows the part of `role`'s boundary that lies
    /// inside the other polygon.
    pub(crate) fn keeps_inside(self, role: Role) -> bool {
        let (subject_forward, clipper_forward) = self.flags();
        match role {
            Role::Subject => clipper_forward,
            Role::Clipper => subject_forward,
        }
    }
}

/// Clips `subject` against `clipper` with the operation selected by the two
/// direction flags (see [`BooleanOp::from_flags`]).
///
/// Only the outer boundaries of the inputs take part; input holes are ignored.
///
/// # Limitations
///
/// Edges that overlap along a shared line are not supported. Parallel edges
/// never produce intersection vertices, so inputs sharing part of an edge can
/// yield a result that is plainly wrong, such as a union smaller than either
/// input. Callers must keep such inputs apart, for example by nudging one of
/// them.
///
/// # Errors
///
/// Returns [`ClipError::InvalidPolygon`] or [`ClipError::NonFiniteCoordinate`]
/// for malformed input, and [`ClipError::UnclassifiablePairing`] or
/// [`ClipError::UnclosedBoundary`] when the boundaries cannot be traced.
pub fn clip<F: Float>(
    subject: &Polygon<F>,
    clipper: &Polygon<F>,
    subject_forward: bool,
    clipper_forward: bool,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    clip_with(
        subject,
        clipper,
        BooleanOp::from_flags(subject_forward, clipper_forward),
    )
}

/// Clips `subject` against `clipper` with an explicit [`BooleanOp`].
///
/// Output outer boundaries wind clockwise and holes counter-clockwise. The
/// limitations of [`clip`] apply: inputs must not share collinear edges.
///
/// # Example
///
/// ```
/// use ringclip::polygon::{clip_with, BooleanOp, Polygon};
/// use ringclip::Vec2;
///
/// let a: Polygon<f64> = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(2.0, 0.0),
///     Vec2::new(2.0, 2.0),
///     Vec2::new(0.0, 2.0),
/// ]);
/// let b = a.translated(Vec2::new(1.0, 1.0));
///
/// let groups = clip_with(&a, &b, BooleanOp::Intersection).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert!((groups[0][0].area() - 1.0).abs() < 1e-12);
/// ```
pub fn clip_with<F: Float>(
    subject: &Polygon<F>,
    clipper: &Polygon<F>,
    op: BooleanOp,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    subject.validate()?;
    clipper.validate()?;
    log::debug!(
        "clipping {} subject points against {} clipper points with {:?}",
        subject.len(),
        clipper.len(),
        op
    );

    let subject = Polygon::new(subject.outer.clone()).to_clockwise();
    let clipper = Polygon::new(clipper.outer.clone()).to_clockwise();

    let mut overlay = Overlay::new(&subject, &clipper);
    scan::find_intersections(&mut overlay);
    scan::classify(&mut overlay, &subject, &clipper);
    scan::propagate_degenerate(&mut overlay);
    if overlay.intersections() == 0 {
        return Ok(quit::resolve(&overlay, &subject, &clipper, op));
    }

    label::label(&mut overlay, &subject, &clipper)?;
    if overlay.intersections() == 0 {
        return Ok(quit::resolve(&overlay, &subject, &clipper, op));
    }

    let boundaries = walk::walk(&mut overlay, op)?;
    Ok(walk::assign_holes(boundaries))
}

/// Computes the intersection of two polygons.
///
/// Returns no groups when the polygons do not overlap.
///
/// # Example
///
/// ```
/// use ringclip::polygon::{polygon_intersection, Polygon};
/// use ringclip::Vec2;
///
/// let outer: Polygon<f64> = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(4.0, 0.0),
///     Vec2::new(4.0, 4.0),
///     Vec2::new(0.0, 4.0),
/// ]);
/// let inner = Polygon::new(vec![
///     Vec2::new(1.0, 1.0),
///     Vec2::new(2.0, 1.0),
///     Vec2::new(2.0, 2.0),
///     Vec2::new(1.0, 2.0),
/// ]);
///
/// let result = polygon_intersection(&outer, &inner).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!((result[0][0].area() - 1.0).abs() < 1e-12);
/// ```
pub fn polygon_intersection<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    clip_with(a, b, BooleanOp::Intersection)
}

/// Computes the union of two polygons.
///
/// Disjoint inputs come back as two separate groups.
pub fn polygon_union<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    clip_with(a, b, BooleanOp::Union)
}

/// Computes `a` minus `b`.
///
/// When `b` lies strictly inside `a` the single result group carries `b` as a
/// hole.
pub fn polygon_difference<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    clip_with(a, b, BooleanOp::Difference)
}

/// Computes the symmetric difference: the groups of `a - b` followed by the
/// groups of `b - a`.
pub fn polygon_xor<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
) -> Result<Vec<Vec<Polygon<F>>>, ClipError> {
    let mut groups = clip_with(a, b, BooleanOp::Difference)?;
    groups.extend(clip_with(a, b, BooleanOp::ReverseDifference)?);
    Ok(groups)
}
