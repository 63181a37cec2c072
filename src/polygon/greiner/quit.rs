//! Results for inputs whose boundaries never cross.

use super::ring::Ring;
use super::vertex::Location;
use super::Overlay;
use crate::polygon::{BooleanOp, Polygon};
use num_traits::Float;

/// Decides whether the polygon behind `ring` lies inside `other`.
///
/// The first input point that is not on the other boundary decides. When
/// every point touches the other boundary, edge midpoints are sampled instead;
/// if those all lie on the other boundary too the rings coincide and count as
/// contained.
fn lies_inside<F: Float>(ring: &Ring<F>, own: &Polygon<F>, other: &Polygon<F>) -> bool {
    if let Some(idx) = (0..ring.source_len()).find(|&i| ring[i].location != Location::On) {
        return ring[idx].location == Location::In;
    }

    let half = F::one() / (F::one() + F::one());
    let other_edges = other.outer_segments();
    own.outer_segments()
        .into_iter()
        .map(|edge| edge.point_at(half))
        .find(|&mid| !other_edges.iter().any(|e| e.contains_point(mid)))
        .map_or(true, |mid| other.contains_vector(mid))
}

fn hole<F: Float>(polygon: &Polygon<F>) -> Polygon<F> {
    polygon.reversed()
}

/// Builds the result without walking when no intersection vertex survives.
///
/// `subject` and `clipper` are the normalized (clockwise, hole-free) inputs.
pub(crate) fn resolve<F: Float>(
    overlay: &Overlay<F>,
    subject: &Polygon<F>,
    clipper: &Polygon<F>,
    op: BooleanOp,
) -> Vec<Vec<Polygon<F>>> {
    let subject_inside = lies_inside(&overlay.subject, subject, clipper);
    let clipper_inside = lies_inside(&overlay.clipper, clipper, subject);
    log::debug!(
        "no crossings: subject inside clipper = {}, clipper inside subject = {}",
        subject_inside,
        clipper_inside
    );

    let (s, c) = (subject.clone(), clipper.clone());
    match op {
        BooleanOp::Intersection if subject_inside => vec![vec![s]],
        BooleanOp::Intersection if clipper_inside => vec![vec![c]],
        BooleanOp::Intersection => Vec::new(),

        BooleanOp::Union if subject_inside => vec![vec![c]],
        BooleanOp::Union if clipper_inside => vec![vec![s]],
        BooleanOp::Union => vec![vec![s], vec![c]],

        BooleanOp::Difference if subject_inside => Vec::new(),
        BooleanOp::Difference if clipper_inside => vec![vec![s, hole(&c)]],
        BooleanOp::Difference => vec![vec![s]],

        BooleanOp::ReverseDifference if clipper_inside => Vec::new(),
        BooleanOp::ReverseDifference if subject_inside => vec![vec![c, hole(&s)]],
        BooleanOp::ReverseDifference => vec![vec![c]],
    }
}
