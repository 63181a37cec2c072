//! Intersection scan, vertex classification and degenerate propagation.

use super::ring::Ring;
use super::vertex::{Location, Role, Vertex};
use super::Overlay;
use crate::polygon::Polygon;
use crate::primitives::{Segment2, Vec2};
use num_traits::Float;

/// Counts gathered while scanning for segment hits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanStats {
    /// Hits strictly inside both segments.
    pub crossings: usize,
    /// Hits landing on an existing vertex of at least one ring.
    pub touches: usize,
    /// Hits dropped because the vertex they land on is already paired.
    pub duplicates: usize,
}

/// Where a segment hit lands on one ring.
#[derive(Debug, Clone, Copy)]
enum Landing<F> {
    /// On an input point (alpha exactly 0 or 1).
    Existing(usize),
    /// Strictly inside the segment at the given alpha.
    Fresh(F),
}

fn landing<F: Float>(ring: &Ring<F>, segment: usize, alpha: F) -> Landing<F> {
    if alpha == F::zero() {
        Landing::Existing(segment)
    } else if alpha == F::one() {
        Landing::Existing(ring.source_end(segment))
    } else {
        Landing::Fresh(alpha)
    }
}

fn already_paired<F: Float>(ring: &Ring<F>, landing: Landing<F>) -> bool {
    match landing {
        Landing::Existing(idx) => ring[idx].neighbor.is_some(),
        Landing::Fresh(_) => false,
    }
}

fn place<F: Float>(ring: &mut Ring<F>, segment: usize, landing: Landing<F>, point: Vec2<F>) -> usize {
    match landing {
        Landing::Existing(idx) => {
            let vertex = &mut ring[idx];
            vertex.degenerate = true;
            vertex.location = Location::On;
            idx
        }
        Landing::Fresh(alpha) => ring.insert(segment, Vertex::crossing(point, alpha)),
    }
}

/// Tests every source segment of the subject against every source segment of
/// the clipper and pairs up the vertices at each hit.
///
/// Clean crossings insert a new vertex into both rings. A hit at alpha 0 or 1
/// marks the existing vertex degenerate instead. A touch seen again from an
/// adjacent segment lands on an already paired vertex and is skipped, so every
/// geometric contact yields exactly one neighbor pair.
pub(crate) fn find_intersections<F: Float>(overlay: &mut Overlay<F>) -> ScanStats {
    let mut stats = ScanStats::default();

    for i in 0..overlay.subject.source_len() {
        let s = overlay.subject.segment(i);
        for j in 0..overlay.clipper.source_len() {
            let c = overlay.clipper.segment(j);
            let Some((hit, t, u)) = s.intersect_params(c) else {
                continue;
            };

            let on_subject = landing(&overlay.subject, i, t);
            let on_clipper = landing(&overlay.clipper, j, u);
            if already_paired(&overlay.subject, on_subject)
                || already_paired(&overlay.clipper, on_clipper)
            {
                stats.duplicates += 1;
                continue;
            }

            // Snap to an existing vertex so both sides share exact coordinates.
            let point = match (on_subject, on_clipper) {
                (Landing::Existing(idx), _) => overlay.subject[idx].point,
                (_, Landing::Existing(idx)) => overlay.clipper[idx].point,
                _ => hit,
            };
            let degenerate = matches!(on_subject, Landing::Existing(_))
                || matches!(on_clipper, Landing::Existing(_));

            log::trace!(
                "segment hit subject[{}] x clipper[{}] at t={:?} u={:?} degenerate={}",
                i,
                j,
                t.to_f64(),
                u.to_f64(),
                degenerate
            );

            let s_idx = place(&mut overlay.subject, i, on_subject, point);
            let c_idx = place(&mut overlay.clipper, j, on_clipper, point);
            overlay.subject[s_idx].neighbor = Some(c_idx);
            overlay.clipper[c_idx].neighbor = Some(s_idx);

            if degenerate {
                stats.touches += 1;
            } else {
                stats.crossings += 1;
            }
        }
    }

    log::debug!(
        "intersection scan: {} crossings, {} degenerate touches, {} duplicate hits",
        stats.crossings,
        stats.touches,
        stats.duplicates
    );
    stats
}

/// Labels every non-degenerate input point `In`, `Out` or `On` relative to the
/// other polygon.
pub(crate) fn classify<F: Float>(overlay: &mut Overlay<F>, subject: &Polygon<F>, clipper: &Polygon<F>) {
    classify_ring(&mut overlay.subject, clipper);
    classify_ring(&mut overlay.clipper, subject);
}

fn classify_ring<F: Float>(ring: &mut Ring<F>, other: &Polygon<F>) {
    let edges = other.outer_segments();
    for idx in 0..ring.source_len() {
        if !ring[idx].degenerate {
            ring[idx].location = locate(ring[idx].point, other, &edges);
        }
    }
}

/// Places `point` relative to `other`, whose outer boundary is `edges`.
pub(crate) fn locate<F: Float>(point: Vec2<F>, other: &Polygon<F>, edges: &[Segment2<F>]) -> Location {
    if edges.iter().any(|e| e.contains_point(point)) {
        Location::On
    } else if other.contains_vector(point) {
        Location::In
    } else {
        Location::Out
    }
}

/// Promotes every degenerate vertex to an intersection vertex.
///
/// Returns the number of vertices promoted across both rings.
pub(crate) fn propagate_degenerate<F: Float>(overlay: &mut Overlay<F>) -> usize {
    let mut promoted = 0;
    for role in [Role::Subject, Role::Clipper] {
        let ring = overlay.ring_mut(role);
        for idx in 0..ring.arena_len() {
            if ring[idx].degenerate && !ring[idx].intersect {
                ring[idx].intersect = true;
                promoted += 1;
            }
        }
    }
    promoted
}
