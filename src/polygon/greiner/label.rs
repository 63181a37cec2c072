//! Entry/exit labelling of intersection vertices.

use std::collections::HashSet;

use super::ring::Ring;
use super::scan::locate;
use super::vertex::{Location, Role};
use super::Overlay;
use crate::error::ClipError;
use crate::polygon::Polygon;
use crate::primitives::Segment2;
use num_traits::Float;

/// How an intersection vertex behaves once its neighbors are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// The boundaries cross here; `entry` is true when moving forward enters
    /// the other polygon.
    Crossing { entry: bool },
    /// The boundaries touch without crossing.
    Bounce,
}

/// Where the edges arriving at and leaving each intersection vertex lie
/// relative to the other polygon, indexed by arena slot.
#[derive(Debug, Clone)]
pub(crate) struct Sides {
    subject: Vec<Option<(Location, Location)>>,
    clipper: Vec<Option<(Location, Location)>>,
}

impl Sides {
    /// Classifies the midpoint of both edges around every intersection vertex.
    ///
    /// Every hit is a vertex by now, so an edge lies wholly in, out or on the
    /// other boundary and its midpoint speaks for all of it.
    pub fn measure<F: Float>(overlay: &Overlay<F>, subject: &Polygon<F>, clipper: &Polygon<F>) -> Self {
        Self {
            subject: measure_ring(&overlay.subject, clipper),
            clipper: measure_ring(&overlay.clipper, subject),
        }
    }

    fn get(&self, role: Role, idx: usize) -> Option<(Location, Location)> {
        let sides = match role {
            Role::Subject => &self.subject,
            Role::Clipper => &self.clipper,
        };
        sides.get(idx).copied().flatten()
    }
}

fn measure_ring<F: Float>(ring: &Ring<F>, other: &Polygon<F>) -> Vec<Option<(Location, Location)>> {
    let edges = other.outer_segments();
    let half = F::one() / (F::one() + F::one());
    let midpoint = |from: usize, to: usize| {
        let mid = Segment2::new(ring[from].point, ring[to].point).point_at(half);
        locate(mid, other, &edges)
    };

    let mut sides = vec![None; ring.arena_len()];
    for idx in ring.indices().filter(|&i| ring[i].intersect) {
        let vertex = &ring[idx];
        sides[idx] = Some((midpoint(vertex.prev, idx), midpoint(idx, vertex.next)));
    }
    sides
}

/// Reads entry/exit off the edges before and after a vertex.
///
/// Returns `None` when both sides agree, which cannot be decided locally.
fn local_pairing(before: Location, after: Location) -> Option<bool> {
    use Location::{In, On, Out};
    match (before, after) {
        (Out, In) | (On, In) | (Out, On) => Some(true),
        (In, Out) | (On, Out) | (In, On) => Some(false),
        (In, In) | (Out, Out) | (On, On) => None,
    }
}

/// Resolves one intersection vertex, consulting its neighbor when the local
/// pairing is ambiguous.
///
/// `visited` guards the recursion. A pair that is ambiguous on both rings is
/// a bounce when at least one of the two vertices is degenerate; two clean
/// crossing vertices always cross, so they are reported as unclassifiable.
pub(crate) fn resolve<F: Float>(
    overlay: &Overlay<F>,
    sides: &Sides,
    role: Role,
    idx: usize,
    visited: &mut HashSet<(Role, usize)>,
) -> Result<Resolution, ClipError> {
    visited.insert((role, idx));

    let unclassifiable = ClipError::UnclassifiablePairing { ring: role, index: idx };
    let (before, after) = sides.get(role, idx).ok_or_else(|| unclassifiable.clone())?;
    if let Some(entry) = local_pairing(before, after) {
        return Ok(Resolution::Crossing { entry });
    }

    let ring = overlay.ring(role);
    let neighbor = ring[idx].neighbor.ok_or_else(|| unclassifiable.clone())?;
    let other = overlay.ring(role.other());
    if other[neighbor].neighbor != Some(idx) || !other[neighbor].intersect {
        return Err(unclassifiable);
    }
    if visited.contains(&(role.other(), neighbor)) {
        return if ring[idx].degenerate || other[neighbor].degenerate {
            Ok(Resolution::Bounce)
        } else {
            Err(unclassifiable)
        };
    }

    match resolve(overlay, sides, role.other(), neighbor, visited)? {
        Resolution::Crossing { entry } => Ok(Resolution::Crossing { entry: !entry }),
        Resolution::Bounce => Ok(Resolution::Bounce),
    }
}

/// Labels every intersection vertex on both rings and suppresses bounces.
///
/// `subject` and `clipper` are the normalized inputs the rings were built
/// from. All vertices are resolved before anything is written back, so the
/// result does not depend on the order vertices are visited. Suppressed pairs
/// lose their intersection status; suppressed crossing vertices that were not
/// input points are unlinked from their ring. Returns the number of
/// suppressed pairs.
pub(crate) fn label<F: Float>(
    overlay: &mut Overlay<F>,
    subject: &Polygon<F>,
    clipper: &Polygon<F>,
) -> Result<usize, ClipError> {
    let sides = Sides::measure(overlay, subject, clipper);

    let mut resolved = Vec::new();
    for role in [Role::Subject, Role::Clipper] {
        let ring = overlay.ring(role);
        for idx in ring.indices().filter(|&i| ring[i].intersect) {
            let mut visited = HashSet::new();
            resolved.push((role, idx, resolve(overlay, &sides, role, idx, &mut visited)?));
        }
    }

    let mut bounces = 0;
    for &(role, idx, resolution) in &resolved {
        let vertex = &mut overlay.ring_mut(role)[idx];
        match resolution {
            Resolution::Crossing { entry } => vertex.entry = entry,
            Resolution::Bounce => {
                vertex.remove = true;
                vertex.intersect = false;
                if role == Role::Subject {
                    bounces += 1;
                }
            }
        }
    }

    for role in [Role::Subject, Role::Clipper] {
        let ring = overlay.ring_mut(role);
        let removed: Vec<usize> = ring.indices().filter(|&i| ring[i].remove).collect();
        for idx in removed {
            ring[idx].neighbor = None;
            if !ring.is_source(idx) {
                ring.unlink(idx);
            }
        }
    }

    log::debug!(
        "labelled {} intersection vertices, suppressed {} bounces",
        resolved.len(),
        bounces
    );
    Ok(bounces)
}
