//! Boundary tracing and hole assignment.

use std::cmp::Ordering;

use super::vertex::Role;
use super::Overlay;
use crate::error::ClipError;
use crate::polygon::core::polygon_signed_area;
use crate::polygon::{BooleanOp, Polygon};
use crate::primitives::Vec2;
use num_traits::Float;

/// Traces every output boundary.
///
/// Each walk starts at an unchecked intersection vertex, follows the active
/// ring until the next intersection vertex, then jumps to its neighbor on the
/// other ring. The direction on each stretch comes from the vertex's entry
/// flag and whether `op` keeps the inside or the outside of the active ring.
/// A walk ends when it jumps back onto a checked vertex.
pub(crate) fn walk<F: Float>(
    overlay: &mut Overlay<F>,
    op: BooleanOp,
) -> Result<Vec<Vec<Vec2<F>>>, ClipError> {
    let limit = overlay.subject.arena_len() + overlay.clipper.arena_len();
    let mut boundaries = Vec::new();

    while let Some(start) = overlay.subject.find(|v| v.intersect && !v.checked) {
        let mut role = Role::Subject;
        let mut current = start;
        let mut boundary = Vec::new();
        let mut steps = 0;

        loop {
            let ring = overlay.ring_mut(role);
            ring[current].checked = true;
            let vertex = ring[current].clone();
            boundary.push(vertex.point);

            let forward = vertex.entry == op.keeps_inside(role);
            loop {
                current = if forward {
                    ring[current].next
                } else {
                    ring[current].prev
                };
                steps += 1;
                if steps > limit {
                    return Err(ClipError::UnclosedBoundary { steps });
                }
                if ring[current].intersect {
                    break;
                }
                boundary.push(ring[current].point);
            }

            let arrived = current;
            let neighbor = ring[arrived]
                .neighbor
                .ok_or(ClipError::UnclassifiablePairing { ring: role, index: arrived })?;
            ring[arrived].checked = true;

            role = role.other();
            current = neighbor;
            if overlay.ring(role)[current].checked {
                break;
            }
        }

        boundaries.push(boundary);
    }

    let traced = boundaries.len();
    boundaries.retain(|b| b.len() >= 3 && polygon_signed_area(b) != F::zero());
    log::debug!(
        "traced {} boundaries, kept {} non-degenerate",
        traced,
        boundaries.len()
    );
    Ok(boundaries)
}

/// A point of `ring` that is not also a vertex of `other`, if there is one.
fn sample_point<F: Float>(ring: &[Vec2<F>], other: &[Vec2<F>]) -> Vec2<F> {
    ring.iter()
        .copied()
        .find(|p| !other.contains(p))
        .unwrap_or(ring[0])
}

/// Groups boundaries into `[outer, holes...]` by even-odd nesting depth.
///
/// A boundary inside an odd number of others is a hole and joins the group of
/// the smallest boundary containing it. Outer boundaries are returned
/// clockwise and holes counter-clockwise.
pub(crate) fn assign_holes<F: Float>(boundaries: Vec<Vec<Vec2<F>>>) -> Vec<Vec<Polygon<F>>> {
    let polygons: Vec<Polygon<F>> = boundaries
        .into_iter()
        .map(|ring| Polygon::new(ring).to_clockwise())
        .collect();
    let areas: Vec<F> = polygons.iter().map(Polygon::area).collect();
    let n = polygons.len();

    let containers: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .filter(|&j| {
                    let sample = sample_point(&polygons[i].outer, &polygons[j].outer);
                    polygons[j].contains_vector(sample)
                })
                .collect()
        })
        .collect();

    let parent = |i: usize| {
        containers[i]
            .iter()
            .copied()
            .min_by(|&a, &b| areas[a].partial_cmp(&areas[b]).unwrap_or(Ordering::Equal))
    };
    let is_hole = |i: usize| containers[i].len() % 2 == 1;

    let groups: Vec<Vec<Polygon<F>>> = (0..n)
        .filter(|&i| !is_hole(i))
        .map(|i| {
            let mut group = vec![polygons[i].clone()];
            group.extend(
                (0..n)
                    .filter(|&h| is_hole(h) && parent(h) == Some(i))
                    .map(|h| polygons[h].reversed()),
            );
            group
        })
        .collect();

    log::debug!(
        "grouped {} boundaries into {} outer boundaries",
        n,
        groups.len()
    );
    groups
}
