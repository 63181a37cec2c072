//! Error types for clipping operations.

use thiserror::Error;

use crate::polygon::Role;

/// Errors that can occur while clipping polygons.
///
/// Geometric situations with a well-defined answer (touching boundaries,
/// disjoint or nested inputs) are never reported here; only malformed input
/// and internal states the clipper cannot interpret are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// An outer boundary has fewer than three points.
    #[error("invalid polygon: outer boundary needs at least 3 points, got {points}")]
    InvalidPolygon {
        /// Number of points the outer boundary actually has.
        points: usize,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("invalid polygon: point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the outer boundary.
        index: usize,
    },

    /// An intersection vertex could not be labelled as entry or exit.
    #[error("unclassifiable entry/exit pairing at {ring} vertex {index}")]
    UnclassifiablePairing {
        /// The ring the vertex belongs to.
        ring: Role,
        /// Arena index of the vertex within its ring.
        index: usize,
    },

    /// A boundary walk did not return to its starting vertex.
    #[error("boundary walk did not close after {steps} steps")]
    UnclosedBoundary {
        /// Number of vertices visited before giving up.
        steps: usize,
    },
}
