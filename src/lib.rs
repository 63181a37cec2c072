//! ringclip - Boolean clipping for simple polygons
//!
//! Computes intersection, union and differences of two simple polygons with
//! the Greiner-Hormann algorithm, including its degenerate cases: touching
//! corners, vertices lying on edges and coincident boundaries. Results are
//! groups of an outer boundary followed by its holes.
//!
//! All predicates are exact; there are no hidden tolerances.
//!
//! # Example
//!
//! ```
//! use ringclip::{clip, Polygon, Vec2};
//!
//! let a: Polygon<f64> = Polygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(2.0, 0.0),
//!     Vec2::new(2.0, 2.0),
//!     Vec2::new(0.0, 2.0),
//! ]);
//! let b = a.translated(Vec2::new(1.0, 1.0));
//!
//! // Union: both direction flags false.
//! let groups = clip(&a, &b, false, false).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert!((groups[0][0].area() - 7.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;

pub use error::ClipError;
pub use polygon::{clip, clip_with, BooleanOp, Polygon};
pub use primitives::{Ray2, Segment2, Vec2};
