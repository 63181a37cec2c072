//! Polygons and boolean clipping.
//!
//! This module provides:
//! - The [`Polygon`] type with area, winding and even-odd containment queries
//! - Boolean operations (intersection, union, difference, XOR) built on a
//!   Greiner-Hormann clipper
//!
//! # Example
//!
//! ```
//! use ringclip::polygon::{polygon_difference, Polygon};
//! use ringclip::Vec2;
//!
//! let outer = Polygon::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(4.0, 0.0),
//!     Vec2::new(4.0, 4.0),
//!     Vec2::new(0.0, 4.0),
//! ]);
//! let inner = Polygon::new(vec![
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(3.0, 1.0),
//!     Vec2::new(3.0, 3.0),
//!     Vec2::new(1.0, 3.0),
//! ]);
//!
//! // One group: the outer boundary with the inner square as a hole.
//! let groups = polygon_difference(&outer, &inner).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].len(), 2);
//! ```

mod boolean;
mod core;
pub(crate) mod greiner;

pub use self::boolean::{
    clip, clip_with, polygon_difference, polygon_intersection, polygon_union, polygon_xor,
    BooleanOp,
};
pub use self::core::{polygon_area, polygon_signed_area, Polygon};
pub use self::greiner::vertex::Role;
