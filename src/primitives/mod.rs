//! Floating-point geometric primitives and operations.

mod ray2;
mod segment2;
mod vec2;

pub use ray2::Ray2;
pub use segment2::Segment2;
pub use vec2::Vec2;
