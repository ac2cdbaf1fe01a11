//! Geometry primitives: points, bounding boxes and the convex hull.

pub mod bounds;
pub mod hull;
pub mod point;

pub use bounds::BoundingBox;
pub use hull::convex_hull;
pub use point::{Point, turn};
