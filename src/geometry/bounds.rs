//! Axis-aligned bounding box accumulated over points.

use serde::Serialize;

use super::point::Point;

/// `{left, top, right, bottom}` extents, y growing downward.
///
/// An empty box has `left > right`; extending it with the first point
/// collapses it onto that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            left: f64::INFINITY,
            top: f64::INFINITY,
            right: f64::NEG_INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bb = Self::empty();
        bb.extend_all(points);
        bb
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Grow the box to cover `p`.
    pub fn extend(&mut self, p: Point) -> &mut Self {
        self.left = self.left.min(p.x);
        self.top = self.top.min(p.y);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.max(p.y);
        self
    }

    pub fn extend_all<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) -> &mut Self {
        for &p in points {
            self.extend(p);
        }
        self
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.right - self.left }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.bottom - self.top }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_geometry_bounds.rs"]
mod tests;
