//! Graham-scan convex hull.
//!
//! Winding: the pivot is the point with the largest y. Read in a y-up
//! (Cartesian) frame that is the top-most point and the boundary runs
//! clockwise from it, every corner a right turn. Layout coordinates grow
//! downward, so on screen the same sequence starts at the bottom-most point
//! and appears counter-clockwise.

use std::cmp::Ordering;

use super::point::{Point, turn};

/// Convex hull of `points` in scan order, starting at the pivot.
///
/// Fewer than three points are returned unchanged. Interior points and points
/// lying on a hull edge are dropped. An all-collinear input collapses to the
/// segment between its two extreme points (one point if all coincide).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    if let Some(segment) = collinear_extremes(points) {
        return segment;
    }

    // Largest y; `>` keeps the first of equal candidates.
    let mut pivot = points[0];
    for &p in &points[1..] {
        if p.y > pivot.y {
            pivot = p;
        }
    }

    // Descending cos from the pivot, compared exactly: every other point
    // lies on or below the pivot, so the cross product orders any two
    // directions less than a half turn apart. Ties go nearest first so the
    // farthest collinear point is the one kept.
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|&a, &b| sweep_order(pivot, a, b));

    let mut hull: Vec<Point> = Vec::with_capacity(points.len());
    hull.push(sorted[0]);
    hull.push(sorted[1]);
    for &p3 in &sorted[2..] {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p3) >= 0.0 {
            hull.pop();
        }
        hull.push(p3);
    }
    hull
}

/// Sweep order around `pivot`: the pivot and its duplicates first (cos 1),
/// then by angle below the pivot from +x to -x, nearer points first on a ray.
fn sweep_order(pivot: Point, a: Point, b: Point) -> Ordering {
    let (da, db) = (a - pivot, b - pivot);
    let (la, lb) = (da.length(), db.length());
    if la == 0.0 || lb == 0.0 {
        return la.total_cmp(&lb);
    }
    let cross = da.cross(db);
    if cross < 0.0 {
        Ordering::Less
    } else if cross > 0.0 {
        Ordering::Greater
    } else if da.dot(db) < 0.0 {
        // Opposite horizontal rays: +x (cos 1) before -x (cos -1).
        db.x.total_cmp(&da.x)
    } else {
        la.total_cmp(&lb)
    }
}

/// The extreme points of a collinear set, or `None` if the set spans an area.
fn collinear_extremes(points: &[Point]) -> Option<Vec<Point>> {
    let first = points[0];
    let Some(&other) = points.iter().find(|&&p| p != first) else {
        return Some(vec![first]);
    };
    if points.iter().any(|&p| turn(first, other, p) != 0.0) {
        return None;
    }
    let lexical = |a: &&Point, b: &&Point| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));
    let lo = points.iter().min_by(lexical)?;
    let hi = points.iter().max_by(lexical)?;
    Some(vec![*lo, *hi])
}

#[cfg(test)]
#[path = "../../tests/rust/test_geometry_hull.rs"]
mod tests;
