use proptest::prelude::*;

use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

#[test]
fn test_square_with_interior_point() {
    let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    assert_eq!(
        convex_hull(&input),
        pts(&[(4.0, 4.0), (4.0, 0.0), (0.0, 0.0), (0.0, 4.0)])
    );
}

#[test]
fn test_fewer_than_three_points_unchanged() {
    assert!(convex_hull(&[]).is_empty());
    let one = pts(&[(1.0, 1.0)]);
    assert_eq!(convex_hull(&one), one);
    let two = pts(&[(3.0, 0.0), (1.0, 1.0)]);
    assert_eq!(convex_hull(&two), two);
}

#[test]
fn test_triangle_starts_at_pivot() {
    let input = pts(&[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)]);
    assert_eq!(
        convex_hull(&input),
        pts(&[(2.0, 3.0), (4.0, 0.0), (0.0, 0.0)])
    );
}

#[test]
fn test_pivot_tie_keeps_first() {
    let input = pts(&[(0.0, 4.0), (4.0, 4.0), (2.0, 0.0)]);
    assert_eq!(convex_hull(&input)[0], Point::new(0.0, 4.0));
}

#[test]
fn test_point_on_edge_dropped() {
    let input = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let hull = convex_hull(&input);
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&Point::new(2.0, 0.0)));
}

#[test]
fn test_duplicates_collapse() {
    let input = pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (0.0, 0.0),
        (4.0, 4.0),
        (4.0, 4.0),
        (0.0, 4.0),
    ]);
    assert_eq!(
        convex_hull(&input),
        pts(&[(4.0, 4.0), (4.0, 0.0), (0.0, 0.0), (0.0, 4.0)])
    );
}

#[test]
fn test_collinear_keeps_extremes() {
    let input = pts(&[(1.0, 1.0), (0.0, 0.0), (3.0, 3.0), (2.0, 2.0)]);
    assert_eq!(convex_hull(&input), pts(&[(0.0, 0.0), (3.0, 3.0)]));
}

#[test]
fn test_identical_points() {
    let input = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert_eq!(convex_hull(&input), pts(&[(1.0, 1.0)]));
}

#[test]
fn test_right_turns_throughout() {
    let input = pts(&[
        (0.0, 0.0),
        (5.0, 1.0),
        (6.0, 5.0),
        (3.0, 8.0),
        (-1.0, 4.0),
        (2.0, 3.0),
        (3.0, 4.0),
    ]);
    let hull = convex_hull(&input);
    assert_eq!(hull.len(), 5);
    for i in 0..hull.len() {
        let (a, b, c) = (
            hull[i],
            hull[(i + 1) % hull.len()],
            hull[(i + 2) % hull.len()],
        );
        assert!(turn(a, b, c) < 0.0);
    }
}

#[test]
fn test_far_corner_on_first_ray_kept() {
    // (1,9) and (3,7) sit on one ray from the pivot; their cos values differ
    // in the last bit when computed by division.
    let input = pts(&[(0.0, 10.0), (1.0, 9.0), (3.0, 7.0), (-5.0, 0.0)]);
    assert_eq!(
        convex_hull(&input),
        pts(&[(0.0, 10.0), (3.0, 7.0), (-5.0, 0.0)])
    );
}

#[test]
fn test_far_corner_on_last_ray_kept() {
    let input = pts(&[(0.0, 10.0), (-1.0, 9.0), (-3.0, 7.0), (5.0, 0.0)]);
    let hull = convex_hull(&input);
    assert!(hull.contains(&Point::new(-3.0, 7.0)));
    assert!(!hull.contains(&Point::new(-1.0, 9.0)));
}

#[test]
fn test_horizontal_rays_both_sides_of_pivot() {
    let input = pts(&[(0.0, 4.0), (-3.0, 4.0), (5.0, 4.0), (1.0, 0.0)]);
    let hull = convex_hull(&input);
    assert_eq!(hull[0], Point::new(0.0, 4.0));
    assert!(hull.contains(&Point::new(-3.0, 4.0)));
    assert!(hull.contains(&Point::new(5.0, 4.0)));
    assert!(hull.contains(&Point::new(1.0, 0.0)));
}

proptest! {
    #[test]
    fn prop_farthest_point_on_a_ray_kept(
        a in 1i32..40,
        b in 1i32..40,
        near in 1i32..10,
        extra in 1i32..10,
    ) {
        let far = near + extra;
        let corner = Point::new(f64::from(far * a), f64::from(-far * b));
        let input = vec![
            Point::new(0.0, 0.0),
            Point::new(f64::from(near * a), f64::from(-near * b)),
            corner,
            Point::new(-50.0, -50.0),
        ];
        let hull = convex_hull(&input);
        prop_assert_eq!(hull.len(), 3);
        prop_assert!(hull.contains(&corner));
    }

    #[test]
    fn prop_hull_contains_every_point(
        coords in prop::collection::vec((-500i32..500, -500i32..500), 3..40)
    ) {
        let input: Vec<Point> = coords
            .iter()
            .map(|&(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect();
        let hull = convex_hull(&input);

        prop_assert!(!hull.is_empty());
        for p in &hull {
            prop_assert!(input.contains(p));
        }
        if hull.len() >= 2 {
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                for &p in &input {
                    prop_assert!(turn(a, b, p) <= 0.0);
                }
            }
        }
        for i in 1..hull.len().saturating_sub(1) {
            prop_assert!(turn(hull[i - 1], hull[i], hull[i + 1]) < 0.0);
        }
    }
}
