//! Aggregate operations on 2D point sets.

use crate::shapes::{Rectangle2, RectangleLength2I};
use crate::{Pt2, Real, Vec2};

/// Centroid of the points, or `None` for an empty slice.
pub fn mean(points: &[Pt2]) -> Option<Pt2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::zeros(), |acc, p| acc + p.coords);
    Some(Pt2::from(sum / points.len() as Real))
}

/// Midpoint of `a` and `b`.
pub fn mean_of_two(a: &Pt2, b: &Pt2) -> Pt2 {
    nalgebra::center(a, b)
}

/// Tight axis-aligned bounds `[min, max]` of the points.
pub fn bounding(points: &[Pt2]) -> Option<Rectangle2> {
    let first = points.first()?;
    let mut rect = Rectangle2 {
        p0: *first,
        p1: *first,
    };
    for p in &points[1..] {
        rect.p0.x = rect.p0.x.min(p.x);
        rect.p0.y = rect.p0.y.min(p.y);
        rect.p1.x = rect.p1.x.max(p.x);
        rect.p1.y = rect.p1.y.max(p.y);
    }
    Some(rect)
}

/// Integer pixel bounds: the smallest [`RectangleLength2I`] whose inclusive
/// pixel range covers every point.
///
/// `None` for an empty input, or when a bound or a side length does not fit
/// in `i32`.
pub fn bounding_length(points: &[Pt2]) -> Option<RectangleLength2I> {
    let rect = bounding(points)?;
    let x0 = to_pixel(rect.p0.x.floor())?;
    let y0 = to_pixel(rect.p0.y.floor())?;
    let x1 = to_pixel(rect.p1.x.ceil())?;
    let y1 = to_pixel(rect.p1.y.ceil())?;
    let width = x1.checked_sub(x0)?.checked_add(1)?;
    let height = y1.checked_sub(y0)?.checked_add(1)?;
    Some(RectangleLength2I::new(x0, y0, width, height))
}

/// Integral `v` as `i32`, or `None` outside the range (NaN included).
fn to_pixel(v: Real) -> Option<i32> {
    (v >= i32::MIN as Real && v <= i32::MAX as Real).then_some(v as i32)
}

/// Reorder points counter-clockwise by their angle around the centroid,
/// starting from the one closest to `-π`.
pub fn order_ccw(points: &[Pt2]) -> Vec<Pt2> {
    let Some(center) = mean(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(Real, Pt2)> = points
        .iter()
        .map(|p| ((p.y - center.y).atan2(p.x - center.x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::contains_rect;
    use crate::TEST_TOL;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_points(n: usize, seed: u64) -> Vec<Pt2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Pt2::new(
                    rng.random::<Real>() * 100.0 - 50.0,
                    rng.random::<Real>() * 100.0 - 50.0,
                )
            })
            .collect()
    }

    #[test]
    fn mean_matches_sum() {
        let pts = random_points(20, 234);
        let (sx, sy) = pts.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        let m = mean(&pts).unwrap();
        assert!((m.x - sx / 20.0).abs() < TEST_TOL);
        assert!((m.y - sy / 20.0).abs() < TEST_TOL);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn mean_of_two_points() {
        let m = mean_of_two(&Pt2::new(3.0, 8.0), &Pt2::new(-4.0, 7.8));
        assert!((m.x + 0.5).abs() < TEST_TOL);
        assert!((m.y - 7.9).abs() < TEST_TOL);
    }

    #[test]
    fn bounding_contains_all_points() {
        let pts = random_points(20, 7);
        let rect = bounding(&pts).unwrap();
        for p in &pts {
            assert!(contains_rect(&rect, p));
        }
    }

    #[test]
    fn pixel_bounding_contains_all_points() {
        let pts = random_points(20, 8);
        let r = bounding_length(&pts).unwrap();
        for p in &pts {
            assert!(p.x >= r.x0 as Real && p.x <= (r.x0 + r.width - 1) as Real);
            assert!(p.y >= r.y0 as Real && p.y <= (r.y0 + r.height - 1) as Real);
        }
    }

    #[test]
    fn pixel_bounding_rejects_out_of_range() {
        let far = [Pt2::new(0.0, 0.0), Pt2::new(3.0e9, 1.0)];
        assert!(bounding_length(&far).is_none());

        // Both bounds fit in i32 but the width does not.
        let wide = [Pt2::new(-2.0e9, 0.0), Pt2::new(2.0e9, 1.0)];
        assert!(bounding_length(&wide).is_none());

        let r = bounding_length(&[Pt2::new(-1.5, 2.0), Pt2::new(3.2, 4.0)]).unwrap();
        assert_eq!((r.x0, r.y0, r.width, r.height), (-2, 2, 7, 3));
    }

    #[test]
    fn orders_rectangle_corners() {
        let input = vec![
            Pt2::new(2.0, -3.0),
            Pt2::new(2.0, 1.0),
            Pt2::new(-2.0, -3.0),
            Pt2::new(-2.0, 1.0),
        ];
        let found = order_ccw(&input);
        assert_eq!(found, vec![input[2], input[0], input[1], input[3]]);
    }
}
