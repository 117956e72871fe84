use crate::shapes::{LineGeneral2, LineParametric2, LineSegment2, Polygon2, Rectangle2};
use crate::{Pt2, Real};

/// Intersection point of two segments, end points included.
///
/// Parallel and collinear segments yield `None`.
pub fn intersection_segments(l0: &LineSegment2, l1: &LineSegment2) -> Option<Pt2> {
    let s0 = l0.slope();
    let s1 = l1.slope();
    let denom = s1.y * s0.x - s1.x * s0.y;
    if denom == 0.0 {
        return None;
    }
    let w = l1.a - l0.a;

    let t0 = (s1.y * w.x - s1.x * w.y) / denom;
    if !(0.0..=1.0).contains(&t0) {
        return None;
    }
    let t1 = (s0.y * w.x - s0.x * w.y) / denom;
    if !(0.0..=1.0).contains(&t1) {
        return None;
    }
    Some(l0.a + s0 * t0)
}

/// Where `line` crosses `seg`, as the parameter `t` of `line.point_at(t)`.
///
/// Returns `None` if the line misses the segment or runs parallel to it.
pub fn intersection_line_segment(line: &LineParametric2, seg: &LineSegment2) -> Option<Real> {
    let s = seg.slope();
    let denom = line.slope.y * s.x - line.slope.x * s.y;
    if denom == 0.0 {
        return None;
    }
    let w = seg.a - line.p;
    let t_seg = (line.slope.x * w.y - line.slope.y * w.x) / denom;
    if !(0.0..=1.0).contains(&t_seg) {
        return None;
    }
    Some((s.x * w.y - s.y * w.x) / denom)
}

/// Intersection of two lines in general form; `None` when parallel.
pub fn intersection_general(a: &LineGeneral2, b: &LineGeneral2) -> Option<Pt2> {
    let w = a.a * b.b - b.a * a.b;
    if w == 0.0 {
        return None;
    }
    let x = (a.b * b.c - b.b * a.c) / w;
    let y = (b.a * a.c - a.a * b.c) / w;
    Some(Pt2::new(x, y))
}

/// Crossing-number point-in-polygon test. Works for convex and concave
/// polygons; points exactly on an edge may land on either side.
pub fn contains(polygon: &Polygon2, p: &Pt2) -> bool {
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// `true` if `p` lies inside the rectangle or on its border.
pub fn contains_rect(rect: &Rectangle2, p: &Pt2) -> bool {
    p.x >= rect.p0.x && p.x <= rect.p1.x && p.y >= rect.p0.y && p.y <= rect.p1.y
}
