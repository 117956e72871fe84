//! Polygon conversions and orientation.

use crate::shapes::{Polygon2, Quadrilateral, Rectangle2, RectangleLength2I};
use crate::{Pt2, Real};

/// Quadrilateral with the rectangle's corners, clockwise in image
/// coordinates starting at `p0`.
pub fn rectangle_to_quad(rect: &Rectangle2) -> Quadrilateral {
    Quadrilateral::new(
        Pt2::new(rect.p0.x, rect.p0.y),
        Pt2::new(rect.p1.x, rect.p0.y),
        Pt2::new(rect.p1.x, rect.p1.y),
        Pt2::new(rect.p0.x, rect.p1.y),
    )
}

/// Quadrilateral through the centres of the outermost pixels of `rect`.
pub fn rectangle_length_to_quad(rect: &RectangleLength2I) -> Quadrilateral {
    let x0 = rect.x0 as Real;
    let y0 = rect.y0 as Real;
    let x1 = (rect.x0 + rect.width - 1) as Real;
    let y1 = (rect.y0 + rect.height - 1) as Real;
    Quadrilateral::new(
        Pt2::new(x0, y0),
        Pt2::new(x1, y0),
        Pt2::new(x1, y1),
        Pt2::new(x0, y1),
    )
}

/// Axis-aligned rectangle bounding the quadrilateral.
pub fn bounding_rectangle(quad: &Quadrilateral) -> Rectangle2 {
    let v = quad.vertices();
    let mut rect = Rectangle2 { p0: v[0], p1: v[0] };
    for p in &v[1..] {
        rect.p0.x = rect.p0.x.min(p.x);
        rect.p0.y = rect.p0.y.min(p.y);
        rect.p1.x = rect.p1.x.max(p.x);
        rect.p1.y = rect.p1.y.max(p.y);
    }
    rect
}

/// Shoelace area; positive for counter-clockwise vertex order.
pub fn signed_area(polygon: &Polygon2) -> Real {
    0.5 * polygon
        .edges()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<Real>()
}

/// `true` if the vertices are ordered counter-clockwise (y up).
pub fn is_ccw(polygon: &Polygon2) -> bool {
    signed_area(polygon) > 0.0
}
