use crate::geometry::closest_point;
use crate::shapes::{
    Cylinder3, EllipseRotated, LineParametric2, LineParametric3, LineSegment2, Sphere3,
};
use crate::{Pt2, Pt3, Real};

/// Euclidean distance from `p` to the infinite 2D line.
pub fn distance_line2(line: &LineParametric2, p: &Pt2) -> Real {
    let s = line.slope;
    let d = p - line.p;
    let n2 = s.norm_squared();
    if n2 == 0.0 {
        return d.norm();
    }
    (s.x * d.y - s.y * d.x).abs() / n2.sqrt()
}

/// Euclidean distance from `p` to the infinite 3D line.
pub fn distance_line3(line: &LineParametric3, p: &Pt3) -> Real {
    let s = line.slope;
    let d = p - line.p;
    let n2 = s.norm_squared();
    if n2 == 0.0 {
        return d.norm();
    }
    let along = d.dot(&s);
    (d.norm_squared() - along * along / n2).max(0.0).sqrt()
}

/// Euclidean distance from `p` to the closed segment.
pub fn distance_segment2(seg: &LineSegment2, p: &Pt2) -> Real {
    let s = seg.slope();
    let n2 = s.norm_squared();
    if n2 == 0.0 {
        return (p - seg.a).norm();
    }
    let t = ((p - seg.a).dot(&s) / n2).clamp(0.0, 1.0);
    (p - (seg.a + s * t)).norm()
}

/// Signed distance to the sphere surface; negative inside.
pub fn distance_signed_sphere(sphere: &Sphere3, p: &Pt3) -> Real {
    (p - sphere.center).norm() - sphere.radius
}

/// Signed distance to the cylinder surface; negative inside.
pub fn distance_signed_cylinder(cylinder: &Cylinder3, p: &Pt3) -> Real {
    distance_line3(&cylinder.line, p) - cylinder.radius
}

/// Euclidean distance to the closest point on the ellipse outline.
pub fn distance_ellipse(ellipse: &EllipseRotated, p: &Pt2) -> Real {
    let (_, on_curve) = closest_point(p, ellipse);
    (p - on_curve).norm()
}
