use crate::geometry::compute_point;
use crate::math::orthonormal_basis;
use crate::shapes::{Cylinder3, EllipseRotated, Sphere3};
use crate::{Pt2, Pt3, Real, Vec3};
use std::f64::consts::PI;

/// `n` points spread evenly over the sphere with a Fibonacci lattice.
pub fn sample_sphere(sphere: &Sphere3, n: usize) -> Vec<Pt3> {
    let golden = PI * (3.0 - (5.0 as Real).sqrt());
    (0..n)
        .map(|i| {
            let z = 1.0 - 2.0 * (i as Real + 0.5) / n as Real;
            let r = (1.0 - z * z).max(0.0).sqrt();
            let theta = golden * i as Real;
            let dir = Vec3::new(r * theta.cos(), r * theta.sin(), z);
            sphere.center + dir * sphere.radius
        })
        .collect()
}

/// Rings of points on the cylinder surface.
///
/// `n_rings` rings are placed evenly along `length` of the axis, centred on
/// `cylinder.line.p`; each ring holds `n_per_ring` points, with successive
/// rings rotated by half a step. Returns an empty set for a zero axis.
pub fn sample_cylinder(
    cylinder: &Cylinder3,
    n_rings: usize,
    n_per_ring: usize,
    length: Real,
) -> Vec<Pt3> {
    let Some((e1, e2)) = orthonormal_basis(&cylinder.line.slope) else {
        return Vec::new();
    };
    let axis = cylinder.line.slope.normalize();
    let mut points = Vec::with_capacity(n_rings * n_per_ring);
    for ring in 0..n_rings {
        let along = if n_rings > 1 {
            length * (ring as Real / (n_rings - 1) as Real - 0.5)
        } else {
            0.0
        };
        let offset = if ring % 2 == 1 { 0.5 } else { 0.0 };
        for k in 0..n_per_ring {
            let theta = 2.0 * PI * (k as Real + offset) / n_per_ring as Real;
            let radial = e1 * theta.cos() + e2 * theta.sin();
            points.push(cylinder.line.p + axis * along + radial * cylinder.radius);
        }
    }
    points
}

/// `n` points evenly spaced in the ellipse angle parameter.
pub fn sample_ellipse(ellipse: &EllipseRotated, n: usize) -> Vec<Pt2> {
    (0..n)
        .map(|i| compute_point(2.0 * PI * i as Real / n as Real, ellipse))
        .collect()
}
