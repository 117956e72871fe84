//! Numerical conditioning helpers shared by the estimators in this crate.

use nalgebra::{Matrix3, Schur};
use shapefit_core::{Mat3, Pt2, Pt3, Real, Vec3};

/// Hartley normalization for 2D points.
///
/// Centers points at the origin and scales so that the mean distance from
/// the origin is `√2`. Returns the normalized points and the 3×3 transform
/// `T` with `p_norm = T * p_homogeneous`, or `None` if the input is empty or
/// all points coincide.
pub fn normalize_points_2d(points: &[Pt2]) -> Option<(Vec<Pt2>, Mat3)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as Real;
    let c = points.iter().fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords) / n;
    let mean_dist = points.iter().map(|p| (p.coords - c).norm()).sum::<Real>() / n;
    if mean_dist <= Real::EPSILON {
        return None;
    }
    let s = std::f64::consts::SQRT_2 / mean_dist;
    let t = Mat3::new(s, 0.0, -s * c.x, 0.0, s, -s * c.y, 0.0, 0.0, 1.0);
    let normalized = points
        .iter()
        .map(|p| Pt2::from((p.coords - c) * s))
        .collect();
    Some((normalized, t))
}

/// Centroid of a 3D point set, or `None` for an empty slice.
pub fn centroid_3d(points: &[Pt3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
    Some(sum / points.len() as Real)
}

/// Real eigenvalues of a general 3×3 matrix (imaginary part below `1e-8`).
pub fn real_eigenvalues_3x3(m: &Matrix3<Real>) -> Vec<Real> {
    let eigvals = Schur::new(*m).complex_eigenvalues();
    eigvals
        .iter()
        .filter(|v| v.im.abs() < 1e-8)
        .map(|v| v.re)
        .collect()
}

/// Unit null vector of a rank-2 3×3 matrix, from the largest cross product
/// of its row pairs.
pub fn null_vector_3x3(m: &Matrix3<Real>) -> Option<Vec3> {
    let r0: Vec3 = m.row(0).transpose();
    let r1: Vec3 = m.row(1).transpose();
    let r2: Vec3 = m.row(2).transpose();
    [r0.cross(&r1), r0.cross(&r2), r1.cross(&r2)]
        .into_iter()
        .max_by(|a, b| a.norm_squared().total_cmp(&b.norm_squared()))
        .and_then(|v| v.try_normalize(Real::EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_points_have_unit_scale() {
        let pts = vec![
            Pt2::new(100.0, 200.0),
            Pt2::new(150.0, 250.0),
            Pt2::new(120.0, 220.0),
        ];
        let (norm, t) = normalize_points_2d(&pts).unwrap();
        let mean = norm.iter().fold(nalgebra::Vector2::zeros(), |a, p| a + p.coords) / 3.0;
        assert!(mean.norm() < 1e-12);
        let d = norm.iter().map(|p| p.coords.norm()).sum::<Real>() / 3.0;
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);

        let mapped = t * pts[1].to_homogeneous();
        assert!((mapped.xy() - norm[1].coords).norm() < 1e-12);
        assert!(normalize_points_2d(&[Pt2::new(1.0, 1.0); 3]).is_none());
    }

    #[test]
    fn eigen_and_null_vector() {
        let m = Matrix3::new(2.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, -1.0);
        let mut ev = real_eigenvalues_3x3(&m);
        ev.sort_by(|a, b| a.total_cmp(b));
        assert!((ev[0] + 1.0).abs() < 1e-10);
        assert!((ev[1] - 2.0).abs() < 1e-10);
        assert!((ev[2] - 3.0).abs() < 1e-10);

        let v = null_vector_3x3(&(m - Matrix3::identity() * 3.0)).unwrap();
        let r = m * v - v * 3.0;
        assert!(r.norm() < 1e-10);
    }
}
