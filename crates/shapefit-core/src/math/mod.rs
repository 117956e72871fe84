//! Linear algebra type aliases and small geometric helpers.
//!
//! Everything in the workspace works in `f64` ([`Real`]) on top of `nalgebra`.

use nalgebra::{
    Isometry2, Isometry3, Matrix3, Point2, Point3, UnitQuaternion, Vector2, Vector3, Vector4,
};

pub mod angle;

pub use angle::{angle_minus, bound_half_pi, bound_pi};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 4D vector with [`Real`] components.
pub type Vec4 = Vector4<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
/// 2D rigid transform (SE(2)).
pub type Iso2 = Isometry2<Real>;
/// 3D rigid transform (SE(3)).
pub type Iso3 = Isometry3<Real>;
/// Unit quaternion rotation.
pub type Quat = UnitQuaternion<Real>;

/// Tolerance used by unit tests that compare double precision results.
pub const TEST_TOL: Real = 1e-8;

/// Convert a 2D point in Euclidean coordinates into homogeneous coordinates.
///
/// Given a point `p = (x, y)`, returns the homogeneous vector `(x, y, 1)`.
pub fn to_homogeneous(p: &Pt2) -> Vec3 {
    Vec3::new(p.x, p.y, 1.0)
}

/// Convert a 3D homogeneous vector back to a 2D point.
///
/// The input is interpreted as `(x, y, w)` and the result is `(x / w, y / w)`.
/// The caller is responsible for ensuring that `w != 0`.
pub fn from_homogeneous(v: &Vec3) -> Pt2 {
    Pt2::new(v.x / v.z, v.y / v.z)
}

/// Skew-symmetric matrix `[v]ₓ` such that `[v]ₓ w = v × w`.
pub fn cross_matrix(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// Rotate a 2D point about the origin by `theta` radians (counter-clockwise).
pub fn rotate_2d(theta: Real, p: &Pt2) -> Pt2 {
    let (s, c) = theta.sin_cos();
    Pt2::new(c * p.x - s * p.y, s * p.x + c * p.y)
}

/// Two unit vectors completing `axis` to a right-handed orthonormal frame.
///
/// `axis` does not need to be normalised. Returns `None` for a zero vector.
pub fn orthonormal_basis(axis: &Vec3) -> Option<(Vec3, Vec3)> {
    let u = axis.try_normalize(Real::EPSILON)?;
    // Seed with the coordinate axis least aligned with `u`.
    let seed = if u.x.abs() <= u.y.abs() && u.x.abs() <= u.z.abs() {
        Vec3::x()
    } else if u.y.abs() <= u.z.abs() {
        Vec3::y()
    } else {
        Vec3::z()
    };
    let e1 = u.cross(&seed).normalize();
    let e2 = u.cross(&e1);
    Some((e1, e2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_matrix_matches_cross_product() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let w = Vec3::new(0.3, 4.0, -1.5);
        let expected = v.cross(&w);
        let found = cross_matrix(&v) * w;
        assert!((expected - found).norm() < TEST_TOL);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_2d(std::f64::consts::FRAC_PI_2, &Pt2::new(1.0, 0.0));
        assert!(p.x.abs() < TEST_TOL);
        assert!((p.y - 1.0).abs() < TEST_TOL);
    }

    #[test]
    fn homogeneous_roundtrip() {
        let p = Pt2::new(3.5, -1.25);
        let h = to_homogeneous(&p) * 4.0;
        let back = from_homogeneous(&h);
        assert!((p - back).norm() < TEST_TOL);
    }

    #[test]
    fn basis_is_orthonormal() {
        for axis in [
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-0.3, 0.9, 0.1),
        ] {
            let (e1, e2) = orthonormal_basis(&axis).unwrap();
            let u = axis.normalize();
            assert!((e1.norm() - 1.0).abs() < TEST_TOL);
            assert!((e2.norm() - 1.0).abs() < TEST_TOL);
            assert!(e1.dot(&u).abs() < TEST_TOL);
            assert!(e2.dot(&u).abs() < TEST_TOL);
            assert!(e1.dot(&e2).abs() < TEST_TOL);
            assert!((e1.cross(&e2) - u).norm() < TEST_TOL);
        }
        assert!(orthonormal_basis(&Vec3::zeros()).is_none());
    }
}
