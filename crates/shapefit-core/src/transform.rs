//! Rigid transforms and planar homographies.
//!
//! SE(3) and SE(2) are represented by `nalgebra` isometries ([`Iso3`],
//! [`Iso2`]); composition, inversion and point mapping come from there.

use crate::{Iso2, Iso3, Mat3, Pt2, Real};
use nalgebra::{Rotation3, Translation3, UnitQuaternion};

/// Rigid transform from XYZ Euler angles (applied X, then Y, then Z) and a
/// translation.
pub fn se3_from_euler_xyz(rx: Real, ry: Real, rz: Real, tx: Real, ty: Real, tz: Real) -> Iso3 {
    let rot = Rotation3::from_euler_angles(rx, ry, rz);
    Iso3::from_parts(
        Translation3::new(tx, ty, tz),
        UnitQuaternion::from_rotation_matrix(&rot),
    )
}

/// Planar rigid transform with translation `(x, y)` and rotation `yaw`.
pub fn se2(x: Real, y: Real, yaw: Real) -> Iso2 {
    Iso2::new(nalgebra::Vector2::new(x, y), yaw)
}

/// Apply a 3×3 homography to a 2D point.
///
/// Returns `None` if the point maps to infinity.
pub fn homography_transform(h: &Mat3, p: &Pt2) -> Option<Pt2> {
    let v = h * p.to_homogeneous();
    if v.z.abs() <= Real::EPSILON * v.xy().norm().max(1.0) {
        return None;
    }
    Some(Pt2::new(v.x / v.z, v.y / v.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pt3, TEST_TOL};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn euler_rotation_about_z() {
        let tf = se3_from_euler_xyz(0.0, 0.0, FRAC_PI_2, 1.0, 2.0, 3.0);
        let p = tf * Pt3::new(1.0, 0.0, 0.0);
        assert!((p - Pt3::new(1.0, 3.0, 3.0)).norm() < TEST_TOL);
    }

    #[test]
    fn inverse_and_composition() {
        let a = se3_from_euler_xyz(0.1, -0.2, 0.3, 1.0, -2.0, 0.5);
        let b = se3_from_euler_xyz(-0.4, 0.05, 1.2, 0.0, 3.0, -1.0);
        let p = Pt3::new(0.3, -0.7, 2.0);

        let back = a.inverse_transform_point(&(a * p));
        assert!((back - p).norm() < TEST_TOL);

        let composed = (a * b) * p;
        let chained = a * (b * p);
        assert!((composed - chained).norm() < TEST_TOL);
    }

    #[test]
    fn se2_yaw_and_translation() {
        let tf = se2(1.0, -1.0, FRAC_PI_2);
        let p = tf * Pt2::new(2.0, 0.0);
        assert!((p - Pt2::new(1.0, 1.0)).norm() < TEST_TOL);
        assert!((tf.rotation.angle() - FRAC_PI_2).abs() < TEST_TOL);
    }

    #[test]
    fn homography_scales_and_translates() {
        let h = Mat3::new(2.0, 0.0, 1.0, 0.0, 2.0, -1.0, 0.0, 0.0, 2.0);
        let p = homography_transform(&h, &Pt2::new(3.0, 4.0)).unwrap();
        assert!((p - Pt2::new(3.5, 3.5)).norm() < TEST_TOL);

        let at_infinity = Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0);
        assert!(homography_transform(&at_infinity, &Pt2::new(0.0, 5.0)).is_none());
    }
}
