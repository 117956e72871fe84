//! Algebraic sphere fit, used to seed the geometric refinement.

use crate::math::centroid_3d;
use log::debug;
use nalgebra::{DMatrix, DVector};
use shapefit_core::{Pt3, Real, Sphere3, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SphereFitError {
    #[error("need at least 4 points, got {0}")]
    NotEnoughPoints(usize),
    #[error("points are coplanar or coincident")]
    Degenerate,
    #[error("svd failed")]
    SvdFailed,
}

/// Least-squares fit of `x² + y² + z² + Dx + Ey + Fz + G = 0`.
///
/// Points are shifted to their centroid first to keep the system well
/// conditioned. Minimises the algebraic rather than the geometric distance,
/// so noisy data yields a slightly biased sphere; use it as the starting
/// point for a geometric refinement.
pub fn fit_sphere_linear(points: &[Pt3]) -> Result<Sphere3, SphereFitError> {
    let n = points.len();
    if n < 4 {
        return Err(SphereFitError::NotEnoughPoints(n));
    }
    let c = centroid_3d(points).ok_or(SphereFitError::NotEnoughPoints(n))?;

    let mut a = DMatrix::<Real>::zeros(n, 4);
    let mut b = DVector::<Real>::zeros(n);
    for (i, p) in points.iter().enumerate() {
        let q: Vec3 = p.coords - c;
        a[(i, 0)] = q.x;
        a[(i, 1)] = q.y;
        a[(i, 2)] = q.z;
        a[(i, 3)] = 1.0;
        b[i] = -q.norm_squared();
    }

    let svd = a.svd(true, true);
    let s_max = svd.singular_values.max();
    let s_min = svd.singular_values.min();
    if s_max <= 0.0 || s_min / s_max < 1e-10 {
        return Err(SphereFitError::Degenerate);
    }
    let x = svd
        .solve(&b, Real::EPSILON)
        .map_err(|_| SphereFitError::SvdFailed)?;

    let half = Vec3::new(x[0], x[1], x[2]) * 0.5;
    let r2 = half.norm_squared() - x[3];
    if r2 <= 0.0 {
        return Err(SphereFitError::Degenerate);
    }
    let sphere = Sphere3::new(Pt3::from(c - half), r2.sqrt());
    debug!(
        "linear sphere fit: center {:?}, radius {:.6}",
        sphere.center, sphere.radius
    );
    Ok(sphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::{Distribution, Normal};
    use shapefit_core::synthetic::sample_sphere;

    #[test]
    fn exact_points_recover_sphere() {
        let truth = Sphere3::from_coords(1.0, 2.0, 3.0, 4.0);
        let pts = sample_sphere(&truth, 30);
        let found = fit_sphere_linear(&pts).unwrap();
        assert!((found.center - truth.center).norm() < 1e-9);
        assert!((found.radius - truth.radius).abs() < 1e-9);
    }

    #[test]
    fn noisy_points_are_close() {
        let truth = Sphere3::from_coords(-10.0, 5.0, 100.0, 2.5);
        let mut rng = StdRng::seed_from_u64(7);
        let noise = Normal::new(0.0, 0.01).unwrap();
        let pts: Vec<Pt3> = sample_sphere(&truth, 100)
            .into_iter()
            .map(|p| {
                p + Vec3::new(
                    noise.sample(&mut rng),
                    noise.sample(&mut rng),
                    noise.sample(&mut rng),
                )
            })
            .collect();
        let found = fit_sphere_linear(&pts).unwrap();
        assert!((found.center - truth.center).norm() < 0.02);
        assert!((found.radius - truth.radius).abs() < 0.02);
    }

    #[test]
    fn coplanar_points_are_rejected() {
        let pts: Vec<Pt3> = (0..8)
            .map(|i| {
                let t = i as Real * 0.7;
                Pt3::new(t.cos(), t.sin(), 0.0)
            })
            .collect();
        assert!(matches!(
            fit_sphere_linear(&pts),
            Err(SphereFitError::Degenerate)
        ));
        assert!(matches!(
            fit_sphere_linear(&pts[..3]),
            Err(SphereFitError::NotEnoughPoints(3))
        ));
    }
}
