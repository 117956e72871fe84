//! Direct least-squares ellipse fitting.

use crate::math::{normalize_points_2d, null_vector_3x3, real_eigenvalues_3x3};
use log::debug;
use nalgebra::{Matrix3, Vector3};
use shapefit_core::{EllipseQuadratic, Mat3, Pt2, Real};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EllipseFitError {
    #[error("need at least 5 points, got {0}")]
    NotEnoughPoints(usize),
    #[error("points are degenerate (coincident, collinear or otherwise rank deficient)")]
    Degenerate,
    #[error("no ellipse solution among the eigenvectors")]
    NoEllipse,
}

/// Fit a conic constrained to be an ellipse by minimising the algebraic
/// distance (Fitzgibbon's direct method in the numerically stable
/// Halíř–Flusser formulation).
///
/// Points are Hartley-normalized before fitting and the result is mapped
/// back, so the fit is invariant to translation and scale of the input.
/// The returned coefficients have unit norm and `a > 0`.
pub fn fit_ellipse_algebraic(points: &[Pt2]) -> Result<EllipseQuadratic, EllipseFitError> {
    let n = points.len();
    if n < 5 {
        return Err(EllipseFitError::NotEnoughPoints(n));
    }
    let (norm, t) = normalize_points_2d(points).ok_or(EllipseFitError::Degenerate)?;

    // Scatter blocks for the quadratic [x², xy, y²] and linear [x, y, 1] parts.
    let mut s1 = Matrix3::<Real>::zeros();
    let mut s2 = Matrix3::<Real>::zeros();
    let mut s3 = Matrix3::<Real>::zeros();
    for p in &norm {
        let d1 = Vector3::new(p.x * p.x, p.x * p.y, p.y * p.y);
        let d2 = Vector3::new(p.x, p.y, 1.0);
        s1 += d1 * d1.transpose();
        s2 += d1 * d2.transpose();
        s3 += d2 * d2.transpose();
    }

    // Normalized data keeps s3 well scaled; a tiny determinant means collinear points.
    if s3.determinant().abs() <= 1e-10 * (n as Real).powi(3) {
        return Err(EllipseFitError::Degenerate);
    }
    let s3_inv = s3.try_inverse().ok_or(EllipseFitError::Degenerate)?;
    let lin = -s3_inv * s2.transpose();
    let m = s1 + s2 * lin;
    // Premultiply by the inverse of the constraint matrix 4ac - b² = 1.
    let m = Matrix3::from_rows(&[m.row(2) * 0.5, -m.row(1), m.row(0) * 0.5]);

    let mut best: Option<(Real, Vector3<Real>)> = None;
    for lambda in real_eigenvalues_3x3(&m) {
        let Some(v) = null_vector_3x3(&(m - Matrix3::identity() * lambda)) else {
            continue;
        };
        let cond = 4.0 * v[0] * v[2] - v[1] * v[1];
        if cond > 0.0 && best.map_or(true, |(c, _)| cond > c) {
            best = Some((cond, v));
        }
    }
    let (_, a1) = best.ok_or(EllipseFitError::NoEllipse)?;
    let a2 = lin * a1;

    // Conic matrix in normalized coordinates, then mapped back: Q = Tᵀ Qn T.
    let qn = Mat3::new(
        a1[0],
        a1[1] * 0.5,
        a2[0] * 0.5,
        a1[1] * 0.5,
        a1[2],
        a2[1] * 0.5,
        a2[0] * 0.5,
        a2[1] * 0.5,
        a2[2],
    );
    let q = t.transpose() * qn * t;

    let coeffs = nalgebra::Vector6::new(
        q[(0, 0)],
        q[(0, 1)],
        q[(1, 1)],
        q[(0, 2)],
        q[(1, 2)],
        q[(2, 2)],
    );
    let scale = coeffs.norm();
    if scale <= Real::EPSILON {
        return Err(EllipseFitError::Degenerate);
    }
    let c = if coeffs[0] < 0.0 { -coeffs / scale } else { coeffs / scale };
    debug!("algebraic ellipse fit from {n} points");
    Ok(EllipseQuadratic::new(c[0], c[1], c[2], c[3], c[4], c[5]))
}
