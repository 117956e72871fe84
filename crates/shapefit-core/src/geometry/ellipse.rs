//! Ellipse format conversions and point/angle relations.
//!
//! Conversions between [`EllipseQuadratic`] and [`EllipseRotated`] follow
//! David Eberly, "Information About Ellipses", Geometric Tools, 2011.

use crate::math::{bound_half_pi, bound_pi};
use crate::shapes::{EllipseQuadratic, EllipseRotated, LineGeneral2};
use crate::{Pt2, Real, Vec2};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use thiserror::Error;

/// Upper bound on Newton steps taken by [`closest_point`].
pub const CLOSEST_POINT_MAX_ITERS: usize = 20;

const CLOSEST_POINT_TOL: Real = 1e-12;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EllipseError {
    #[error("quadratic is not an ellipse (ac - b^2 = {0})")]
    NotAnEllipse(Real),
    #[error("quadratic describes an empty or degenerate ellipse")]
    Degenerate,
}

/// Convert from quadratic to rotated form.
///
/// The returned `phi` is in `[-π/2, π/2]` and `a >= b`.
pub fn quadratic_to_rotated(q: &EllipseQuadratic) -> Result<EllipseRotated, EllipseError> {
    let a11 = q.a;
    let a12 = q.b;
    let a22 = q.c;
    let det = a11 * a22 - a12 * a12;
    if det <= 0.0 {
        return Err(EllipseError::NotAnEllipse(det));
    }

    // Centre solves the gradient = 0 system.
    let kx = (a12 * q.e - a22 * q.d) / det;
    let ky = (a12 * q.d - a11 * q.e) / det;

    let denom = a11 * kx * kx + 2.0 * a12 * kx * ky + a22 * ky * ky - q.f;
    if denom == 0.0 || !denom.is_finite() {
        return Err(EllipseError::Degenerate);
    }
    let mu = 1.0 / denom;
    let m11 = mu * a11;
    let m12 = mu * a12;
    let m22 = mu * a22;

    let inner = ((m11 - m22) * (m11 - m22) + 4.0 * m12 * m12).sqrt();
    let l1 = ((m11 + m22) + inner) / 2.0;
    let l2 = ((m11 + m22) - inner) / 2.0;
    if l2 <= 0.0 {
        return Err(EllipseError::Degenerate);
    }

    // Eigenvector of l1 is the minor axis; the major axis is perpendicular.
    let (dx, dy) = if m11 >= m22 {
        (l1 - m22, m12)
    } else {
        (m12, l1 - m11)
    };
    let phi = (-dx).atan2(dy);

    Ok(EllipseRotated {
        center: Pt2::new(kx, ky),
        a: 1.0 / l2.sqrt(),
        b: 1.0 / l1.sqrt(),
        phi: bound_half_pi(phi),
    })
}

/// Convert from rotated to quadratic form, scaled so that `f` matches
/// `x₀ᵀ M x₀ - 1`.
pub fn rotated_to_quadratic(e: &EllipseRotated) -> EllipseQuadratic {
    let x0 = e.center.x;
    let y0 = e.center.y;
    let (sphi, cphi) = e.phi.sin_cos();
    let cphi2 = cphi * cphi;
    let sphi2 = sphi * sphi;
    let a2 = e.a * e.a;
    let b2 = e.b * e.b;

    let a = cphi2 / a2 + sphi2 / b2;
    let b = sphi * cphi / a2 - sphi * cphi / b2;
    let c = sphi2 / a2 + cphi2 / b2;
    let d = -(a * x0 + b * y0);
    let e_ = -(b * x0 + c * y0);
    let f = a * x0 * x0 + 2.0 * b * x0 * y0 + c * y0 * y0 - 1.0;

    EllipseQuadratic::new(a, b, c, d, e_, f)
}

/// Value of the quadratic at `(x, y)`; zero on the curve.
pub fn evaluate_quadratic(x: Real, y: Real, q: &EllipseQuadratic) -> Real {
    q.a * x * x + 2.0 * q.b * x * y + q.c * y * y + 2.0 * q.d * x + 2.0 * q.e * y + q.f
}

/// `(x'/a)² + (y'/b)²` in the ellipse frame; one on the curve.
pub fn evaluate_rotated(x: Real, y: Real, e: &EllipseRotated) -> Real {
    let local = to_ellipse_frame(&Pt2::new(x, y), e);
    let ll = local.x / e.a;
    let rr = local.y / e.b;
    ll * ll + rr * rr
}

/// Point on the ellipse at parameter angle `t`.
pub fn compute_point(t: Real, e: &EllipseRotated) -> Pt2 {
    let (st, ct) = t.sin_cos();
    from_ellipse_frame(&Vec2::new(e.a * ct, e.b * st), e)
}

/// Parameter angle of `p` in `(-π, π]`.
///
/// Exact for points on the ellipse; for other points it is the angle of the
/// ray from the centre in the ellipse's normalised frame.
pub fn compute_angle(p: &Pt2, e: &EllipseRotated) -> Real {
    let local = to_ellipse_frame(p, e);
    (local.y / e.b).atan2(local.x / e.a)
}

/// Unit tangent of the ellipse at parameter angle `t`.
pub fn compute_tangent(t: Real, e: &EllipseRotated) -> Vec2 {
    let (st, ct) = t.sin_cos();
    let (sphi, cphi) = e.phi.sin_cos();

    // outward normal in the ellipse frame, scaled by a²b²
    let x = e.a * ct * e.b * e.b;
    let y = e.b * st * e.a * e.a;

    let rx = x * cphi - y * sphi;
    let ry = x * sphi + y * cphi;
    let r = rx.hypot(ry);
    Vec2::new(-ry / r, rx / r)
}

/// Closest point on the ellipse to `p`, returned with its parameter angle.
///
/// The query is folded into the first quadrant of the ellipse frame, where the
/// global minimum lies, and Newton's method is run on the stationarity
/// condition `(e(t) - p)·e'(t) = 0` from a few starting angles in `[0, π/2]`.
/// Each start takes at most [`CLOSEST_POINT_MAX_ITERS`] steps.
pub fn closest_point(p: &Pt2, e: &EllipseRotated) -> (Real, Pt2) {
    let local = to_ellipse_frame(p, e);
    let (u, v) = (local.x.abs(), local.y.abs());
    let (a, b) = (e.a, e.b);
    let dist2 = |t: Real| {
        let (st, ct) = t.sin_cos();
        (a * ct - u).powi(2) + (b * st - v).powi(2)
    };
    let newton = |mut t: Real| {
        for _ in 0..CLOSEST_POINT_MAX_ITERS {
            let (st, ct) = t.sin_cos();
            let g = (b * b - a * a) * st * ct + a * u * st - b * v * ct;
            let dg = (b * b - a * a) * (ct * ct - st * st) + a * u * ct + b * v * st;
            if dg.abs() <= Real::EPSILON {
                break;
            }
            let next = (t - g / dg).clamp(0.0, FRAC_PI_2);
            let step = next - t;
            t = next;
            if step.abs() < CLOSEST_POINT_TOL {
                break;
            }
        }
        t
    };

    let starts = [(v / b).atan2(u / a), 0.0, FRAC_PI_4, FRAC_PI_2];
    let mut best_t = starts[0];
    let mut best_d = dist2(best_t);
    for start in starts {
        let t = newton(start);
        let d = dist2(t);
        if d < best_d {
            best_d = d;
            best_t = t;
        }
    }

    // unfold back into the quadrant of the query
    let mut t = best_t;
    if local.x < 0.0 {
        t = PI - t;
    }
    if local.y < 0.0 {
        t = -t;
    }
    let t = bound_pi(t);
    (t, compute_point(t, e))
}

/// The two lines through `pt` tangent to the ellipse.
///
/// Returns `None` when `pt` is inside or on the ellipse.
pub fn tangent_lines(pt: &Pt2, e: &EllipseRotated) -> Option<(LineGeneral2, LineGeneral2)> {
    let local = to_ellipse_frame(pt, e);
    // In the frame scaled to a unit circle the tangent points satisfy
    // X·Px + Y·Py = 1 and X² + Y² = 1.
    let px = local.x / e.a;
    let py = local.y / e.b;
    let k = px * px + py * py;
    if k <= 1.0 {
        return None;
    }
    let h = (k - 1.0).sqrt();

    let tangent_point = |sign: Real| {
        let x = (px - sign * h * py) / k;
        let y = (py + sign * h * px) / k;
        from_ellipse_frame(&Vec2::new(e.a * x, e.b * y), e)
    };
    let ta = tangent_point(1.0);
    let tb = tangent_point(-1.0);

    Some((LineGeneral2::through(pt, &ta), LineGeneral2::through(pt, &tb)))
}

fn to_ellipse_frame(p: &Pt2, e: &EllipseRotated) -> Vec2 {
    let (se, ce) = e.phi.sin_cos();
    let d = p - e.center;
    Vec2::new(ce * d.x + se * d.y, -se * d.x + ce * d.y)
}

fn from_ellipse_frame(local: &Vec2, e: &EllipseRotated) -> Pt2 {
    let (se, ce) = e.phi.sin_cos();
    Pt2::new(
        e.center.x + local.x * ce - local.y * se,
        e.center.y + local.x * se + local.y * ce,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TEST_TOL;

    fn sample() -> EllipseRotated {
        EllipseRotated::new(1.5, -0.5, 3.0, 1.2, 0.4)
    }

    #[test]
    fn quadratic_vanishes_on_rotated_points() {
        let e = sample();
        let q = rotated_to_quadratic(&e);
        for i in 0..12 {
            let t = 2.0 * PI * i as Real / 12.0;
            let p = compute_point(t, &e);
            assert!(evaluate_quadratic(p.x, p.y, &q).abs() < TEST_TOL);
            assert!((evaluate_rotated(p.x, p.y, &e) - 1.0).abs() < TEST_TOL);
        }
    }

    #[test]
    fn rotated_quadratic_roundtrip() {
        for e in [
            sample(),
            EllipseRotated::new(0.0, 0.0, 2.0, 1.0, 0.0),
            EllipseRotated::new(-3.0, 4.0, 5.0, 0.5, -1.2),
        ] {
            let back = quadratic_to_rotated(&rotated_to_quadratic(&e)).unwrap();
            assert!((back.center - e.center).norm() < TEST_TOL);
            assert!((back.a - e.a).abs() < TEST_TOL);
            assert!((back.b - e.b).abs() < TEST_TOL);
            assert!((back.phi - e.phi).abs() < TEST_TOL, "{} vs {}", back.phi, e.phi);
        }
    }

    #[test]
    fn quadratic_conversion_is_scale_invariant() {
        let e = sample();
        let q = rotated_to_quadratic(&e);
        let scaled = EllipseQuadratic::new(
            -2.0 * q.a,
            -2.0 * q.b,
            -2.0 * q.c,
            -2.0 * q.d,
            -2.0 * q.e,
            -2.0 * q.f,
        );
        let back = quadratic_to_rotated(&scaled).unwrap();
        assert!((back.a - e.a).abs() < TEST_TOL);
        assert!((back.b - e.b).abs() < TEST_TOL);
    }

    #[test]
    fn hyperbola_is_rejected() {
        let q = EllipseQuadratic::new(1.0, 0.0, -1.0, 0.0, 0.0, -1.0);
        assert!(matches!(
            quadratic_to_rotated(&q),
            Err(EllipseError::NotAnEllipse(_))
        ));
    }

    #[test]
    fn angle_inverts_point() {
        let e = sample();
        for t in [-2.5, -1.0, 0.0, 0.3, 1.7, 3.0] {
            let p = compute_point(t, &e);
            assert!((compute_angle(&p, &e) - t).abs() < TEST_TOL);
        }
    }

    #[test]
    fn tangent_is_orthogonal_to_gradient() {
        let e = sample();
        let q = rotated_to_quadratic(&e);
        for t in [0.1, 1.0, 2.2, 4.0] {
            let p = compute_point(t, &e);
            let tangent = compute_tangent(t, &e);
            let gx = q.a * p.x + q.b * p.y + q.d;
            let gy = q.b * p.x + q.c * p.y + q.e;
            assert!((tangent.x * gx + tangent.y * gy).abs() < TEST_TOL);
            assert!((tangent.norm() - 1.0).abs() < TEST_TOL);
        }
    }

    #[test]
    fn closest_point_on_curve_is_itself() {
        let e = sample();
        let p = compute_point(0.8, &e);
        let (t, found) = closest_point(&p, &e);
        assert!((t - 0.8).abs() < 1e-9);
        assert!((found - p).norm() < 1e-9);
    }

    #[test]
    fn closest_point_is_stationary() {
        let e = sample();
        for p in [
            Pt2::new(6.0, 2.0),
            Pt2::new(1.0, -0.2),
            Pt2::new(-4.0, -3.0),
            Pt2::new(1.5, -0.5),
        ] {
            let (t, found) = closest_point(&p, &e);
            let tangent = compute_tangent(t, &e);
            let d = p - found;
            assert!(
                d.dot(&tangent).abs() < 1e-9 * (1.0 + d.norm()),
                "residual not normal to the curve at {:?}",
                p
            );
            // never worse than a dense scan
            let best = (0..3600)
                .map(|i| (compute_point(i as Real * PI / 1800.0, &e) - p).norm())
                .fold(Real::INFINITY, Real::min);
            assert!(d.norm() <= best + 1e-6);
        }
    }

    #[test]
    fn tangent_lines_touch_ellipse() {
        let e = sample();
        let pt = Pt2::new(8.0, 3.0);
        let (la, lb) = tangent_lines(&pt, &e).unwrap();
        for line in [la, lb] {
            assert!(line.evaluate(&pt).abs() < TEST_TOL);
            // exactly one contact: the min |distance| over the curve is zero
            let min = (0..7200)
                .map(|i| line.evaluate(&compute_point(i as Real * PI / 3600.0, &e)).abs())
                .fold(Real::INFINITY, Real::min);
            assert!(min < 1e-5, "line does not touch ellipse: {}", min);
        }
        assert!(tangent_lines(&e.center, &e).is_none());
    }
}
