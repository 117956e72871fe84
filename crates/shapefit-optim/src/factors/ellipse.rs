use crate::params::{EllipseCodec, ShapeCodec};
use crate::NllsProblem;
use nalgebra::{DMatrix, DVector};
use shapefit_core::geometry::closest_point;
use shapefit_core::{EllipseRotated, Pt2, Real};

/// Euclidean offsets between points and their matched ellipse points.
///
/// Parameters are `[x0, y0, a, b, phi, t_0, …, t_{N−1}]`: the ellipse
/// followed by one curve angle per observation. Residuals `2i` and `2i + 1`
/// are the x and y components of `ellipse(t_i) − p_i`, so the squared
/// residual norm is the sum of squared point-to-curve distances once the
/// angles have settled on the closest points.
#[derive(Debug, Clone, Copy)]
pub struct EllipseDistance<'a> {
    pub points: &'a [Pt2],
}

impl<'a> EllipseDistance<'a> {
    pub fn new(points: &'a [Pt2]) -> Self {
        Self { points }
    }

    /// Full parameter vector for `ellipse`, with each angle set to the
    /// closest curve point of its observation.
    pub fn initial_params(&self, ellipse: &EllipseRotated) -> DVector<Real> {
        let mut x = DVector::zeros(self.num_params());
        EllipseCodec::encode_into(ellipse, x.as_mut_slice());
        for (i, p) in self.points.iter().enumerate() {
            x[EllipseCodec::DIM + i] = closest_point(p, ellipse).0;
        }
        x
    }
}

impl NllsProblem for EllipseDistance<'_> {
    fn num_params(&self) -> usize {
        EllipseCodec::DIM + self.points.len()
    }

    fn num_residuals(&self) -> usize {
        2 * self.points.len()
    }

    fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
        let e = EllipseCodec::decode(x.as_slice());
        let (sphi, cphi) = e.phi.sin_cos();
        let mut r = DVector::zeros(self.num_residuals());
        for (i, p) in self.points.iter().enumerate() {
            let (st, ct) = x[EllipseCodec::DIM + i].sin_cos();
            r[2 * i] = e.center.x + e.a * ct * cphi - e.b * st * sphi - p.x;
            r[2 * i + 1] = e.center.y + e.a * ct * sphi + e.b * st * cphi - p.y;
        }
        r
    }

    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
        let e = EllipseCodec::decode(x.as_slice());
        let (sphi, cphi) = e.phi.sin_cos();
        let mut j = DMatrix::zeros(self.num_residuals(), self.num_params());
        for i in 0..self.points.len() {
            let col_t = EllipseCodec::DIM + i;
            let (st, ct) = x[col_t].sin_cos();
            let (rx, ry) = (2 * i, 2 * i + 1);

            j[(rx, 0)] = 1.0;
            j[(ry, 1)] = 1.0;

            j[(rx, 2)] = ct * cphi;
            j[(ry, 2)] = ct * sphi;

            j[(rx, 3)] = -st * sphi;
            j[(ry, 3)] = st * cphi;

            j[(rx, 4)] = -e.a * ct * sphi - e.b * st * cphi;
            j[(ry, 4)] = e.a * ct * cphi - e.b * st * sphi;

            j[(rx, col_t)] = -e.a * st * cphi - e.b * ct * sphi;
            j[(ry, col_t)] = -e.a * st * sphi + e.b * ct * cphi;
        }
        j
    }
}
