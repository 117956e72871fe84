use super::PointShapeDistance;
use crate::params::{CylinderCodec, ShapeCodec};
use crate::NllsProblem;
use nalgebra::{DMatrix, DVector};
use shapefit_core::{Cylinder3, Pt3, Real, Vec3};

/// Signed distance from each point to the cylinder surface.
///
/// The perpendicular distance to the axis comes from projecting `p − q`
/// onto the axis slope and subtracting that leg in quadrature; the squared
/// distance is clamped at zero before the square root, so a point on the
/// axis yields `−r`. A zero-length slope degrades the axis to its point,
/// matching `distance_signed_cylinder`.
#[derive(Debug, Clone, Copy)]
pub struct CylinderDistance<'a> {
    pub points: &'a [Pt3],
}

impl<'a> CylinderDistance<'a> {
    pub fn new(points: &'a [Pt3]) -> Self {
        Self { points }
    }
}

impl<'a> PointShapeDistance<'a> for CylinderDistance<'a> {
    type Codec = CylinderCodec;
    type Point = Pt3;

    fn new(points: &'a [Pt3]) -> Self {
        CylinderDistance::new(points)
    }
}

/// Offset `p − q` from the observed point to the axis point, the axis slope,
/// and the slope's squared norm.
struct AxisOffset {
    d: Vec3,
    s: Vec3,
    ss: Real,
}

impl AxisOffset {
    fn new(cyl: &Cylinder3, q: &Pt3) -> Self {
        let s = cyl.line.slope;
        Self {
            d: cyl.line.p - q,
            s,
            ss: s.norm_squared(),
        }
    }

    /// Projection of the offset onto the slope, divided by `|s|²`; zero for
    /// a zero-length slope, where the axis collapses to its point.
    fn along_scaled(&self) -> Real {
        if self.ss == 0.0 {
            0.0
        } else {
            self.d.dot(&self.s) / self.ss
        }
    }

    /// Squared perpendicular distance to the axis, clamped at zero.
    /// NaN from non-finite input is passed through.
    fn distance_squared(&self) -> Real {
        let along = self.d.dot(&self.s);
        let dist2 = self.d.norm_squared() - along * self.along_scaled();
        if dist2 < 0.0 {
            0.0
        } else {
            dist2
        }
    }
}

impl NllsProblem for CylinderDistance<'_> {
    fn num_params(&self) -> usize {
        CylinderCodec::DIM
    }

    fn num_residuals(&self) -> usize {
        self.points.len()
    }

    fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
        let cyl = CylinderCodec::decode(x.as_slice());
        DVector::from_iterator(
            self.points.len(),
            self.points
                .iter()
                .map(|q| AxisOffset::new(&cyl, q).distance_squared().sqrt() - cyl.radius),
        )
    }

    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
        let cyl = CylinderCodec::decode(x.as_slice());
        let mut j = DMatrix::zeros(self.points.len(), CylinderCodec::DIM);

        for (i, q) in self.points.iter().enumerate() {
            j[(i, 6)] = -1.0;

            let off = AxisOffset::new(&cyl, q);
            let dist2 = off.distance_squared();
            if !dist2.is_finite() || dist2 <= 0.0 {
                continue;
            }
            let dist = dist2.sqrt();
            let k = off.along_scaled();

            // Perpendicular offset over its length; with a zero slope `k` is
            // zero and the slope columns vanish.
            let d_point = (off.d - off.s * k) / dist;
            let d_slope = -d_point * k;
            for c in 0..3 {
                j[(i, c)] = d_point[c];
                j[(i, 3 + c)] = d_slope[c];
            }
        }
        j
    }
}
