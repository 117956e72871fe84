use super::PointShapeDistance;
use crate::params::{ShapeCodec, SphereCodec};
use crate::NllsProblem;
use nalgebra::{DMatrix, DVector};
use shapefit_core::{Pt3, Real};

/// Signed distance `‖p − c‖ − r` from each point to the sphere surface.
#[derive(Debug, Clone, Copy)]
pub struct SphereDistance<'a> {
    pub points: &'a [Pt3],
}

impl<'a> SphereDistance<'a> {
    pub fn new(points: &'a [Pt3]) -> Self {
        Self { points }
    }
}

impl<'a> PointShapeDistance<'a> for SphereDistance<'a> {
    type Codec = SphereCodec;
    type Point = Pt3;

    fn new(points: &'a [Pt3]) -> Self {
        SphereDistance::new(points)
    }
}

impl NllsProblem for SphereDistance<'_> {
    fn num_params(&self) -> usize {
        SphereCodec::DIM
    }

    fn num_residuals(&self) -> usize {
        self.points.len()
    }

    fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
        let sphere = SphereCodec::decode(x.as_slice());
        DVector::from_iterator(
            self.points.len(),
            self.points
                .iter()
                .map(|p| (p - sphere.center).norm() - sphere.radius),
        )
    }

    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
        let sphere = SphereCodec::decode(x.as_slice());
        let mut j = DMatrix::zeros(self.points.len(), SphereCodec::DIM);
        for (i, p) in self.points.iter().enumerate() {
            let d = sphere.center - p;
            let dist = d.norm();
            if dist > 0.0 {
                j[(i, 0)] = d.x / dist;
                j[(i, 1)] = d.y / dist;
                j[(i, 2)] = d.z / dist;
            }
            j[(i, 3)] = -1.0;
        }
        j
    }
}
