//! Euclidean ellipse refinement.

use super::{default_fit_options, minimize, FitBackend, FitReport, ModelFitter};
use crate::factors::EllipseDistance;
use crate::params::{EllipseCodec, ShapeCodec};
use crate::solver::LmStepperOptions;
use crate::SolveOptions;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use shapefit_core::math::bound_half_pi;
use shapefit_core::{EllipseRotated, Pt2};

/// Refines an ellipse by minimising true point-to-curve distances.
///
/// The ellipse and one curve angle per point are optimised jointly; the
/// angles start at each point's closest curve point under the initial
/// ellipse. The refined model is reported with non-negative axes and
/// `phi` in `(-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineEllipseEuclidean {
    pub solve: SolveOptions,
    pub lm: LmStepperOptions,
    pub backend: FitBackend,
}

impl Default for RefineEllipseEuclidean {
    fn default() -> Self {
        Self {
            solve: default_fit_options(),
            lm: LmStepperOptions::default(),
            backend: FitBackend::default(),
        }
    }
}

impl RefineEllipseEuclidean {
    pub fn new(solve: SolveOptions) -> Self {
        Self {
            solve,
            ..Self::default()
        }
    }

    pub fn refine(
        &self,
        points: &[Pt2],
        initial: &EllipseRotated,
    ) -> Result<FitReport<EllipseRotated>> {
        ensure!(
            points.len() >= EllipseCodec::DIM,
            "need at least {} points, got {}",
            EllipseCodec::DIM,
            points.len()
        );
        ensure!(
            initial.a.is_finite() && initial.b.is_finite() && initial.phi.is_finite(),
            "initial ellipse is not finite"
        );

        let problem = EllipseDistance::new(points);
        let x0 = problem.initial_params(initial);
        let outcome = minimize(&problem, x0, &self.solve, self.lm, self.backend)?;

        let mut model = EllipseCodec::decode(outcome.params.as_slice());
        model.a = model.a.abs();
        model.b = model.b.abs();
        model.phi = bound_half_pi(model.phi);
        Ok(FitReport::from_outcome(model, &outcome))
    }
}

impl ModelFitter for RefineEllipseEuclidean {
    type Model = EllipseRotated;
    type Point = Pt2;

    fn fit(&self, points: &[Pt2], initial: &EllipseRotated) -> Result<FitReport<EllipseRotated>> {
        self.refine(points, initial)
    }
}
