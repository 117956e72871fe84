//! Geometric sphere fit.

use super::{default_fit_options, fit_shape, FitBackend, FitReport, ModelFitter};
use crate::factors::SphereDistance;
use crate::solver::LmStepperOptions;
use crate::SolveOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use shapefit_core::{Pt3, Sphere3};

/// Minimises the signed point-to-surface distances of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitSphereToPoints {
    pub solve: SolveOptions,
    pub lm: LmStepperOptions,
    pub backend: FitBackend,
}

impl Default for FitSphereToPoints {
    fn default() -> Self {
        Self {
            solve: default_fit_options(),
            lm: LmStepperOptions::default(),
            backend: FitBackend::default(),
        }
    }
}

impl FitSphereToPoints {
    pub fn new(solve: SolveOptions) -> Self {
        Self {
            solve,
            ..Self::default()
        }
    }
}

impl ModelFitter for FitSphereToPoints {
    type Model = Sphere3;
    type Point = Pt3;

    fn fit(&self, points: &[Pt3], initial: &Sphere3) -> Result<FitReport<Sphere3>> {
        fit_shape::<SphereDistance>(points, initial, &self.solve, self.lm, self.backend)
    }
}
