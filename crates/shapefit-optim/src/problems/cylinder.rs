//! Geometric cylinder fit.

use super::{default_fit_options, fit_shape, FitBackend, FitReport, ModelFitter};
use crate::factors::CylinderDistance;
use crate::solver::LmStepperOptions;
use crate::SolveOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use shapefit_core::{Cylinder3, Pt3};

/// Minimises the signed point-to-surface distances of a cylinder.
///
/// The axis point may slide along the axis and the slope is free in scale,
/// so only the axis line, its direction up to sign, and the radius are
/// determined by the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitCylinderToPoints {
    pub solve: SolveOptions,
    pub lm: LmStepperOptions,
    pub backend: FitBackend,
}

impl Default for FitCylinderToPoints {
    fn default() -> Self {
        Self {
            solve: default_fit_options(),
            lm: LmStepperOptions::default(),
            backend: FitBackend::default(),
        }
    }
}

impl FitCylinderToPoints {
    pub fn new(solve: SolveOptions) -> Self {
        Self {
            solve,
            ..Self::default()
        }
    }
}

impl ModelFitter for FitCylinderToPoints {
    type Model = Cylinder3;
    type Point = Pt3;

    fn fit(&self, points: &[Pt3], initial: &Cylinder3) -> Result<FitReport<Cylinder3>> {
        fit_shape::<CylinderDistance>(points, initial, &self.solve, self.lm, self.backend)
    }
}
