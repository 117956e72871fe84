//! Fitting drivers: encode a guess, step the solver, decode the result.
//!
//! [`run_fit`] is the shared stepping loop and [`run_backend`] hands a problem
//! to a whole-solve [`NllsSolverBackend`]. The public fitters pick one of the
//! two through [`FitBackend`] and share the [`ModelFitter`] interface.

pub mod cylinder;
pub mod ellipse;
pub mod sphere;

pub use cylinder::FitCylinderToPoints;
pub use ellipse::RefineEllipseEuclidean;
pub use sphere::FitSphereToPoints;

use crate::backend_lm::LmBackend;
use crate::factors::PointShapeDistance;
use crate::params::ShapeCodec;
use crate::solver::{check_start, LeastSquaresStepper, LmStepper, LmStepperOptions};
use crate::{NllsProblem, NllsSolverBackend, SolveOptions};
use anyhow::{ensure, Result};
use log::{debug, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use shapefit_core::Real;

/// Least-squares engine used by the shape fitters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBackend {
    /// [`LmStepper`] driven by [`run_fit`], one logged step at a time.
    #[default]
    Stepper,
    /// [`LmBackend`] (MINPACK) through [`run_backend`].
    Minpack,
}

/// Raw outcome of [`run_fit`] or [`run_backend`], before decoding into a shape.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub params: DVector<Real>,
    pub initial_cost: Real,
    pub final_cost: Real,
    pub iterations: usize,
    pub converged: bool,
}

/// Result of a shape fit. Costs are `0.5 ‖r‖²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitReport<M> {
    pub model: M,
    pub initial_cost: Real,
    pub final_cost: Real,
    pub iterations: usize,
    pub converged: bool,
}

impl<M> FitReport<M> {
    fn from_outcome(model: M, outcome: &FitOutcome) -> Self {
        Self {
            model,
            initial_cost: outcome.initial_cost,
            final_cost: outcome.final_cost,
            iterations: outcome.iterations,
            converged: outcome.converged,
        }
    }
}

/// Estimates a model from observed points, starting at a guess.
pub trait ModelFitter {
    type Model;
    type Point;

    fn fit(&self, points: &[Self::Point], initial: &Self::Model)
        -> Result<FitReport<Self::Model>>;
}

/// Minimise `problem` from `x0`, one stepper iteration at a time.
///
/// Running out of iterations is not an error: the outcome carries
/// `converged = false` and the best parameters found. Errors come only from
/// stepper initialization.
pub fn run_fit<P, S>(
    problem: &P,
    x0: DVector<Real>,
    opts: &SolveOptions,
    stepper: &mut S,
) -> Result<FitOutcome>
where
    P: NllsProblem,
    S: LeastSquaresStepper,
{
    stepper.initialize(problem, x0, opts.ftol, opts.gtol)?;
    let initial_cost = stepper.cost();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < opts.max_iters {
        iterations += 1;
        if stepper.iterate(problem) {
            converged = true;
            break;
        }
        if opts.verbose {
            debug!("iter {iterations}: cost {:.6e}", stepper.cost());
        }
    }

    if converged {
        debug!(
            "fit converged after {iterations} iterations: cost {:.6e} -> {:.6e}",
            initial_cost,
            stepper.cost()
        );
    } else {
        warn!(
            "fit stopped at the iteration limit ({}) without converging: cost {:.6e} -> {:.6e}",
            opts.max_iters,
            initial_cost,
            stepper.cost()
        );
    }

    Ok(FitOutcome {
        params: stepper.parameters().clone(),
        initial_cost,
        final_cost: stepper.cost(),
        iterations,
        converged,
    })
}

/// Minimise `problem` from `x0` with a whole-solve backend.
///
/// The start is validated the same way [`LmStepper`] validates it, so both
/// engines reject the same setups. The iteration count is whatever the
/// backend reports.
pub fn run_backend<P, B>(
    problem: &P,
    x0: DVector<Real>,
    opts: &SolveOptions,
    backend: &B,
) -> Result<FitOutcome>
where
    P: NllsProblem,
    B: NllsSolverBackend,
{
    let initial_cost = 0.5 * check_start(problem, &x0)?.norm_squared();
    let (params, report) = backend.solve(problem, x0, opts);

    if report.converged {
        debug!(
            "backend fit converged after {} iterations: cost {:.6e} -> {:.6e}",
            report.iterations, initial_cost, report.final_cost
        );
    } else {
        warn!(
            "backend fit stopped without converging after {} iterations: cost {:.6e} -> {:.6e}",
            report.iterations, initial_cost, report.final_cost
        );
    }

    Ok(FitOutcome {
        params,
        initial_cost,
        final_cost: report.final_cost,
        iterations: report.iterations,
        converged: report.converged,
    })
}

/// Run `problem` on the engine selected by `backend`.
pub fn minimize<P: NllsProblem>(
    problem: &P,
    x0: DVector<Real>,
    opts: &SolveOptions,
    lm: LmStepperOptions,
    backend: FitBackend,
) -> Result<FitOutcome> {
    match backend {
        FitBackend::Stepper => run_fit(problem, x0, opts, &mut LmStepper::new(lm)),
        FitBackend::Minpack => run_backend(problem, x0, opts, &LmBackend),
    }
}

/// Options shared by the shape fitters.
fn default_fit_options() -> SolveOptions {
    SolveOptions {
        max_iters: 100,
        ftol: 1e-12,
        gtol: 0.0,
        ..SolveOptions::default()
    }
}

/// Fit any shape whose parameters are exactly its codec vector.
pub fn fit_shape<'a, F>(
    points: &'a [F::Point],
    initial: &<F::Codec as ShapeCodec>::Shape,
    opts: &SolveOptions,
    lm: LmStepperOptions,
    backend: FitBackend,
) -> Result<FitReport<<F::Codec as ShapeCodec>::Shape>>
where
    F: PointShapeDistance<'a>,
{
    ensure!(
        points.len() >= F::Codec::DIM,
        "need at least {} points, got {}",
        F::Codec::DIM,
        points.len()
    );
    let problem = F::new(points);
    let x0 = F::Codec::encode(initial);
    let outcome = minimize(&problem, x0, opts, lm, backend)?;
    let model = F::Codec::decode(outcome.params.as_slice());
    Ok(FitReport::from_outcome(model, &outcome))
}
