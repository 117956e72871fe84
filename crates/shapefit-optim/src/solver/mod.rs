//! Step-by-step least-squares solvers.
//!
//! A [`LeastSquaresStepper`] is driven from outside: the caller initializes
//! it once and then asks for one iteration at a time, which lets the fit
//! driver own the iteration budget and logging.

mod lm_stepper;

pub use lm_stepper::{LmStepper, LmStepperOptions, LmTermination};

use crate::NllsProblem;
use anyhow::{ensure, Result};
use nalgebra::DVector;
use shapefit_core::Real;

/// Iterative least-squares solver that advances one step per call.
pub trait LeastSquaresStepper {
    /// Reset the solver to start from `x0`.
    ///
    /// Fails when `x0` does not match the problem dimensions, the problem
    /// is underdetermined, or the residuals at `x0` are not finite.
    fn initialize<P: NllsProblem>(
        &mut self,
        problem: &P,
        x0: DVector<Real>,
        ftol: Real,
        gtol: Real,
    ) -> Result<()>;

    /// Take one step. Returns `true` once the solver has converged; further
    /// calls keep returning `true` without changing the parameters.
    fn iterate<P: NllsProblem>(&mut self, problem: &P) -> bool;

    /// Current best parameters.
    fn parameters(&self) -> &DVector<Real>;

    /// Cost `0.5 ‖r‖²` at [`Self::parameters`].
    fn cost(&self) -> Real;
}

/// Validates a starting point and returns the residuals there.
///
/// Shared by every solver entry point: `x0` must match the problem size and
/// be finite, the problem must not be underdetermined, and the residuals at
/// `x0` must be finite.
pub(crate) fn check_start<P: NllsProblem>(problem: &P, x0: &DVector<Real>) -> Result<DVector<Real>> {
    ensure!(
        x0.len() == problem.num_params(),
        "initial guess has {} parameters, problem expects {}",
        x0.len(),
        problem.num_params()
    );
    ensure!(
        problem.num_residuals() >= problem.num_params(),
        "underdetermined problem: {} residuals for {} parameters",
        problem.num_residuals(),
        problem.num_params()
    );
    ensure!(
        x0.iter().all(|v| v.is_finite()),
        "initial guess contains non-finite values"
    );
    let r = problem.residuals(x0);
    ensure!(
        r.len() == problem.num_residuals(),
        "residual length {} does not match declared {}",
        r.len(),
        problem.num_residuals()
    );
    ensure!(
        r.iter().all(|v| v.is_finite()),
        "residuals at the initial guess are not finite"
    );
    Ok(r)
}
