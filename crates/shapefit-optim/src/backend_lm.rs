//! Whole-solve backend on the `levenberg-marquardt` crate (MINPACK port).
//!
//! Selected by the shape fitters with [`FitBackend::Minpack`](crate::problems::FitBackend).
//! Unlike [`LmStepper`](crate::solver::LmStepper) it runs to termination in
//! one call, with MINPACK's trust-region step bound and column scaling.

use crate::{NllsProblem, NllsSolverBackend, SolveOptions, SolveReport};
use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use log::debug;
use nalgebra::{storage::Owned, DMatrix, DVector, Dyn};
use shapefit_core::Real;

/// Presents an [`NllsProblem`] to MINPACK, which owns the parameter vector.
///
/// Non-finite residuals or Jacobians are reported as `None`, which makes the
/// solver stop instead of stepping on garbage.
struct ShapeProblemAdapter<'a, P: NllsProblem> {
    problem: &'a P,
    x: DVector<Real>,
}

impl<P: NllsProblem> LeastSquaresProblem<Real, Dyn, Dyn> for ShapeProblemAdapter<'_, P> {
    type ResidualStorage = Owned<Real, Dyn>;
    type JacobianStorage = Owned<Real, Dyn, Dyn>;
    type ParameterStorage = Owned<Real, Dyn>;

    fn set_params(&mut self, x: &DVector<Real>) {
        self.x.copy_from(x);
    }

    fn params(&self) -> DVector<Real> {
        self.x.clone()
    }

    fn residuals(&self) -> Option<DVector<Real>> {
        let r = self.problem.residuals(&self.x);
        r.iter().all(|v| v.is_finite()).then_some(r)
    }

    fn jacobian(&self) -> Option<DMatrix<Real>> {
        let j = self.problem.jacobian(&self.x);
        j.iter().all(|v| v.is_finite()).then_some(j)
    }
}

/// MINPACK Levenberg–Marquardt as an [`NllsSolverBackend`].
///
/// `max_iters` bounds residual evaluations at `max_iters * (n + 1)`; the
/// reported iteration count is the number of evaluations.
#[derive(Debug, Default, Clone, Copy)]
pub struct LmBackend;

impl NllsSolverBackend for LmBackend {
    fn solve<P: NllsProblem>(
        &self,
        problem: &P,
        x0: DVector<Real>,
        opts: &SolveOptions,
    ) -> (DVector<Real>, SolveReport) {
        let solver = LevenbergMarquardt::new()
            .with_ftol(opts.ftol)
            .with_xtol(opts.xtol)
            .with_gtol(opts.gtol)
            .with_patience(opts.max_iters.max(1));

        let (adapter, report) = solver.minimize(ShapeProblemAdapter { problem, x: x0 });
        let x = adapter.x;
        let final_cost = problem.cost(&x);
        if opts.verbose {
            debug!(
                "minpack: {:?} after {} evaluations, cost {final_cost:.6e}",
                report.termination, report.number_of_evaluations
            );
        }

        let report = SolveReport {
            iterations: report.number_of_evaluations,
            final_cost,
            converged: report.termination.was_successful(),
        };
        (x, report)
    }
}
