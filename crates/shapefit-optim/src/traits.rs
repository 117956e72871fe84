use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use shapefit_core::Real;

/// Non-linear least squares problem with dense parameter/residual vectors.
///
/// Implementations are stateless with respect to the parameters: every call
/// recomputes the full residual vector (or Jacobian) from `x`.
pub trait NllsProblem {
    /// Number of parameters in the optimization vector.
    fn num_params(&self) -> usize;
    /// Number of residual rows in the problem.
    fn num_residuals(&self) -> usize;

    /// Residuals for the given parameters, length [`Self::num_residuals`].
    fn residuals(&self, x: &DVector<Real>) -> DVector<Real>;
    /// Jacobian `J[(i, j)] = ∂r_i / ∂x_j`, shape `num_residuals × num_params`.
    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real>;

    /// Half the squared residual norm.
    fn cost(&self, x: &DVector<Real>) -> Real {
        0.5 * self.residuals(x).norm_squared()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Maximum number of solver iterations before termination.
    ///
    /// The stepping driver counts calls to `iterate`; the LM backend follows
    /// the MINPACK convention and caps evaluations at `max_iters * (n + 1)`.
    pub max_iters: usize,
    /// Relative tolerance on the objective (cost) reduction.
    pub ftol: Real,
    /// Tolerance on the gradient infinity norm.
    pub gtol: Real,
    /// Relative tolerance on parameter updates.
    pub xtol: Real,
    /// Log every iteration at debug level.
    pub verbose: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iters: 200,
            ftol: 1e-10,
            gtol: 1e-10,
            xtol: 1e-10,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveReport {
    pub iterations: usize,
    pub final_cost: Real,
    pub converged: bool,
}

/// Whole-solve backend: minimise a problem from `x0` in one call.
pub trait NllsSolverBackend {
    fn solve<P: NllsProblem>(
        &self,
        problem: &P,
        x0: DVector<Real>,
        opts: &SolveOptions,
    ) -> (DVector<Real>, SolveReport);
}
