use super::{check_start, LeastSquaresStepper};
use crate::NllsProblem;
use anyhow::{ensure, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use shapefit_core::Real;

/// Trial solves per [`LmStepper::iterate`] call before giving the step back.
const MAX_INNER_TRIALS: usize = 8;
const LAMBDA_MIN: Real = 1e-12;
/// Damping beyond this means no descent direction is left.
const LAMBDA_MAX: Real = 1e16;
/// Lower bound on the Marquardt scaling of a parameter with a zero column.
const MIN_DIAG: Real = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LmStepperOptions {
    /// Damping used for the first step.
    pub initial_lambda: Real,
    /// Factor applied to lambda after a rejected step (> 1).
    pub lambda_up: Real,
    /// Factor applied to lambda after an accepted step (in (0, 1)).
    pub lambda_down: Real,
}

impl Default for LmStepperOptions {
    fn default() -> Self {
        Self {
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
        }
    }
}

impl LmStepperOptions {
    /// Rejects damping factors that would stall or invert the schedule.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_lambda.is_finite() && self.initial_lambda > 0.0,
            "initial_lambda must be positive and finite, got {}",
            self.initial_lambda
        );
        ensure!(
            self.lambda_up.is_finite() && self.lambda_up > 1.0,
            "lambda_up must be greater than 1, got {}",
            self.lambda_up
        );
        ensure!(
            self.lambda_down > 0.0 && self.lambda_down < 1.0,
            "lambda_down must lie in (0, 1), got {}",
            self.lambda_down
        );
        Ok(())
    }
}

/// Why the stepper stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LmTermination {
    /// Residuals are exactly zero.
    ZeroCost,
    /// Gradient infinity norm fell to `gtol`.
    Gradient,
    /// Relative cost reduction of an accepted step fell to `ftol`.
    CostReduction,
    /// No damping produced a cost decrease.
    Stalled,
}

/// Levenberg–Marquardt with Marquardt scaling, advanced one step at a time.
///
/// Each step solves `(JᵀJ + λ·diag(JᵀJ)) δ = −Jᵀr` by Cholesky. A step is
/// accepted only if it lowers the cost; otherwise λ grows and the solve is
/// retried, at most [`MAX_INNER_TRIALS`] times per call.
#[derive(Debug, Clone)]
pub struct LmStepper {
    pub options: LmStepperOptions,
    x: DVector<Real>,
    r: DVector<Real>,
    cost: Real,
    lambda: Real,
    ftol: Real,
    gtol: Real,
    termination: Option<LmTermination>,
}

impl Default for LmStepper {
    fn default() -> Self {
        Self::new(LmStepperOptions::default())
    }
}

impl LmStepper {
    pub fn new(options: LmStepperOptions) -> Self {
        Self {
            options,
            x: DVector::zeros(0),
            r: DVector::zeros(0),
            cost: 0.0,
            lambda: options.initial_lambda,
            ftol: 0.0,
            gtol: 0.0,
            termination: None,
        }
    }

    /// Current damping factor.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Set once [`LeastSquaresStepper::iterate`] has reported convergence.
    pub fn termination(&self) -> Option<LmTermination> {
        self.termination
    }

    /// Current residual vector.
    pub fn residuals(&self) -> &DVector<Real> {
        &self.r
    }

    fn finish(&mut self, reason: LmTermination) -> bool {
        debug!("lm stepper terminated: {reason:?} (cost {:.6e})", self.cost);
        self.termination = Some(reason);
        true
    }

    /// Damped step for the current lambda, or `None` if the system is not
    /// positive definite.
    fn damped_step(&self, jtj: &DMatrix<Real>, g: &DVector<Real>) -> Option<DVector<Real>> {
        let mut a = jtj.clone();
        for i in 0..a.nrows() {
            a[(i, i)] += self.lambda * jtj[(i, i)].max(MIN_DIAG);
        }
        let chol = a.cholesky()?;
        let step = chol.solve(&(-g));
        step.iter().all(|v| v.is_finite()).then_some(step)
    }
}

impl LeastSquaresStepper for LmStepper {
    fn initialize<P: NllsProblem>(
        &mut self,
        problem: &P,
        x0: DVector<Real>,
        ftol: Real,
        gtol: Real,
    ) -> Result<()> {
        self.options.validate()?;
        let r = check_start(problem, &x0)?;

        self.cost = 0.5 * r.norm_squared();
        self.x = x0;
        self.r = r;
        self.lambda = self.options.initial_lambda.max(LAMBDA_MIN);
        self.ftol = ftol;
        self.gtol = gtol;
        self.termination = None;
        Ok(())
    }

    fn iterate<P: NllsProblem>(&mut self, problem: &P) -> bool {
        if self.termination.is_some() {
            return true;
        }
        if self.cost == 0.0 {
            return self.finish(LmTermination::ZeroCost);
        }

        let j = problem.jacobian(&self.x);
        let g = j.transpose() * &self.r;
        if g.amax() <= self.gtol {
            return self.finish(LmTermination::Gradient);
        }
        let jtj = j.transpose() * &j;

        for _ in 0..MAX_INNER_TRIALS {
            if let Some(step) = self.damped_step(&jtj, &g) {
                let x_trial = &self.x + &step;
                let r_trial = problem.residuals(&x_trial);
                let cost_trial = 0.5 * r_trial.norm_squared();

                if cost_trial.is_finite() && cost_trial < self.cost {
                    let reduction = (self.cost - cost_trial) / self.cost;
                    self.x = x_trial;
                    self.r = r_trial;
                    self.cost = cost_trial;
                    self.lambda = (self.lambda * self.options.lambda_down).max(LAMBDA_MIN);

                    if self.cost == 0.0 {
                        return self.finish(LmTermination::ZeroCost);
                    }
                    if reduction <= self.ftol {
                        return self.finish(LmTermination::CostReduction);
                    }
                    return false;
                }
            }

            self.lambda *= self.options.lambda_up;
            if self.lambda > LAMBDA_MAX {
                return self.finish(LmTermination::Stalled);
            }
        }
        false
    }

    fn parameters(&self) -> &DVector<Real> {
        &self.x
    }

    fn cost(&self) -> Real {
        self.cost
    }
}
