//! Central-difference Jacobians for validating analytic derivatives.

use crate::NllsProblem;
use nalgebra::{DMatrix, DVector};
use shapefit_core::Real;

/// Result of comparing an analytic Jacobian with a numerical one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobianCheck {
    /// Largest absolute entry-wise difference.
    pub max_abs_error: Real,
    /// `(row, col)` of the largest difference.
    pub worst: (usize, usize),
    /// `max_abs_error <= tol`.
    pub passed: bool,
}

/// Central-difference Jacobian with per-parameter step
/// `step * max(1, |x_j|)`.
pub fn numerical_jacobian<P: NllsProblem>(
    problem: &P,
    x: &DVector<Real>,
    step: Real,
) -> DMatrix<Real> {
    let mut j = DMatrix::zeros(problem.num_residuals(), problem.num_params());
    let mut xp = x.clone();
    for col in 0..x.len() {
        let h = step * x[col].abs().max(1.0);
        let orig = x[col];

        xp[col] = orig + h;
        let r_plus = problem.residuals(&xp);
        xp[col] = orig - h;
        let r_minus = problem.residuals(&xp);
        xp[col] = orig;

        j.set_column(col, &((r_plus - r_minus) / (2.0 * h)));
    }
    j
}

/// Compare [`NllsProblem::jacobian`] against [`numerical_jacobian`] at `x`.
pub fn check_jacobian<P: NllsProblem>(
    problem: &P,
    x: &DVector<Real>,
    tol: Real,
) -> JacobianCheck {
    let analytic = problem.jacobian(x);
    let numeric = numerical_jacobian(problem, x, 1e-6);

    let mut max_abs_error = 0.0;
    let mut worst = (0, 0);
    for c in 0..analytic.ncols() {
        for r in 0..analytic.nrows() {
            let err = (analytic[(r, c)] - numeric[(r, c)]).abs();
            if err > max_abs_error {
                max_abs_error = err;
                worst = (r, c);
            }
        }
    }
    JacobianCheck {
        max_abs_error,
        worst,
        passed: max_abs_error <= tol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quadratic;

    impl NllsProblem for Quadratic {
        fn num_params(&self) -> usize {
            2
        }

        fn num_residuals(&self) -> usize {
            2
        }

        fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
            DVector::from_vec(vec![x[0] * x[0], x[0] * x[1]])
        }

        fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
            DMatrix::from_row_slice(2, 2, &[2.0 * x[0], 0.0, x[1], x[0]])
        }
    }

    struct WrongDerivative;

    impl NllsProblem for WrongDerivative {
        fn num_params(&self) -> usize {
            1
        }

        fn num_residuals(&self) -> usize {
            1
        }

        fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
            DVector::from_element(1, x[0].sin())
        }

        fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
            DMatrix::from_element(1, 1, -x[0].cos())
        }
    }

    #[test]
    fn agrees_on_correct_jacobian() {
        let x = DVector::from_vec(vec![1.5, -2.0]);
        let check = check_jacobian(&Quadratic, &x, 1e-6);
        assert!(check.passed, "{check:?}");
    }

    #[test]
    fn flags_wrong_jacobian() {
        let x = DVector::from_element(1, 0.3);
        let check = check_jacobian(&WrongDerivative, &x, 1e-6);
        assert!(!check.passed);
        assert_eq!(check.worst, (0, 0));
        assert!((check.max_abs_error - 2.0 * 0.3_f64.cos()).abs() < 1e-6);
    }
}
