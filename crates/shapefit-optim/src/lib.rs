//! Non-linear least-squares fitting of shapes to points.
//!
//! Layers, bottom up:
//!
//! - [`params`]: codecs between shapes and flat parameter vectors,
//! - [`factors`]: residuals and analytic Jacobians of point-to-shape distances,
//! - [`solver`]: the step-at-a-time [`LmStepper`](solver::LmStepper),
//! - [`problems`]: fitters that encode a guess, run the solver and decode the
//!   result ([`FitSphereToPoints`], [`FitCylinderToPoints`],
//!   [`RefineEllipseEuclidean`]).
//!
//! [`jacobian_check`] compares analytic Jacobians with central differences.
//! Setting a fitter's `backend` to [`FitBackend::Minpack`] swaps the stepper
//! for [`LmBackend`], a one-call solve through the `levenberg-marquardt`
//! crate.
//!
//! # Example
//!
//! ```
//! use shapefit_core::{synthetic::sample_sphere, Sphere3};
//! use shapefit_optim::{FitSphereToPoints, ModelFitter};
//!
//! let truth = Sphere3::from_coords(1.0, 2.0, 3.0, 4.0);
//! let points = sample_sphere(&truth, 30);
//! let guess = Sphere3::from_coords(1.2, 1.9, 3.1, 3.5);
//!
//! let report = FitSphereToPoints::default().fit(&points, &guess).unwrap();
//! assert!(report.converged);
//! assert!((report.model.radius - 4.0).abs() < 1e-8);
//! ```

pub mod backend_lm;
pub mod factors;
pub mod jacobian_check;
pub mod params;
pub mod problems;
pub mod solver;
mod traits;

pub use backend_lm::LmBackend;
pub use problems::{
    fit_shape, minimize, run_backend, run_fit, FitBackend, FitCylinderToPoints, FitOutcome,
    FitReport, FitSphereToPoints, ModelFitter, RefineEllipseEuclidean,
};
pub use traits::*;
