//! High-level entry crate for `shapefit`.
//!
//! Geometry primitives plus least-squares fitting of spheres, cylinders and
//! ellipses to observed points. The usual workflow is a closed-form estimate
//! from [`linear`] refined by a geometric fit from [`optim`]:
//!
//! ```
//! use shapefit::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let truth = EllipseRotated::new(3.0, -1.0, 5.0, 2.0, 0.4);
//! let points = shapefit::core::synthetic::sample_ellipse(&truth, 30);
//!
//! // Closed-form seed, then Euclidean refinement.
//! let seed = quadratic_to_rotated(&fit_ellipse_algebraic(&points)?)?;
//! let report = RefineEllipseEuclidean::default().fit(&points, &seed)?;
//!
//! assert!((report.model.a - 5.0).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

/// Math aliases, shapes, metrics, transforms and synthetic samplers.
pub mod core {
    pub use shapefit_core::*;
}

/// Closed-form estimators (algebraic ellipse, linear sphere, quaternion mean).
///
/// Use these to seed the non-linear fitters.
pub mod linear {
    pub use shapefit_linear::*;
}

/// Codecs, residuals, the LM stepper and the shape fitters.
pub mod optim {
    pub use shapefit_optim::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use shapefit::prelude::*;` to get started quickly.
pub mod prelude {
    // Common types
    pub use crate::core::geometry::{quadratic_to_rotated, rotated_to_quadratic};
    pub use crate::core::{
        Cylinder3, EllipseQuadratic, EllipseRotated, Pt2, Pt3, Real, Sphere3, Vec2, Vec3,
    };

    // Closed-form seeds
    pub use crate::linear::{fit_ellipse_algebraic, fit_sphere_linear};

    // Fitters and options
    pub use crate::optim::solver::LmStepperOptions;
    pub use crate::optim::{
        FitBackend, FitCylinderToPoints, FitReport, FitSphereToPoints, ModelFitter,
        RefineEllipseEuclidean, SolveOptions,
    };
}
