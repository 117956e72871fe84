//! Closed-form estimators used to seed the nonlinear fitters in
//! `shapefit-optim`.
//!
//! - [`fit_ellipse_algebraic`]: direct least-squares ellipse fit,
//! - [`fit_sphere_linear`]: algebraic sphere fit,
//! - [`average_quaternion`]: eigenvector-based rotation averaging.

pub mod math;

mod ellipse;
mod quaternion;
mod sphere;

pub use ellipse::*;
pub use quaternion::*;
pub use sphere::*;
