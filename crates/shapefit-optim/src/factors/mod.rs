//! Residual and analytic Jacobian functions for point-to-shape distances.
//!
//! Every factor borrows the observed points immutably for its lifetime and
//! implements [`NllsProblem`](crate::NllsProblem); the parameter layout is
//! the one of its [`ShapeCodec`].
//!
//! # Available Factors
//!
//! - [`SphereDistance`] - signed distance from 3D points to a sphere
//! - [`CylinderDistance`] - signed distance from 3D points to a cylinder
//! - [`EllipseDistance`] - Euclidean offsets from 2D points to an ellipse,
//!   with one curve angle per point

mod cylinder;
mod ellipse;
mod sphere;

pub use cylinder::CylinderDistance;
pub use ellipse::EllipseDistance;
pub use sphere::SphereDistance;

use crate::params::ShapeCodec;
use crate::NllsProblem;

/// Point-to-shape residual whose parameters are exactly one shape.
///
/// Ties a residual to its codec so fitters can be written once for every
/// shape kind.
pub trait PointShapeDistance<'a>: NllsProblem {
    type Codec: ShapeCodec;
    type Point: 'a;

    fn new(points: &'a [Self::Point]) -> Self;
}
