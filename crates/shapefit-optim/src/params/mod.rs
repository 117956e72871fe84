//! Codecs between shape models and flat parameter vectors.
//!
//! Each codec fixes the layout of one shape kind:
//!
//! - [`SphereCodec`]: `[cx, cy, cz, r]`
//! - [`CylinderCodec`]: `[px, py, pz, sx, sy, sz, r]` (axis point, axis slope, radius)
//! - [`EllipseCodec`]: `[x0, y0, a, b, phi]`
//!
//! Encoding copies fields verbatim; in particular the cylinder axis slope is
//! not normalised.

mod cylinder;
mod ellipse;
mod sphere;

pub use cylinder::CylinderCodec;
pub use ellipse::EllipseCodec;
pub use sphere::SphereCodec;

use anyhow::{ensure, Result};
use nalgebra::DVector;
use shapefit_core::Real;

/// Mapping between a shape model and its parameter vector.
pub trait ShapeCodec {
    type Shape;
    /// Number of parameters describing one shape.
    const DIM: usize;

    /// Write the parameters of `shape` into `out[..DIM]`.
    fn encode_into(shape: &Self::Shape, out: &mut [Real]);

    /// Read a shape from `params[..DIM]`. Extra trailing entries are ignored.
    fn decode(params: &[Real]) -> Self::Shape;

    fn encode(shape: &Self::Shape) -> DVector<Real> {
        let mut v = DVector::zeros(Self::DIM);
        Self::encode_into(shape, v.as_mut_slice());
        v
    }

    /// Like [`ShapeCodec::decode`], but requires exactly `DIM` parameters.
    fn try_decode(params: &[Real]) -> Result<Self::Shape> {
        ensure!(
            params.len() == Self::DIM,
            "expected {} parameters, got {}",
            Self::DIM,
            params.len()
        );
        Ok(Self::decode(params))
    }
}
