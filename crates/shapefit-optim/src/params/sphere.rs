use super::ShapeCodec;
use shapefit_core::{Pt3, Real, Sphere3};

/// `[cx, cy, cz, r]`
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereCodec;

impl ShapeCodec for SphereCodec {
    type Shape = Sphere3;
    const DIM: usize = 4;

    fn encode_into(shape: &Sphere3, out: &mut [Real]) {
        debug_assert!(out.len() >= Self::DIM);
        out[0] = shape.center.x;
        out[1] = shape.center.y;
        out[2] = shape.center.z;
        out[3] = shape.radius;
    }

    fn decode(params: &[Real]) -> Sphere3 {
        debug_assert!(params.len() >= Self::DIM);
        Sphere3::new(Pt3::new(params[0], params[1], params[2]), params[3])
    }
}
