use super::ShapeCodec;
use shapefit_core::{EllipseRotated, Real};

/// `[x0, y0, a, b, phi]`
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseCodec;

impl ShapeCodec for EllipseCodec {
    type Shape = EllipseRotated;
    const DIM: usize = 5;

    fn encode_into(shape: &EllipseRotated, out: &mut [Real]) {
        debug_assert!(out.len() >= Self::DIM);
        out[0] = shape.center.x;
        out[1] = shape.center.y;
        out[2] = shape.a;
        out[3] = shape.b;
        out[4] = shape.phi;
    }

    fn decode(params: &[Real]) -> EllipseRotated {
        debug_assert!(params.len() >= Self::DIM);
        EllipseRotated::new(params[0], params[1], params[2], params[3], params[4])
    }
}
