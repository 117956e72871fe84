use super::ShapeCodec;
use shapefit_core::{Cylinder3, LineParametric3, Pt3, Real, Vec3};

/// `[px, py, pz, sx, sy, sz, r]`
#[derive(Debug, Clone, Copy, Default)]
pub struct CylinderCodec;

impl ShapeCodec for CylinderCodec {
    type Shape = Cylinder3;
    const DIM: usize = 7;

    fn encode_into(shape: &Cylinder3, out: &mut [Real]) {
        debug_assert!(out.len() >= Self::DIM);
        let p = &shape.line.p;
        let s = &shape.line.slope;
        out[..Self::DIM].copy_from_slice(&[p.x, p.y, p.z, s.x, s.y, s.z, shape.radius]);
    }

    fn decode(params: &[Real]) -> Cylinder3 {
        debug_assert!(params.len() >= Self::DIM);
        Cylinder3::new(
            LineParametric3::new(
                Pt3::new(params[0], params[1], params[2]),
                Vec3::new(params[3], params[4], params[5]),
            ),
            params[6],
        )
    }
}
