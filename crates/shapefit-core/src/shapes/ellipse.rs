use crate::{Pt2, Real};
use serde::{Deserialize, Serialize};

/// Ellipse in centre / semi-axes / orientation form.
///
/// `a` is the semi-axis along the direction `phi` (radians, counter-clockwise
/// from +x) and `b` the perpendicular one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseRotated {
    pub center: Pt2,
    pub a: Real,
    pub b: Real,
    pub phi: Real,
}

impl EllipseRotated {
    pub fn new(x0: Real, y0: Real, a: Real, b: Real, phi: Real) -> Self {
        Self {
            center: Pt2::new(x0, y0),
            a,
            b,
            phi,
        }
    }
}

/// Ellipse as a quadratic curve
/// `a·x² + 2b·xy + c·y² + 2d·x + 2e·y + f = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseQuadratic {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
    pub e: Real,
    pub f: Real,
}

impl EllipseQuadratic {
    pub fn new(a: Real, b: Real, c: Real, d: Real, e: Real, f: Real) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// `true` if the quadratic part is definite (`ac - b² > 0`).
    pub fn is_ellipse(&self) -> bool {
        self.a * self.c - self.b * self.b > 0.0
    }
}
