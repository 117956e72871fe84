use crate::{Pt3, Real};
use serde::{Deserialize, Serialize};

/// Sphere with a centre and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere3 {
    pub center: Pt3,
    pub radius: Real,
}

impl Sphere3 {
    pub fn new(center: Pt3, radius: Real) -> Self {
        Self { center, radius }
    }

    pub fn from_coords(x: Real, y: Real, z: Real, radius: Real) -> Self {
        Self::new(Pt3::new(x, y, z), radius)
    }
}
