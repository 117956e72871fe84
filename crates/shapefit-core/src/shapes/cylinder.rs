use super::LineParametric3;
use crate::{Pt3, Real, Vec3};
use serde::{Deserialize, Serialize};

/// Infinite cylinder: an axis line and a radius.
///
/// The axis slope is not required to be unit length; consumers normalise it
/// where the geometry demands a unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder3 {
    pub line: LineParametric3,
    pub radius: Real,
}

impl Cylinder3 {
    pub fn new(line: LineParametric3, radius: Real) -> Self {
        Self { line, radius }
    }

    pub fn from_parts(point: Pt3, axis: Vec3, radius: Real) -> Self {
        Self::new(LineParametric3::new(point, axis), radius)
    }
}
