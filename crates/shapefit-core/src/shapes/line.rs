use crate::{Pt2, Pt3, Real, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// 2D line `p + t·slope`. The slope is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParametric2 {
    pub p: Pt2,
    pub slope: Vec2,
}

impl LineParametric2 {
    pub fn new(p: Pt2, slope: Vec2) -> Self {
        Self { p, slope }
    }

    /// Line through two points, with `slope = b - a`.
    pub fn from_points(a: &Pt2, b: &Pt2) -> Self {
        Self { p: *a, slope: b - a }
    }

    pub fn point_at(&self, t: Real) -> Pt2 {
        self.p + self.slope * t
    }

    /// Direction angle of the slope in radians.
    pub fn angle(&self) -> Real {
        self.slope.y.atan2(self.slope.x)
    }

    /// Replace the slope with a unit vector at `angle` radians.
    pub fn set_angle(&mut self, angle: Real) {
        let (s, c) = angle.sin_cos();
        self.slope = Vec2::new(c, s);
    }
}

/// 3D line `p + t·slope`. The slope is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParametric3 {
    pub p: Pt3,
    pub slope: Vec3,
}

impl LineParametric3 {
    pub fn new(p: Pt3, slope: Vec3) -> Self {
        Self { p, slope }
    }

    pub fn point_at(&self, t: Real) -> Pt3 {
        self.p + self.slope * t
    }
}

/// Finite 2D segment between `a` and `b` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2 {
    pub a: Pt2,
    pub b: Pt2,
}

impl LineSegment2 {
    pub fn new(a: Pt2, b: Pt2) -> Self {
        Self { a, b }
    }

    pub fn from_coords(x0: Real, y0: Real, x1: Real, y1: Real) -> Self {
        Self::new(Pt2::new(x0, y0), Pt2::new(x1, y1))
    }

    /// Vector from `a` to `b`.
    pub fn slope(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn length(&self) -> Real {
        self.slope().norm()
    }

    pub fn length_squared(&self) -> Real {
        self.slope().norm_squared()
    }
}

/// 2D line in general form `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeneral2 {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl LineGeneral2 {
    pub fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    /// Line passing through two distinct points, normalised.
    pub fn through(p: &Pt2, q: &Pt2) -> Self {
        let mut line = Self {
            a: p.y - q.y,
            b: q.x - p.x,
            c: p.x * q.y - q.x * p.y,
        };
        line.normalize();
        line
    }

    /// Scale so that `a² + b² = 1`; then `evaluate` is a signed distance.
    ///
    /// A degenerate line (`a = b = 0`) is left untouched.
    pub fn normalize(&mut self) {
        let n = self.a.hypot(self.b);
        if n > 0.0 {
            self.a /= n;
            self.b /= n;
            self.c /= n;
        }
    }

    pub fn evaluate(&self, p: &Pt2) -> Real {
        self.a * p.x + self.b * p.y + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_line_through_points_contains_them() {
        let p = Pt2::new(1.0, 2.0);
        let q = Pt2::new(-3.0, 0.5);
        let line = LineGeneral2::through(&p, &q);
        assert!(line.evaluate(&p).abs() < 1e-12);
        assert!(line.evaluate(&q).abs() < 1e-12);
        assert!((line.a.hypot(line.b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn segment_length() {
        let seg = LineSegment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(seg.length(), 5.0);
        assert_eq!(seg.length_squared(), 25.0);
    }

    #[test]
    fn line_from_points_hits_both_ends() {
        let a = Pt2::new(1.0, -2.0);
        let b = Pt2::new(4.0, 2.0);
        let line = LineParametric2::from_points(&a, &b);
        assert_eq!(line.point_at(0.0), a);
        assert_eq!(line.point_at(1.0), b);
        assert_eq!(line.slope, LineSegment2::new(a, b).slope());
    }

    #[test]
    fn parametric_angle_roundtrip() {
        let mut line = LineParametric2::new(Pt2::origin(), Vec2::new(1.0, 0.0));
        line.set_angle(0.7);
        assert!((line.angle() - 0.7).abs() < 1e-12);
        let p = line.point_at(2.0);
        assert!((p.coords.norm() - 2.0).abs() < 1e-12);
    }
}
