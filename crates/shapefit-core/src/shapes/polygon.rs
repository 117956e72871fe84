use crate::{Pt2, Real};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Simple polygon given by its ordered vertices. Closing edge is implicit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon2 {
    pub vertices: Vec<Pt2>,
}

impl Polygon2 {
    pub fn new(vertices: Vec<Pt2>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterator over edges `(v[i], v[i + 1])`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&Pt2, &Pt2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}

/// Axis-aligned rectangle with corners `p0` (min) and `p1` (max).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle2 {
    pub p0: Pt2,
    pub p1: Pt2,
}

impl Rectangle2 {
    pub fn new(x0: Real, y0: Real, x1: Real, y1: Real) -> Self {
        Self {
            p0: Pt2::new(x0, y0),
            p1: Pt2::new(x1, y1),
        }
    }

    pub fn width(&self) -> Real {
        self.p1.x - self.p0.x
    }

    pub fn height(&self) -> Real {
        self.p1.y - self.p0.y
    }

    pub fn area(&self) -> Real {
        self.width() * self.height()
    }
}

/// Integer pixel rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangleLength2I {
    pub x0: i32,
    pub y0: i32,
    pub width: i32,
    pub height: i32,
}

impl RectangleLength2I {
    pub fn new(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }
}

/// Four-sided polygon with vertices `a, b, c, d` in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub a: Pt2,
    pub b: Pt2,
    pub c: Pt2,
    pub d: Pt2,
}

impl Quadrilateral {
    pub fn new(a: Pt2, b: Pt2, c: Pt2, d: Pt2) -> Self {
        Self { a, b, c, d }
    }

    pub fn vertices(&self) -> [Pt2; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// Integer axis-aligned box with corners `p0` (min, inclusive) and `p1`
/// (max, exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cube3I {
    pub p0: Point3<i32>,
    pub p1: Point3<i32>,
}

impl Cube3I {
    pub fn new(x0: i32, y0: i32, z0: i32, x1: i32, y1: i32, z1: i32) -> Self {
        Self {
            p0: Point3::new(x0, y0, z0),
            p1: Point3::new(x1, y1, z1),
        }
    }

    pub fn length_x(&self) -> i32 {
        self.p1.x - self.p0.x
    }

    pub fn length_y(&self) -> i32 {
        self.p1.y - self.p0.y
    }

    pub fn length_z(&self) -> i32 {
        self.p1.z - self.p0.z
    }

    pub fn volume(&self) -> i64 {
        self.length_x() as i64 * self.length_y() as i64 * self.length_z() as i64
    }

    /// `true` if the integer point lies inside the half-open box.
    pub fn contains(&self, p: &Point3<i32>) -> bool {
        (self.p0.x..self.p1.x).contains(&p.x)
            && (self.p0.y..self.p1.y).contains(&p.y)
            && (self.p0.z..self.p1.z).contains(&p.z)
    }
}
