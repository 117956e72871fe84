//! Plain value types for geometric shapes.
//!
//! Every shape is a small `Copy` struct with public fields. Conversions and
//! metrics live in [`crate::geometry`] and [`crate::metric`].

mod cylinder;
mod ellipse;
mod line;
mod polygon;
mod sphere;

pub use cylinder::Cylinder3;
pub use ellipse::{EllipseQuadratic, EllipseRotated};
pub use line::{LineGeneral2, LineParametric2, LineParametric3, LineSegment2};
pub use polygon::{Cube3I, Polygon2, Quadrilateral, Rectangle2, RectangleLength2I};
pub use sphere::Sphere3;
