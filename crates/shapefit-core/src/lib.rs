//! Core geometry primitives for `shapefit`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec2`, `Pt3`, ...) and angle helpers,
//! - plain shape value types (lines, spheres, cylinders, ellipses, polygons),
//! - ellipse, polygon and point-set utilities,
//! - point-to-shape distances and intersection tests,
//! - rigid transforms and homographies,
//! - deterministic samplers producing points on shapes.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Shape value types.
pub mod shapes;
/// Conversions and utilities on shapes and point sets.
pub mod geometry;
/// Distances and intersections.
pub mod metric;
/// SE(2), SE(3) and homographies.
pub mod transform;
/// Synthetic point sets lying on shapes.
pub mod synthetic;

pub use math::*;
pub use shapes::*;
