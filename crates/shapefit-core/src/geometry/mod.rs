//! Conversions and closed-form utilities on [`crate::shapes`].

pub mod ellipse;
pub mod points;
pub mod polygons;

pub use ellipse::{
    closest_point, compute_angle, compute_point, compute_tangent, evaluate_quadratic,
    evaluate_rotated, quadratic_to_rotated, rotated_to_quadratic, tangent_lines, EllipseError,
    CLOSEST_POINT_MAX_ITERS,
};
pub use points::{bounding, bounding_length, mean, mean_of_two, order_ccw};
pub use polygons::{
    bounding_rectangle, is_ccw, rectangle_length_to_quad, rectangle_to_quad, signed_area,
};
