//! Distances between points and shapes, and intersection tests.

mod distance;
mod intersection;

pub use distance::{
    distance_ellipse, distance_line2, distance_line3, distance_segment2, distance_signed_cylinder,
    distance_signed_sphere,
};
pub use intersection::{
    contains, contains_rect, intersection_general, intersection_line_segment,
    intersection_segments,
};
