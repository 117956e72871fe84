//! Deterministic synthetic data for tests and demos.
//!
//! Samplers place points exactly on a shape with a stable ordering; callers
//! add their own noise (tests use a seeded `StdRng`).

pub mod surfaces;

pub use surfaces::{sample_cylinder, sample_ellipse, sample_sphere};
