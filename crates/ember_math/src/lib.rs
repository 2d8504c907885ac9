//! Ember math - vectors, rays and intervals for the ray tracer.
//!
//! All geometry is single precision: `Vec3` is `glam::Vec3` and every
//! scalar in the pipeline is `f32`.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod quadratic;
mod ray;
mod vector;

pub use interval::Interval;
pub use quadratic::{solve_quadratic, QuadraticRoots};
pub use ray::Ray;
pub use vector::{lerp, reflect, unit_vector, MathError, MathResult};
