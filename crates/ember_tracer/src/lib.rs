//! Ember tracer - CPU sphere ray tracing.
//!
//! Casts rays from a pinhole camera into a scene of spheres, shades each hit
//! with one of three strategies (background gradient, surface normals or
//! diffuse bouncing) and writes the result as a plain-text PPM image.
//!
//! Rendering is single-threaded and deterministic for a given seed: every
//! random draw goes through the generator passed to [`render`].

mod camera;
mod error;
mod hittable;
mod image;
mod material;
mod ppm;
mod random;
mod renderer;
mod shading;
mod sphere;
mod world;

pub use camera::Camera;
pub use error::{GeometryError, GeometryResult, RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use image::ImageBuffer;
pub use material::{Color, Material, ScatterResult, DEFAULT_REFLECTANCE};
pub use ppm::{linear_to_gamma, write_ppm, Rgb8};
pub use random::{gen_f32, random_in_unit_sphere, sample_square};
pub use renderer::{render, render_pixel, render_to_path, ray_color, RenderConfig};
pub use shading::{diffuse_color, normal_color, Background, Shading};
pub use sphere::{Shape, Sphere};
pub use world::{ObjectId, World};

/// Re-export Vec3 and common math types from ember_math
pub use ember_math::{Interval, Ray, Vec3};
