//! Surface materials.
//!
//! There is a single diffuse model. Surfaces without a material reflect
//! half of the incoming light on every channel.

use crate::{hittable::HitRecord, random::random_in_unit_sphere, Ray};
use ember_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Reflectance used by surfaces that carry no material.
pub const DEFAULT_REFLECTANCE: f32 = 0.5;

/// How a surface interacts with light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian-style diffuse reflector modulating light by `albedo`.
    Diffuse { albedo: Color },
}

/// The outcome of scattering a ray off a surface.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Fraction of the incoming light kept, per channel
    pub attenuation: Color,
    /// The bounced ray, starting at the hit point
    pub scattered: Ray,
}

impl Material {
    /// Create a diffuse material with the given albedo color.
    pub fn diffuse(albedo: Color) -> Self {
        Material::Diffuse { albedo }
    }

    /// Fraction of light reflected, per channel.
    pub fn albedo(&self) -> Color {
        match self {
            Material::Diffuse { albedo } => *albedo,
        }
    }

    /// Scatter a ray that hit this material.
    ///
    /// The new direction points from the hit point toward a random point in
    /// the unit sphere tangent to the surface, centered at `p + normal`.
    pub fn scatter(&self, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
        match self {
            Material::Diffuse { albedo } => {
                let target = rec.p + rec.normal + random_in_unit_sphere(rng);
                let mut scatter_direction = target - rec.p;

                // Catch degenerate scatter direction
                if scatter_direction.length_squared() < 1e-8 {
                    scatter_direction = rec.normal;
                }

                ScatterResult {
                    attenuation: *albedo,
                    scattered: Ray::new(rec.p, scatter_direction),
                }
            }
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Diffuse {
            albedo: Color::splat(DEFAULT_REFLECTANCE),
        }
    }
}
