//! Shading strategies: what color a ray carries back to the camera.

use crate::{Color, Hittable, Ray};
use ember_math::{lerp, Interval, Vec3};
use rand::RngCore;

/// Vertical gradient drawn wherever a ray escapes the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Color for rays pointing straight down
    pub tone_a: Color,
    /// Color for rays pointing straight up
    pub tone_b: Color,
}

impl Background {
    pub fn new(tone_a: Color, tone_b: Color) -> Self {
        Self { tone_a, tone_b }
    }

    /// A single flat color.
    pub fn solid(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Blend the two tones by the height of the ray direction.
    ///
    /// The normalized direction's y component is mapped from [-1, 1] to
    /// [0, 1]: straight down gives `tone_a`, straight up gives `tone_b`.
    pub fn color(&self, ray: &Ray) -> Color {
        debug_assert!(
            ray.direction() != Vec3::ZERO,
            "background queried with a zero-length ray direction"
        );
        let unit_direction = ray.direction().normalize_or_zero();
        let ratio = 0.5 * (unit_direction.y + 1.0);
        lerp(self.tone_a, self.tone_b, ratio)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(Color::new(1.0, 1.0, 1.0), Color::new(0.5, 0.7, 1.0))
    }
}

/// Which shading model the renderer applies at every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Ignore geometry, draw only the background gradient
    Gradient,
    /// Visualize outward surface normals as RGB
    Normals,
    /// Diffuse light bouncing
    #[default]
    Diffuse,
}

/// Map the outward normal of the nearest hit from [-1, 1] to [0, 1].
///
/// Rays that miss everything get the background.
pub fn normal_color(ray: &Ray, world: &dyn Hittable, background: &Background, t_min: f32) -> Color {
    match world.hit(ray, Interval::from_min(t_min)) {
        Some(rec) => 0.5 * (rec.outward_normal() + Vec3::ONE),
        None => background.color(ray),
    }
}

/// Trace a diffuse light path for at most `max_depth` surface hits.
///
/// Each hit scatters the ray and multiplies the path throughput by the
/// surface albedo. A path that escapes picks up the background; one that is
/// still bouncing after `max_depth` hits contributes black.
pub fn diffuse_color(
    ray: &Ray,
    world: &dyn Hittable,
    background: &Background,
    t_min: f32,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..max_depth {
        let Some(rec) = world.hit(&ray, Interval::from_min(t_min)) else {
            return throughput * background.color(&ray);
        };

        let scatter = rec.material().scatter(&rec, rng);
        throughput *= scatter.attenuation;
        ray = scatter.scattered;
    }

    Color::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere, World};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const T_MIN: f32 = 1e-4;

    #[test]
    fn test_gradient_endpoints() {
        let bg = Background::default();

        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(bg.color(&up), bg.tone_b);

        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(bg.color(&down), bg.tone_a);
    }

    #[test]
    fn test_gradient_ignores_direction_length() {
        let bg = Background::new(Color::ZERO, Color::ONE);

        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 250.0, 0.0));
        assert_eq!(bg.color(&up), Color::ONE);

        let level = bg.color(&Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)));
        assert!((level - Color::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_solid_background() {
        let bg = Background::solid(Color::new(0.2, 0.3, 0.4));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.3, -1.0));
        assert!((bg.color(&ray) - Color::new(0.2, 0.3, 0.4)).length() < 1e-6);
    }

    #[test]
    fn test_normal_color() {
        let world = World::two_spheres().unwrap();
        let bg = Background::default();

        // Front of the small sphere faces +Z
        let color = normal_color(&Ray::default(), &world, &bg, T_MIN);
        assert!((color - Color::new(0.5, 0.5, 1.0)).length() < 1e-4);

        // Straight up escapes
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(normal_color(&up, &world, &bg, T_MIN), bg.tone_b);
    }

    #[test]
    fn test_diffuse_miss_returns_background() {
        let world = World::two_spheres().unwrap();
        let bg = Background::default();
        let mut rng = StdRng::seed_from_u64(42);

        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(diffuse_color(&up, &world, &bg, T_MIN, 50, &mut rng), bg.tone_b);
    }

    #[test]
    fn test_diffuse_single_bounce_attenuates() {
        // A lone sphere under a white sky: every scattered ray leaving the
        // front face escapes, so one bounce gives exactly albedo * sky
        let mut world = World::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0).unwrap());
        let bg = Background::solid(Color::ONE);
        let mut rng = StdRng::seed_from_u64(5);

        let color = diffuse_color(&Ray::default(), &world, &bg, T_MIN, 50, &mut rng);
        assert!((color - Color::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_diffuse_uses_material_albedo() {
        let mut world = World::new();
        let albedo = Color::new(0.8, 0.4, 0.2);
        world.add(
            Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0)
                .unwrap()
                .with_material(Material::diffuse(albedo)),
        );
        let bg = Background::solid(Color::ONE);
        let mut rng = StdRng::seed_from_u64(9);

        let color = diffuse_color(&Ray::default(), &world, &bg, T_MIN, 50, &mut rng);
        assert!((color - albedo).length() < 1e-6);
    }

    #[test]
    fn test_diffuse_terminates_when_trapped() {
        // Camera inside a closed sphere: no path can escape, the bounce
        // limit must end the walk
        let mut world = World::new();
        world.add(Sphere::new(Vec3::ZERO, 10.0).unwrap());
        let bg = Background::default();
        let mut rng = StdRng::seed_from_u64(1);

        let color = diffuse_color(&Ray::default(), &world, &bg, T_MIN, 16, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_diffuse_zero_depth_is_black() {
        let world = World::new();
        let bg = Background::default();
        let mut rng = StdRng::seed_from_u64(1);

        let color = diffuse_color(&Ray::default(), &world, &bg, T_MIN, 0, &mut rng);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_diffuse_is_reproducible() {
        let world = World::two_spheres().unwrap();
        let bg = Background::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, -0.2, -1.0));

        let a = diffuse_color(&ray, &world, &bg, T_MIN, 50, &mut StdRng::seed_from_u64(77));
        let b = diffuse_color(&ray, &world, &bg, T_MIN, 50, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
