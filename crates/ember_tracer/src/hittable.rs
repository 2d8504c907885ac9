//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, ObjectId, Ray};
use ember_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Only meaningful for the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material of the surface, if it has one
    pub material: Option<Material>,
    /// Arena slot of the object that was hit, filled in by `World`
    pub object: Option<ObjectId>,
}

impl HitRecord {
    /// Build a record for a hit at parameter `t`.
    ///
    /// `outward_normal` must be unit length and point out of the surface.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: Option<Material>) -> Self {
        let mut rec = Self {
            t,
            p: ray.at(t),
            normal: outward_normal,
            front_face: true,
            material,
            object: None,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    /// The geometric normal pointing out of the surface.
    pub fn outward_normal(&self) -> Vec3 {
        if self.front_face {
            self.normal
        } else {
            -self.normal
        }
    }

    /// The surface material, falling back to the default diffuse reflector.
    pub fn material(&self) -> Material {
        self.material.unwrap_or_default()
    }
}

/// Trait for objects that can be hit by rays.
///
/// This is the only query shading performs against a scene.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 4.0, Vec3::Z, None);

        assert!(rec.front_face);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.outward_normal(), Vec3::Z);
    }

    #[test]
    fn test_back_face_flips_normal() {
        // Ray leaving the surface from inside
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, None);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);
        assert_eq!(rec.outward_normal(), Vec3::Z);
    }

    #[test]
    fn test_material_fallback() {
        let ray = Ray::default();
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, None);
        assert_eq!(rec.material(), Material::default());

        let red = Material::diffuse(Vec3::new(1.0, 0.0, 0.0));
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, Some(red));
        assert_eq!(rec.material(), red);
    }
}
