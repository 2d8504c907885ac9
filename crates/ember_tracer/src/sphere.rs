//! Sphere primitive and the closed set of shapes.

use crate::{
    hittable::{HitRecord, Hittable},
    GeometryError, GeometryResult, Material, Ray,
};
use ember_math::{solve_quadratic, Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Option<Material>,
}

impl Sphere {
    /// Create a new sphere without a material.
    ///
    /// The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32) -> GeometryResult<Self> {
        if !center.is_finite() {
            return Err(GeometryError::InvalidCenter(center));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material: None,
        })
    }

    /// Attach a material to this sphere.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> Option<Material> {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let roots = solve_quadratic(a, b, c)?;

        // Nearest root first; fall back to the far one when the near hit is
        // outside the window (e.g. behind a scattered ray's origin).
        let t = if ray_t.surrounds(roots.near) {
            roots.near
        } else if ray_t.surrounds(roots.far) {
            roots.far
        } else {
            return None;
        };

        let outward_normal = (ray.at(t) - self.center) / self.radius;
        Some(HitRecord::new(ray, t, outward_normal, self.material))
    }
}

/// Every kind of geometry the tracer can intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    pub fn material(&self) -> Option<Material> {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}
