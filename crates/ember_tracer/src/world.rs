//! The scene: an arena of owned shapes.

use crate::{
    hittable::{HitRecord, Hittable},
    GeometryResult, Ray, Shape, Sphere,
};
use ember_math::{Interval, Vec3};

/// Stable handle to a shape stored in a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Position of the shape in the world's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A collection of shapes tested as one.
///
/// The world owns its geometry. Shapes are only ever appended, so an
/// `ObjectId` stays valid until `clear` is called.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<Shape>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a shape and return its handle.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ObjectId {
        let id = ObjectId(self.objects.len());
        let shape = shape.into();
        log::debug!("Added object {}: {:?}", id.0, shape);
        self.objects.push(shape);
        id
    }

    /// Look up a shape by handle.
    pub fn get(&self, id: ObjectId) -> Option<&Shape> {
        self.objects.get(id.0)
    }

    /// Iterate over all shapes with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Shape)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, shape)| (ObjectId(i), shape))
    }

    /// Clear all objects from the world.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the world is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// A small sphere resting on a large ground sphere, both looking down -Z.
    pub fn two_spheres() -> GeometryResult<Self> {
        let mut world = Self::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)?);
        world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0)?);
        Ok(world)
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for (id, object) in self.iter() {
            if let Some(mut rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                rec.object = Some(id);
                closest = Some(rec);
            }
        }

        closest
    }
}
