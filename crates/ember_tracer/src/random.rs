//! Random sampling helpers.
//!
//! Generators are always passed in by the caller so renders are
//! reproducible from a seed.

use ember_math::Vec3;
use rand::{Rng, RngCore};

/// Generate a random f32 in [0.0, 1.0).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Sample a random offset in the unit square [0, 1) x [0, 1).
///
/// Used to jitter a sample inside a pixel's footprint.
pub fn sample_square(rng: &mut dyn RngCore) -> (f32, f32) {
    (gen_f32(rng), gen_f32(rng))
}

/// Sample a random point strictly inside the unit sphere.
///
/// Rejection sampling: draw points in the cube [-1, 1]^3 until one lands
/// inside the sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
