//! Camera for ray generation.

use crate::{GeometryError, GeometryResult, Ray};
use ember_math::{unit_vector, Vec3};

/// Pinhole camera mapping image-plane coordinates to world-space rays.
///
/// The image plane is the parallelogram
/// `lower_left_corner + u * horizontal + v * vertical` for u, v in [0, 1],
/// with (0, 0) at the bottom-left of the picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Fixed framing at the origin looking down -Z, 2:1 image plane at z = -1.
    pub fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }

    /// Camera at the origin looking down -Z with the given vertical field of
    /// view (degrees) and aspect ratio (width / height).
    pub fn with_fov(vfov: f32, aspect: f32) -> GeometryResult<Self> {
        Self::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, vfov, aspect)
    }

    /// Camera at `look_from` aimed at `look_at`, rolled so that `vup`
    /// projects to the image's up direction.
    ///
    /// Fails when the view direction is degenerate, `vup` is parallel to it,
    /// or the field of view / aspect ratio are out of range.
    pub fn look_at(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect: f32,
    ) -> GeometryResult<Self> {
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(GeometryError::InvalidFov(vfov));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(GeometryError::InvalidAspect(aspect));
        }

        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Orthonormal basis; the camera faces -w
        let w = unit_vector(look_from - look_at).map_err(|_| GeometryError::DegenerateView)?;
        let u = unit_vector(vup.cross(w)).map_err(|_| GeometryError::ParallelUp(vup))?;
        let v = w.cross(u);

        let origin = look_from;
        Ok(Self {
            origin,
            lower_left_corner: origin - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        })
    }

    /// Ray from the camera origin through image-plane point (u, v).
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
