//! Vector helpers layered over `glam::Vec3`.
//!
//! glam already supplies the arithmetic, dot, cross and length. What it does
//! not do is refuse to normalize a zero vector, so `unit_vector` reports that
//! case instead of letting NaNs leak into the image.

use crate::Vec3;
use thiserror::Error;

/// Errors raised by vector operations with preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Cannot normalize a non-finite vector: {0}")]
    NonFinite(Vec3),
}

/// Result type for vector operations.
pub type MathResult<T> = Result<T, MathError>;

/// Return `v / |v|`.
///
/// Fails when `v` is the zero vector or has non-finite components.
pub fn unit_vector(v: Vec3) -> MathResult<Vec3> {
    if !v.is_finite() {
        return Err(MathError::NonFinite(v));
    }

    // Rescale so the largest component is 1; squaring the raw components
    // overflows above ~1.8e19 and loses precision near zero.
    let scale = v.abs().max_element();
    if scale == 0.0 {
        return Err(MathError::ZeroLength);
    }
    (v / scale).try_normalize().ok_or(MathError::ZeroLength)
}

/// Linear blend `a*(1-t) + b*t`.
///
/// Written in this form so `t == 0` yields `a` and `t == 1` yields `b`
/// bit-for-bit.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
