//! Error types for scene construction and rendering.

use std::path::PathBuf;

use ember_math::Vec3;
use thiserror::Error;

/// Errors raised when building geometry or cameras from degenerate input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Sphere center must be finite, got {0}")]
    InvalidCenter(Vec3),

    #[error("Camera look_from and look_at must be distinct points")]
    DegenerateView,

    #[error("Camera up vector {0} is parallel to the view direction")]
    ParallelUp(Vec3),

    #[error("Vertical field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Aspect ratio must be positive and finite, got {0}")]
    InvalidAspect(f32),
}

/// Result type for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while rendering or writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
