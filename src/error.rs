use thiserror::Error;

use crate::float::Float;

/// Problems that make a scene unusable for tracing
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("sphere {index} has invalid radius {radius} (must be finite and positive)")]
    InvalidRadius { index: usize, radius: Float },
    #[error("sphere {index} has invalid shininess {shininess} (must be finite and positive)")]
    InvalidShininess { index: usize, shininess: Float },
    #[error("{what} {index} has non-finite components")]
    NonFinite { what: &'static str, index: usize },
}

/// Rays that can't be traced
#[derive(Debug, Error, PartialEq)]
pub enum RayError {
    #[error("ray direction has zero length or non-finite components")]
    DegenerateDirection,
    #[error("ray origin has non-finite components")]
    NonFiniteOrigin,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render target has zero size ({width}x{height})")]
    EmptyTarget { width: u32, height: u32 },
    #[error("camera projection is not invertible")]
    SingularCamera,
    #[error("render worker panicked")]
    WorkerPanicked,
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),
}
