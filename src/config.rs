use crate::consts;
use crate::float::*;
use crate::scene::Scene;

#[derive(Clone, Debug, PartialEq)]
pub enum RenderMode {
    /// Recursive reflection with direct lighting
    Shaded,
    /// Debug
    Debug(DebugMode),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DebugMode {
    /// Normals of the primary hit
    Normals,
}

/// Constants of the shading model
#[derive(Clone, Debug)]
pub struct TraceConfig {
    /// Fraction of the diffuse color used as ambient light
    pub ambient: Float,
    /// Offset of shadow rays towards the light
    pub shadow_epsilon: Float,
    /// Offset of reflected rays along the reflection
    pub reflection_epsilon: Float,
    /// Maximum number of bounces, never exceeds consts::MAX_BOUNCES
    pub max_bounces: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ambient: consts::AMBIENT_FACTOR,
            shadow_epsilon: consts::SHADOW_EPSILON,
            reflection_epsilon: consts::REFLECTION_EPSILON,
            max_bounces: consts::MAX_BOUNCES,
        }
    }
}

impl TraceConfig {
    /// Number of reflection bounces allowed in the given scene
    pub fn effective_bounces(&self, scene: &Scene) -> usize {
        scene
            .bounce_limit()
            .min(self.max_bounces)
            .min(consts::MAX_BOUNCES)
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Width of the render target in pixels
    pub width: u32,
    /// Height of the render target in pixels
    pub height: u32,
    /// Maximum number of threads to use for rendering
    pub max_threads: usize,
    /// Samples per pixel per direction. Squared to get the total samples per pixel.
    pub samples_per_dir: usize,
    /// Number of passes over the image. Passes are averaged.
    pub iterations: usize,
    /// Source of the image color
    pub render_mode: RenderMode,
    pub trace: TraceConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_threads: num_cpus::get_physical().max(1),
            samples_per_dir: 2,
            iterations: 1,
            render_mode: RenderMode::Shaded,
            trace: TraceConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn preview() -> Self {
        Self {
            width: 400,
            height: 300,
            samples_per_dir: 1,
            ..Self::default()
        }
    }

    pub fn high_quality() -> Self {
        Self {
            width: 1600,
            height: 1200,
            samples_per_dir: 4,
            iterations: 2,
            ..Self::default()
        }
    }

    pub fn debug_normals() -> Self {
        Self {
            render_mode: RenderMode::Debug(DebugMode::Normals),
            samples_per_dir: 1,
            ..Self::preview()
        }
    }

    pub fn single_threaded(self) -> Self {
        tracing::info!("Running single threaded!");
        Self {
            max_threads: 1,
            ..self
        }
    }

    /// Total samples per pixel per iteration
    pub fn samples_per_pixel(&self) -> usize {
        self.samples_per_dir.pow(2)
    }
}
