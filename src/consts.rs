use crate::float::*;

/// Fraction of the diffuse color added as ambient light
pub const AMBIENT_FACTOR: Float = 0.05;
/// Offset of shadow ray origins towards the light
pub const SHADOW_EPSILON: Float = 0.003;
/// Offset of reflected ray origins along the reflected direction
pub const REFLECTION_EPSILON: Float = 0.0001;
/// Hard ceiling for the number of reflection bounces regardless of the scene
pub const MAX_BOUNCES: usize = 8;

#[cfg(not(feature = "single_precision"))]
pub use self::double::*;
#[cfg(feature = "single_precision")]
pub use self::single::*;

#[cfg(not(feature = "single_precision"))]
mod double {
    use super::*;

    /// Length below which a vector can't be normalized
    pub const DEGENERATE_LENGTH: Float = 1e-10;
    pub const PI: Float = std::f64::consts::PI;
}

#[cfg(feature = "single_precision")]
mod single {
    use super::*;

    pub const DEGENERATE_LENGTH: Float = 1e-6;
    pub const PI: Float = std::f32::consts::PI;
}
