//! Whitted-style ray tracer for scenes of spheres and point lights.
//!
//! Primary rays are traced through [`tracer::trace`], which shades the nearest hit with
//! Blinn-Phong lighting and follows mirror reflections up to a bounded depth, falling back
//! to an [`environment::Environment`] whenever a ray escapes the scene.

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod environment;
pub mod error;
pub mod float;
pub mod intersect;
pub mod light;
pub mod material;
pub mod presets;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod tracer;
pub mod util;

pub use crate::float::Float;
