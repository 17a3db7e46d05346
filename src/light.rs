use cgmath::Point3;

use crate::color::Color;
use crate::float::*;

/// Infinitesimal light source emitting equally in all directions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3<Float>,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Point3<Float>, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// White light of the given strength
    pub fn white(position: Point3<Float>, strength: Float) -> Self {
        Self::new(position, Color::gray(strength))
    }
}
