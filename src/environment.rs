//! Background radiance for rays that leave the scene.

use cgmath::Vector3;

use crate::color::Color;
use crate::float::*;

/// Maps a unit direction to the color seen along it
pub trait Environment: Send + Sync {
    fn lookup(&self, dir: Vector3<Float>) -> Color;
}

impl<F> Environment for F
where
    F: Fn(Vector3<Float>) -> Color + Send + Sync,
{
    fn lookup(&self, dir: Vector3<Float>) -> Color {
        self(dir)
    }
}

/// Same color in every direction
#[derive(Clone, Copy, Debug)]
pub struct Uniform(pub Color);

impl Environment for Uniform {
    fn lookup(&self, _dir: Vector3<Float>) -> Color {
        self.0
    }
}

/// Vertical gradient from the horizon color (looking down) to the zenith color (looking up)
#[derive(Clone, Copy, Debug)]
pub struct Sky {
    pub zenith: Color,
    pub horizon: Color,
}

impl Sky {
    pub fn new(zenith: Color, horizon: Color) -> Self {
        Self { zenith, horizon }
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self::new(Color::new(0.1, 0.15, 0.4), Color::new(0.5, 0.45, 0.35))
    }
}

impl Environment for Sky {
    fn lookup(&self, dir: Vector3<Float>) -> Color {
        let t = (0.5 * dir.y + 0.5).max(0.0).min(1.0).powi(2);
        (1.0 - t) * self.horizon + t * self.zenith
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_gradient_ends() {
        let sky = Sky::default();
        assert_eq!(sky.lookup(Vector3::unit_y()), sky.zenith);
        assert_eq!(sky.lookup(-Vector3::unit_y()), sky.horizon);
        let side = sky.lookup(Vector3::unit_x());
        assert!((side.b() - (0.75 * 0.35 + 0.25 * 0.4)).abs() < 1e-6);
    }

    #[test]
    fn closures_are_environments() {
        let env = |dir: Vector3<Float>| Color::from_normal(dir);
        assert_eq!(env.lookup(Vector3::unit_z()), Color::new(0.5, 0.5, 1.0));
        assert_eq!(Uniform(Color::white()).lookup(Vector3::unit_x()), Color::white());
    }
}
