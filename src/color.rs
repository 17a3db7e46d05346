use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign};

use cgmath::prelude::*;
use cgmath::Vector3;

use crate::float::*;

/// Convert a float color component to u8 clamping it to [0, 1] first
pub fn to_u8(c: Float) -> u8 {
    (c.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Linear RGB color. Components are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    color: Vector3<Float>,
}

impl Color {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            color: Vector3::new(r, g, b),
        }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn gray(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Map a unit normal to a visible color
    pub fn from_normal(n: Vector3<Float>) -> Self {
        let c_vec = (0.5 * n).add_element_wise(0.5);
        Self::from(c_vec)
    }

    /// Sum of the components
    pub fn sum(&self) -> Float {
        self.color.sum()
    }

    pub fn is_black(&self) -> bool {
        self.color.x == 0.0 && self.color.y == 0.0 && self.color.z == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.color.x.is_finite() && self.color.y.is_finite() && self.color.z.is_finite()
    }

    pub fn r(&self) -> Float {
        self.color.x
    }

    pub fn g(&self) -> Float {
        self.color.y
    }

    pub fn b(&self) -> Float {
        self.color.z
    }

    /// Clamp to displayable range and append alpha
    pub fn to_rgba8(self, alpha: Float) -> [u8; 4] {
        [to_u8(self.r()), to_u8(self.g()), to_u8(self.b()), to_u8(alpha)]
    }
}

impl Index<usize> for Color {
    type Output = Float;

    fn index(&self, i: usize) -> &Float {
        &self.color[i]
    }
}

impl From<Vector3<Float>> for Color {
    fn from(vec: Vector3<Float>) -> Self {
        Self { color: vec }
    }
}

impl From<[f32; 3]> for Color {
    fn from(arr: [f32; 3]) -> Self {
        Self::new(arr[0].to_float(), arr[1].to_float(), arr[2].to_float())
    }
}

impl Into<[f32; 3]> for Color {
    fn into(self) -> [f32; 3] {
        [self.r() as f32, self.g() as f32, self.b() as f32]
    }
}

// Arithmetic operations

impl Add for Color {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.color += rhs.color;
    }
}

impl Div<Float> for Color {
    type Output = Self;

    fn div(mut self, rhs: Float) -> Self {
        self /= rhs;
        self
    }
}

impl DivAssign<Float> for Color {
    fn div_assign(&mut self, rhs: Float) {
        let recip = rhs.recip();
        self.color *= recip;
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Self) {
        self.color.mul_assign_element_wise(rhs.color);
    }
}

impl Mul<Float> for Color {
    type Output = Self;

    fn mul(mut self, rhs: Float) -> Self {
        self *= rhs;
        self
    }
}

impl MulAssign<Float> for Color {
    fn mul_assign(&mut self, rhs: Float) {
        self.color *= rhs;
    }
}

impl Mul<Color> for Float {
    type Output = Color;

    // Delegate to Color Mul
    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wise_products() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 0.25);
        assert_eq!(a * b, Color::new(1.0, 0.5, 0.5));
        assert_eq!(2.0 * a, Color::new(1.0, 2.0, 4.0));
        assert_eq!((a + b).sum(), 6.25);
    }

    #[test]
    fn rgba8_clamps() {
        let c = Color::new(-0.5, 0.5, 3.0);
        assert_eq!(c.to_rgba8(1.0), [0, 128, 255, 255]);
        assert_eq!(c.to_rgba8(0.0)[3], 0);
    }
}
