use crate::color::Color;
use crate::float::*;

/// Blinn-Phong surface description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse reflectance, also scales the ambient term
    pub diffuse: Color,
    /// Specular reflectance, also the mirror reflectivity for bounces
    pub specular: Color,
    /// Specular exponent
    pub shininess: Float,
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, shininess: Float) -> Material {
        Material {
            diffuse,
            specular,
            shininess,
        }
    }

    /// Purely diffuse material
    pub fn matte(diffuse: Color) -> Material {
        Material::new(diffuse, Color::black(), 1.0)
    }

    /// Perfect mirror without any diffuse response
    pub fn mirror(specular: Color, shininess: Float) -> Material {
        Material::new(Color::black(), specular, shininess)
    }

    /// Does the material reflect anything along the mirror direction
    pub fn is_reflective(&self) -> bool {
        self.specular.sum() > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::matte(Color::white())
    }
}
