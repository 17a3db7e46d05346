use cgmath::prelude::*;
use cgmath::Point3;

use crate::color::Color;
use crate::consts;
use crate::error::SceneError;
use crate::float::*;
use crate::intersect::{Hit, Intersect, Ray};
use crate::light::PointLight;
use crate::material::Material;
use crate::sphere::Sphere;
use crate::util;

/// Immutable description of everything the tracer sees.
/// Can only be constructed through validation so tracing never sees degenerate geometry.
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<PointLight>,
    bounce_limit: usize,
}

impl Scene {
    pub fn new(
        spheres: Vec<Sphere>,
        lights: Vec<PointLight>,
        bounce_limit: usize,
    ) -> Result<Scene, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            if !util::is_finite(sphere.center.to_vec()) {
                return Err(SceneError::NonFinite {
                    what: "sphere",
                    index,
                });
            }
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            let mat = &sphere.material;
            if !mat.diffuse.is_finite() || !mat.specular.is_finite() {
                return Err(SceneError::NonFinite {
                    what: "material of sphere",
                    index,
                });
            }
            if !mat.shininess.is_finite() || mat.shininess <= 0.0 {
                return Err(SceneError::InvalidShininess {
                    index,
                    shininess: mat.shininess,
                });
            }
        }
        for (index, light) in lights.iter().enumerate() {
            if !util::is_finite(light.position.to_vec()) || !light.intensity.is_finite() {
                return Err(SceneError::NonFinite {
                    what: "light",
                    index,
                });
            }
        }
        if bounce_limit > consts::MAX_BOUNCES {
            tracing::warn!(
                "Bounce limit {} exceeds the maximum of {}, tracing will stop at the maximum",
                bounce_limit,
                consts::MAX_BOUNCES
            );
        }
        if lights.is_empty() {
            tracing::warn!(
                "Scene has no lights, only ambient and environment light will be visible"
            );
        }
        Ok(Scene {
            spheres,
            lights,
            bounce_limit,
        })
    }

    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Number of reflection bounces requested by the scene
    pub fn bounce_limit(&self) -> usize {
        self.bounce_limit
    }

    /// Find the nearest intersection in front of the ray
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        for sphere in &self.spheres {
            if let Some(hit) = sphere.intersect(ray) {
                if closest.as_ref().map_or(true, |c| hit.t < c.t) {
                    closest = Some(hit);
                }
            }
        }
        closest
    }

    /// Check if anything lies in front of the ray. The caller is responsible for
    /// offsetting the origin away from the surface it starts from.
    pub fn intersect_shadow(&self, ray: &Ray) -> bool {
        self.spheres
            .iter()
            .any(|sphere| sphere.nearest_root(ray).is_some())
    }
}

/// Incremental scene construction
#[derive(Debug, Default)]
pub struct SceneBuilder {
    spheres: Vec<Sphere>,
    lights: Vec<PointLight>,
    bounce_limit: usize,
}

impl SceneBuilder {
    pub fn sphere(mut self, center: Point3<Float>, radius: Float, material: Material) -> Self {
        self.spheres.push(Sphere::new(center, radius, material));
        self
    }

    pub fn light(mut self, position: Point3<Float>, intensity: Color) -> Self {
        self.lights.push(PointLight::new(position, intensity));
        self
    }

    pub fn bounce_limit(mut self, bounce_limit: usize) -> Self {
        self.bounce_limit = bounce_limit;
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        Scene::new(self.spheres, self.lights, self.bounce_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn p(x: Float, y: Float, z: Float) -> Point3<Float> {
        Point3::new(x, y, z)
    }

    #[test]
    fn rejects_bad_radius() {
        for &radius in &[0.0, -1.0, Float::NAN, Float::INFINITY] {
            let res = Scene::builder()
                .sphere(p(0.0, 0.0, 0.0), 1.0, Material::default())
                .sphere(p(0.0, 0.0, 0.0), radius, Material::default())
                .build();
            match res {
                Err(SceneError::InvalidRadius { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected radius error, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_bad_shininess_and_non_finite() {
        let mat = Material::new(Color::white(), Color::white(), 0.0);
        let res = Scene::builder().sphere(p(0.0, 0.0, 0.0), 1.0, mat).build();
        assert_eq!(
            res.unwrap_err(),
            SceneError::InvalidShininess {
                index: 0,
                shininess: 0.0
            }
        );

        let res = Scene::builder()
            .light(p(0.0, Float::NAN, 0.0), Color::white())
            .build();
        assert_eq!(
            res.unwrap_err(),
            SceneError::NonFinite {
                what: "light",
                index: 0
            }
        );
    }

    #[test]
    fn rejects_non_finite_sphere_and_material() {
        let res = Scene::builder()
            .sphere(p(Float::NAN, 0.0, 0.0), 1.0, Material::default())
            .build();
        assert_eq!(
            res.unwrap_err(),
            SceneError::NonFinite {
                what: "sphere",
                index: 0
            }
        );

        let mat = Material::new(Color::new(Float::NAN, 1.0, 1.0), Color::black(), 10.0);
        let res = Scene::builder()
            .sphere(p(0.0, 0.0, 0.0), 1.0, Material::default())
            .sphere(p(0.0, 0.0, 3.0), 1.0, mat)
            .build();
        assert_eq!(
            res.unwrap_err(),
            SceneError::NonFinite {
                what: "material of sphere",
                index: 1
            }
        );

        let mat = Material::mirror(Color::new(1.0, Float::INFINITY, 1.0), 10.0);
        let res = Scene::builder().sphere(p(0.0, 0.0, 0.0), 1.0, mat).build();
        assert_eq!(
            res.unwrap_err(),
            SceneError::NonFinite {
                what: "material of sphere",
                index: 0
            }
        );
    }

    #[test]
    fn accepts_large_bounce_limit() {
        let scene = Scene::builder()
            .bounce_limit(consts::MAX_BOUNCES + 10)
            .build()
            .unwrap();
        assert_eq!(scene.bounce_limit(), consts::MAX_BOUNCES + 10);
    }

    #[test]
    fn nearest_hit_regardless_of_order() {
        let near = Material::matte(Color::new(1.0, 0.0, 0.0));
        let far = Material::matte(Color::new(0.0, 1.0, 0.0));
        let scene = Scene::builder()
            .sphere(p(0.0, 0.0, 6.0), 1.0, far)
            .sphere(p(0.0, 0.0, 3.0), 1.0, near)
            .sphere(p(0.0, 0.0, 5.0), 2.0, far)
            .build()
            .unwrap();
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::unit_z()).unwrap();
        let hit = scene.intersect(&ray).unwrap();
        assert_eq!(hit.t, 2.0);
        assert_eq!(*hit.mat, near);
        assert_eq!(hit.p, p(0.0, 0.0, 2.0));
    }

    #[test]
    fn hit_invariants() {
        let scene = Scene::builder()
            .sphere(p(0.3, -0.2, 4.0), 1.5, Material::default())
            .build()
            .unwrap();
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::new(0.1, 0.05, 1.0)).unwrap();
        let hit = scene.intersect(&ray).unwrap();
        assert!(hit.t > 0.0);
        assert!((hit.n.magnitude() - 1.0).abs() < 1e-6);
        // Normal points from the center through the hit point
        assert!(hit.n.dot(hit.p - p(0.3, -0.2, 4.0)) > 0.0);
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::builder().build().unwrap();
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::unit_z()).unwrap();
        assert!(scene.intersect(&ray).is_none());
        assert!(!scene.intersect_shadow(&ray));
    }

    #[test]
    fn shadow_ignores_geometry_behind() {
        let scene = Scene::builder()
            .sphere(p(0.0, 0.0, -3.0), 1.0, Material::default())
            .build()
            .unwrap();
        let forward = Ray::new(p(0.0, 0.0, 0.0), Vector3::unit_z()).unwrap();
        let backward = Ray::new(p(0.0, 0.0, 0.0), -Vector3::unit_z()).unwrap();
        assert!(!scene.intersect_shadow(&forward));
        assert!(scene.intersect_shadow(&backward));
    }
}
