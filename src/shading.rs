use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::color::Color;
use crate::config::TraceConfig;
use crate::float::*;
use crate::intersect::Ray;
use crate::material::Material;
use crate::scene::Scene;
use crate::util;

/// Direct Blinn-Phong lighting from every scene light at a surface point.
///
/// The result starts from one ambient term. Every light then adds another ambient term,
/// plus diffuse and specular if the light isn't occluded. Nothing is clamped.
pub fn shade(
    mat: &Material,
    p: Point3<Float>,
    n: Vector3<Float>,
    view: Vector3<Float>,
    scene: &Scene,
    config: &TraceConfig,
) -> Color {
    let ambient = config.ambient * mat.diffuse;
    let n = util::try_normalize(n).unwrap_or(n);
    let mut c = ambient;
    for light in scene.lights() {
        let light_dir = match util::try_normalize(light.position - p) {
            Some(dir) => dir,
            // Light lies on the surface so there is no direction to shade with
            None => {
                c += ambient;
                continue;
            }
        };
        let shadow_ray = Ray::offset(p, light_dir, config.shadow_epsilon);
        if scene.intersect_shadow(&shadow_ray) {
            c += ambient;
            continue;
        }
        let cos_t = n.dot(light_dir).max(0.0);
        let diffuse = mat.diffuse * light.intensity * cos_t;
        // View and light can be exactly opposite
        let specular = match util::try_normalize(view + light_dir) {
            Some(half) => {
                let cos_h = n.dot(half).max(0.0);
                mat.specular * light.intensity * cos_h.powf(mat.shininess)
            }
            None => Color::black(),
        };
        c += ambient + diffuse + specular;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::PointLight;
    use crate::sphere::Sphere;

    fn assert_close(a: Color, b: Color) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-6, "{:?} != {:?}", a, b);
        }
    }

    fn p(x: Float, y: Float, z: Float) -> Point3<Float> {
        Point3::new(x, y, z)
    }

    fn shiny() -> Material {
        Material::new(Color::white(), Color::new(0.5, 0.5, 0.5), 10.0)
    }

    // Surface point at (0, 0, -1) on a unit sphere facing -z
    fn shade_front(scene: &Scene, mat: &Material) -> Color {
        shade(
            mat,
            p(0.0, 0.0, -1.0),
            -Vector3::unit_z(),
            -Vector3::unit_z(),
            scene,
            &TraceConfig::default(),
        )
    }

    #[test]
    fn lit_head_on() {
        let scene = Scene::new(
            vec![Sphere::new(p(0.0, 0.0, 0.0), 1.0, shiny())],
            vec![PointLight::white(p(0.0, 0.0, -10.0), 1.0)],
            0,
        )
        .unwrap();
        // Ambient twice, full diffuse and full specular highlight
        let c = shade_front(&scene, &shiny());
        assert_close(c, Color::gray(0.05 + 0.05 + 1.0 + 0.5));
    }

    #[test]
    fn occluded_light_adds_only_ambient() {
        let scene = Scene::new(
            vec![
                Sphere::new(p(0.0, 0.0, 0.0), 1.0, shiny()),
                Sphere::new(p(0.0, 0.0, -5.0), 1.0, shiny()),
            ],
            vec![PointLight::white(p(0.0, 0.0, -10.0), 1.0)],
            0,
        )
        .unwrap();
        let c = shade_front(&scene, &shiny());
        assert_close(c, Color::gray(0.1));
    }

    #[test]
    fn light_behind_surface() {
        let scene = Scene::new(
            vec![Sphere::new(p(0.0, 0.0, 0.0), 1.0, Material::default())],
            vec![PointLight::white(p(0.0, 0.0, 5.0), 1.0)],
            0,
        )
        .unwrap();
        // Shadow ray starts inside the sphere so it isn't occluded, but cos is clamped
        let c = shade_front(&scene, &Material::default());
        assert_close(c, Color::gray(0.1));
    }

    #[test]
    fn sums_lights_and_colors() {
        let mat = Material::matte(Color::new(1.0, 0.5, 0.0));
        let scene = Scene::new(
            vec![],
            vec![
                PointLight::new(p(0.0, 0.0, -3.0), Color::new(1.0, 1.0, 1.0)),
                PointLight::new(p(0.0, 0.0, -6.0), Color::new(0.0, 2.0, 0.0)),
            ],
            0,
        )
        .unwrap();
        let c = shade_front(&scene, &mat);
        let ambient = 0.05 * mat.diffuse;
        let expected = ambient
            + (ambient + Color::new(1.0, 0.5, 0.0))
            + (ambient + Color::new(0.0, 1.0, 0.0));
        assert_close(c, expected);
    }

    #[test]
    fn no_lights_is_ambient() {
        let scene = Scene::new(vec![], vec![], 0).unwrap();
        let mat = Material::matte(Color::new(0.2, 0.4, 0.6));
        assert_close(shade_front(&scene, &mat), 0.05 * mat.diffuse);
    }

    #[test]
    fn opposite_view_and_light_stay_finite() {
        let scene = Scene::new(vec![], vec![PointLight::white(p(0.0, 0.0, -3.0), 1.0)], 0).unwrap();
        let c = shade(
            &shiny(),
            p(0.0, 0.0, -1.0),
            -Vector3::unit_z(),
            Vector3::unit_z(),
            &scene,
            &TraceConfig::default(),
        );
        assert!(c.is_finite());
        assert_close(c, Color::gray(0.05 + 0.05 + 1.0));
    }
}
