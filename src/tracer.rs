use crate::color::Color;
use crate::config::TraceConfig;
use crate::environment::Environment;
use crate::float::*;
use crate::intersect::Ray;
use crate::scene::Scene;
use crate::shading::shade;
use crate::util;

/// Outcome of tracing a single primary ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trace {
    pub color: Color,
    /// Did the primary ray hit any surface
    pub hit: bool,
    /// Number of reflected rays cast
    pub bounces: usize,
}

impl Trace {
    fn miss(color: Color) -> Self {
        Self {
            color,
            hit: false,
            bounces: 0,
        }
    }

    /// Coverage of the sample for compositing
    pub fn alpha(&self) -> Float {
        if self.hit {
            1.0
        } else {
            0.0
        }
    }
}

/// Trace a primary ray through the scene following mirror reflections.
///
/// Every surface found along the reflection chain adds its direct lighting as seen from
/// the primary view direction. The chain ends when the current surface has no specular
/// reflectance, when the bounce limit is reached or when a reflected ray escapes, in
/// which case the environment scaled by the current specular reflectance is added.
pub fn trace(
    ray: Ray,
    scene: &Scene,
    environment: &dyn Environment,
    config: &TraceConfig,
) -> Trace {
    let mut dir = ray.unit_dir();
    let mut hit = match scene.intersect(&ray) {
        Some(hit) => hit,
        None => return Trace::miss(environment.lookup(dir)),
    };
    let view = -dir;
    let mut c = shade(hit.mat, hit.p, hit.n, view, scene, config);
    let max_bounces = config.effective_bounces(scene);
    let mut bounces = 0;
    while bounces < max_bounces {
        if !hit.mat.is_reflective() {
            break;
        }
        let reflected = util::try_normalize(util::reflect(dir, hit.n)).unwrap_or(hit.n);
        let reflected_ray = Ray::offset(hit.p, reflected, config.reflection_epsilon);
        bounces += 1;
        match scene.intersect(&reflected_ray) {
            Some(new_hit) => {
                c += shade(new_hit.mat, new_hit.p, new_hit.n, view, scene, config);
                hit = new_hit;
                dir = reflected;
            }
            None => {
                c += hit.mat.specular * environment.lookup(reflected);
                break;
            }
        }
    }
    Trace {
        color: c,
        hit: true,
        bounces,
    }
}

/// Visualize the normal of the primary hit
pub fn trace_normals(ray: Ray, scene: &Scene) -> Trace {
    match scene.intersect(&ray) {
        Some(hit) => Trace {
            color: Color::from_normal(hit.n),
            hit: true,
            bounces: 0,
        },
        None => Trace::miss(Color::black()),
    }
}
