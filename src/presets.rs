//! Built-in scenes for the demo binary.

use std::sync::Arc;

use cgmath::{Deg, Point3, Vector3};

use crate::camera::Camera;
use crate::color::Color;
use crate::consts;
use crate::environment::{Environment, Sky, Uniform};
use crate::error::SceneError;
use crate::material::Material;
use crate::scene::Scene;

pub struct Preset {
    pub name: &'static str,
    pub scene: Scene,
    pub camera: Camera,
    pub environment: Arc<dyn Environment>,
}

/// Every preset, in presentation order
pub fn all() -> Result<Vec<Preset>, SceneError> {
    Ok(vec![single()?, gallery()?, mirror_hall()?])
}

pub fn find(name: &str) -> Result<Option<Preset>, SceneError> {
    Ok(all()?
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name)))
}

/// One matte sphere without reflections
fn single() -> Result<Preset, SceneError> {
    let scene = Scene::builder()
        .sphere(
            Point3::new(0.0, 0.0, 0.0),
            1.0,
            Material::matte(Color::new(0.8, 0.3, 0.2)),
        )
        .light(Point3::new(-3.0, 4.0, -5.0), Color::gray(0.9))
        .bounce_limit(0)
        .build()?;
    Ok(Preset {
        name: "single",
        scene,
        camera: Camera::look_at(
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        ),
        environment: Arc::new(Uniform(Color::gray(0.1))),
    })
}

/// Shiny spheres resting on a huge ground sphere under a sky
fn gallery() -> Result<Preset, SceneError> {
    let ground = Material::new(Color::gray(0.5), Color::gray(0.2), 50.0);
    let red = Material::new(Color::new(0.7, 0.1, 0.1), Color::gray(0.3), 80.0);
    let gold = Material::new(Color::new(0.6, 0.45, 0.1), Color::new(0.6, 0.5, 0.2), 120.0);
    let chrome = Material::mirror(Color::gray(0.9), 400.0);
    let scene = Scene::builder()
        .sphere(Point3::new(0.0, -1001.0, 0.0), 1000.0, ground)
        .sphere(Point3::new(-2.2, 0.0, 0.5), 1.0, red)
        .sphere(Point3::new(0.0, 0.0, 0.0), 1.0, chrome)
        .sphere(Point3::new(2.2, 0.0, 0.5), 1.0, gold)
        .sphere(Point3::new(0.8, -0.6, -1.6), 0.4, red)
        .light(Point3::new(-4.0, 6.0, -6.0), Color::gray(0.7))
        .light(Point3::new(5.0, 4.0, -2.0), Color::new(0.4, 0.4, 0.5))
        .bounce_limit(4)
        .build()?;
    Ok(Preset {
        name: "gallery",
        scene,
        camera: Camera::look_at(
            Point3::new(0.0, 1.5, -7.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        )
        .with_fov(Deg(50.0)),
        environment: Arc::new(Sky::default()),
    })
}

/// Two facing mirrors that reflect each other until the bounce cap
fn mirror_hall() -> Result<Preset, SceneError> {
    let mirror = Material::new(Color::gray(0.05), Color::gray(0.85), 200.0);
    let blue = Material::new(Color::new(0.1, 0.2, 0.8), Color::gray(0.1), 30.0);
    let scene = Scene::builder()
        .sphere(Point3::new(-3.0, 0.0, 0.0), 2.0, mirror)
        .sphere(Point3::new(3.0, 0.0, 0.0), 2.0, mirror)
        .sphere(Point3::new(0.0, 0.0, 1.0), 0.5, blue)
        .light(Point3::new(0.0, 5.0, -3.0), Color::white())
        .bounce_limit(consts::MAX_BOUNCES)
        .build()?;
    Ok(Preset {
        name: "mirror_hall",
        scene,
        camera: Camera::look_at(
            Point3::new(0.0, 0.5, -6.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        ),
        environment: Arc::new(Sky::new(Color::new(0.3, 0.3, 0.35), Color::gray(0.05))),
    })
}
