use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::error::RayError;
use crate::float::*;
use crate::material::Material;
use crate::util;

pub trait Intersect<'a, H> {
    fn intersect(&'a self, ray: &Ray) -> Option<H>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    orig: Point3<Float>,
    // Not necessarily normalized
    dir: Vector3<Float>,
}

impl Ray {
    /// Ray with a given origin and direction. The direction doesn't need to be normalized
    /// but it has to have a length.
    pub fn new(orig: Point3<Float>, dir: Vector3<Float>) -> Result<Ray, RayError> {
        if !util::is_finite(orig.to_vec()) {
            return Err(RayError::NonFiniteOrigin);
        }
        if util::try_normalize(dir).is_none() {
            return Err(RayError::DegenerateDirection);
        }
        Ok(Ray { orig, dir })
    }

    /// Ray from origin towards another point
    pub fn from_point(orig: Point3<Float>, to: Point3<Float>) -> Result<Ray, RayError> {
        Ray::new(orig, to - orig)
    }

    /// Ray whose origin is pushed along the unit direction to escape the surface it starts from
    pub(crate) fn offset(orig: Point3<Float>, dir: Vector3<Float>, epsilon: Float) -> Ray {
        Ray {
            orig: orig + epsilon * dir,
            dir,
        }
    }

    pub fn orig(&self) -> Point3<Float> {
        self.orig
    }

    pub fn dir(&self) -> Vector3<Float> {
        self.dir
    }

    /// Normalized direction. Construction guarantees that the direction has a length.
    pub fn unit_dir(&self) -> Vector3<Float> {
        util::try_normalize(self.dir).unwrap_or(self.dir)
    }

    /// Point at parameter t
    pub fn at(&self, t: Float) -> Point3<Float> {
        self.orig + t * self.dir
    }
}

/// Nearest intersection of a ray
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Ray parameter of the hit, always positive
    pub t: Float,
    pub p: Point3<Float>,
    /// Unit normal pointing away from the surface
    pub n: Vector3<Float>,
    pub mat: &'a Material,
}
