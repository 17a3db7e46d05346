use cgmath::prelude::*;
use cgmath::Point3;

use crate::float::*;
use crate::intersect::{Hit, Intersect, Ray};
use crate::material::Material;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3<Float>,
    pub radius: Float,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3<Float>, radius: Float, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Smaller root of |d|²t² + 2(d·(o-c))t + |o-c|² - r² = 0 if it lies in front of
    /// the ray origin. The larger root is never considered, so rays starting inside
    /// the sphere miss it.
    pub fn nearest_root(&self, ray: &Ray) -> Option<Float> {
        let oc = ray.orig() - self.center;
        let dir = ray.dir();
        let a = dir.magnitude2();
        let half_b = dir.dot(oc);
        let c = oc.magnitude2() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let t0 = (-half_b - discriminant.sqrt()) / a;
        if t0 > 0.0 {
            Some(t0)
        } else {
            None
        }
    }
}

impl<'a> Intersect<'a, Hit<'a>> for Sphere {
    fn intersect(&'a self, ray: &Ray) -> Option<Hit<'a>> {
        let t = self.nearest_root(ray)?;
        let p = ray.at(t);
        // Radius is validated positive so the offset can't vanish
        let n = ((p - self.center) / self.radius).normalize();
        Some(Hit {
            t,
            p,
            n,
            mat: &self.material,
        })
    }
}
