//! Pinhole camera used to generate primary rays.

use cgmath::prelude::*;
use cgmath::{Matrix4, Point3, Rad, Vector3, Vector4};

use crate::consts;
use crate::error::{RayError, RenderError};
use crate::float::*;
use crate::intersect::Ray;

/// Representation of a camera
#[derive(Clone, Debug)]
pub struct Camera {
    /// Position of the camera in world coordinates
    pub pos: Point3<Float>,
    /// Point the camera looks at
    pub target: Point3<Float>,
    /// Approximate up direction
    pub up: Vector3<Float>,
    /// Vertical field-of-view of the camera
    fov: Rad<Float>,
    /// Near plane of the camera
    near: Float,
    /// Far plane of the camera
    far: Float,
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            pos: Point3::origin(),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::unit_y(),
            fov: Rad(consts::PI / 3.0),
            near: 0.001,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn look_at(pos: Point3<Float>, target: Point3<Float>, up: Vector3<Float>) -> Camera {
        Camera {
            pos,
            target,
            up,
            ..Default::default()
        }
    }

    pub fn with_fov<A: Into<Rad<Float>>>(self, fov: A) -> Camera {
        Camera {
            fov: fov.into(),
            ..self
        }
    }

    /// Get the world to camera transformation matrix
    fn world_to_camera(&self) -> Matrix4<Float> {
        Matrix4::look_at_rh(self.pos, self.target, self.up)
    }

    /// Get the camera to clip space transformation matrix
    fn camera_to_clip(&self, aspect: Float) -> Matrix4<Float> {
        cgmath::perspective(self.fov, aspect, self.near, self.far)
    }

    /// Get the combined world to clip transformation
    pub fn world_to_clip(&self, width: u32, height: u32) -> Matrix4<Float> {
        let aspect = width.to_float() / height.to_float();
        self.camera_to_clip(aspect) * self.world_to_camera()
    }

    /// Inverse of the projection. Fails if the view is degenerate, e.g. when up is parallel
    /// to the view direction.
    pub fn clip_to_world(&self, width: u32, height: u32) -> Result<Matrix4<Float>, RenderError> {
        let inverse = self
            .world_to_clip(width, height)
            .invert()
            .ok_or(RenderError::SingularCamera)?;
        let elements: &[Float; 16] = inverse.as_ref();
        if elements.iter().all(|e| e.is_finite()) {
            Ok(inverse)
        } else {
            Err(RenderError::SingularCamera)
        }
    }

    /// Ray from the camera through the given clip space coordinates
    pub fn primary_ray(
        &self,
        clip_to_world: &Matrix4<Float>,
        clip_x: Float,
        clip_y: Float,
    ) -> Result<Ray, RayError> {
        let clip_p = Vector4::new(clip_x, clip_y, 1.0, 1.0);
        let world_p = Point3::from_homogeneous(clip_to_world * clip_p);
        Ray::from_point(self.pos, world_p)
    }
}
