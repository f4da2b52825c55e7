//! Camera description and pointer-ray math shared by the frontends.
//!
//! The camera here is a plain right-handed look-at with perspective
//! projection; smooth orbit/zoom interaction belongs to the frontends and
//! never feeds back into core state beyond what `screen_ray` consumes.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::picking::Ray;

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit vector from the eye toward the target; used as the drag-plane
    /// normal so the plane faces the viewer.
    #[inline]
    pub fn view_dir(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Build a world-space ray through a pointer position in normalized
    /// device coordinates (x right, y up, both in [-1, 1]).
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
