//! View-side state types consumed by the slider engine.
//!
//! These types avoid referencing platform-specific APIs. Front-ends fill them
//! from their windowing layer and hand them to [`crate::HandleManager::update`]
//! once per frame.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{default_camera_eye, DEFAULT_FOVY_RADIANS, DEFAULT_ZFAR, DEFAULT_ZNEAR};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective,
    /// Orthographic view with the given world-space view height.
    Orthographic { height: f32 },
}

/// Simple right-handed camera description.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: default_camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: DEFAULT_FOVY_RADIANS,
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective => {
                Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
            }
            Projection::Orthographic { height } => {
                let half_h = height * 0.5;
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.znear, self.zfar)
            }
        }
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Unit view direction, or zero when eye and target coincide.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

/// Render target size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
