use glam::Vec3;

// Shared tuning constants for slider picking and sizing.

// Geometry
pub const PARALLEL_EPSILON: f32 = 1e-6; // 1 - cos^2 below this counts as parallel

// Picking (world units, multiplied by the distance scale for fixed-scale sliders)
pub const DEFAULT_PICK_RADIUS: f32 = 0.05; // capsule radius around the slider segment
pub const DEFAULT_TIP_RADIUS: f32 = 0.1; // sphere at the far end of the segment

// Fixed-scale sizing
pub const HANDLE_SCREEN_FRACTION: f32 = 0.15; // fraction of the view height a unit handle spans
pub const DEFAULT_HANDLE_SIZE: f32 = 1.0; // user multiplier on top of the screen fraction

// Default camera used by tools and tests
pub const DEFAULT_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 100.0;
pub const DEFAULT_CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];

#[inline]
pub fn default_camera_eye() -> Vec3 {
    Vec3::new(
        DEFAULT_CAMERA_EYE[0],
        DEFAULT_CAMERA_EYE[1],
        DEFAULT_CAMERA_EYE[2],
    )
}

/// Picking and sizing parameters shared by every slider of a [`crate::HandleManager`].
#[derive(Clone, Debug, PartialEq)]
pub struct HandleSettings {
    pub handle_size: f32,
    pub screen_fraction: f32,
    pub pick_radius: f32,
    pub tip_radius: f32,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            screen_fraction: HANDLE_SCREEN_FRACTION,
            pick_radius: DEFAULT_PICK_RADIUS,
            tip_radius: DEFAULT_TIP_RADIUS,
        }
    }
}
