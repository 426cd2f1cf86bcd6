use glam::{Vec2, Vec3};

use crate::constants::HandleSettings;
use crate::ray::Ray;
use crate::state::{Camera, Projection, Viewport};

/// Compute a world-space ray from screen-space pixel coordinates.
///
/// - `screen_px`: pixel coordinates with the origin at the top-left corner
///
/// The ray starts on the near plane, so it is valid for both perspective and
/// orthographic cameras.
pub fn screen_to_world_ray(camera: &Camera, viewport: &Viewport, screen_px: Vec2) -> Ray {
    let width = viewport.width.max(1.0);
    let height = viewport.height.max(1.0);
    let ndc_x = (2.0 * screen_px.x / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * screen_px.y / height);
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
    let p_far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
    Ray::new(p_near, p_far - p_near)
}

/// Project a world-space point to pixel coordinates. Points behind the camera yield `None`.
pub fn world_to_screen(camera: &Camera, viewport: &Viewport, world_pos: Vec3) -> Option<Vec2> {
    let clip = camera.projection_matrix() * camera.view_matrix() * world_pos.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    ))
}

/// World-space size that covers the configured fixed screen size at `world_pos`.
///
/// Fixed-scale sliders multiply their pick region by this value so they keep
/// the same on-screen footprint at any camera distance.
pub fn handle_size(camera: &Camera, world_pos: Vec3, settings: &HandleSettings) -> f32 {
    let view_height = match camera.projection {
        Projection::Perspective => {
            let dist = (world_pos - camera.eye).dot(camera.forward()).abs();
            2.0 * dist * (camera.fovy_radians * 0.5).tan()
        }
        Projection::Orthographic { height } => height,
    };
    view_height * settings.screen_fraction * settings.handle_size
}
