//! Ray type and the ray/axis queries the slider needs.
//!
//! All functions work in world space and expect unit-length axis directions.
//! [`Ray::new`] normalizes its direction so callers can pass unprojected
//! far-minus-near vectors directly.

use glam::Vec3;

use crate::constants::PARALLEL_EPSILON;
use crate::error::SliderError;

/// Half-line `origin + t * direction`, `t >= 0`.
///
/// The queries in this module read `direction` as a unit vector. Build rays
/// with [`Ray::new`]; a struct literal must supply a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length, or `Vec3::ZERO` for a degenerate ray.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray. A zero or non-finite direction is stored as `Vec3::ZERO`,
    /// which every query below treats as degenerate.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO || !self.origin.is_finite()
    }
}

/// Signed parameter `s` of the point on the infinite line
/// `line_origin + s * line_dir` closest to `ray`.
///
/// Both directions are unit length, so the skew-line formula reduces to
/// `s = (b*e - d) / (1 - b^2)`. Rays (nearly) parallel to the line have no
/// unique closest point and yield [`SliderError::NoIntersection`].
pub fn closest_line_parameter(
    line_origin: Vec3,
    line_dir: Vec3,
    ray: &Ray,
) -> Result<f32, SliderError> {
    if ray.is_degenerate() {
        return Err(SliderError::NoIntersection);
    }
    let r = line_origin - ray.origin;
    let b = line_dir.dot(ray.direction);
    let d = line_dir.dot(r);
    let e = ray.direction.dot(r);

    let denominator = 1.0 - b * b;
    if denominator < PARALLEL_EPSILON {
        return Err(SliderError::NoIntersection);
    }

    let s = (b * e - d) / denominator;
    if s.is_finite() {
        Ok(s)
    } else {
        Err(SliderError::NoIntersection)
    }
}

/// Closest approach between `ray` and the segment `[start, start + axis * length]`.
///
/// Returns `(t, distance)` where `t` is the ray parameter of the closest point
/// and `distance` the gap between the two closest points.
pub fn ray_segment_closest(ray: &Ray, start: Vec3, axis: Vec3, length: f32) -> (f32, f32) {
    let r = start - ray.origin;
    let b = axis.dot(ray.direction);
    let d = axis.dot(r);
    let e = ray.direction.dot(r);
    let denominator = 1.0 - b * b;

    let s = if denominator > PARALLEL_EPSILON {
        (b * e - d) / denominator
    } else {
        -d
    };
    let length = length.max(0.0);
    let s = s.clamp(0.0, length);

    // clamp-and-reproject: once against the ray, once against the segment
    let t = (start + axis * s - ray.origin)
        .dot(ray.direction)
        .max(0.0);
    let on_ray = ray.at(t);
    let s = (on_ray - start).dot(axis).clamp(0.0, length);

    (t, (on_ray - (start + axis * s)).length())
}

/// Ray/sphere intersection. Returns the nearest non-negative ray parameter.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let t_near = -b - root;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // origin inside the sphere
    let t_far = -b + root;
    (t_far >= 0.0).then_some(t_far)
}
