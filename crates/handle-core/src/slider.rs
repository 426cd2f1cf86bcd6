//! Slider constrained to a single axis.
//!
//! A [`LineSlider`] turns pointer rays into a signed distance along its axis.
//! While idle it only answers hit-test queries. A drag records the parameter
//! of the point on the axis line closest to the pointer ray; every following
//! drag frame measures the distance from that reference, snaps it, and
//! derives the new world position. Outputs are stored, so reading them is
//! free and stable between updates.

use glam::{Quat, Vec3};

use crate::camera::handle_size;
use crate::constants::HandleSettings;
use crate::error::SliderError;
use crate::handle::HandleId;
use crate::ray::{closest_line_parameter, ray_segment_closest, ray_sphere, Ray};
use crate::state::Camera;

/// Construction parameters. Defaults match the editor-facing contract:
/// fixed scale on, snapping off.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSliderDesc {
    pub direction: Vec3,
    pub length: f32,
    pub fixed_scale: bool,
    pub snap_value: f32,
}

impl LineSliderDesc {
    pub fn new(direction: Vec3, length: f32) -> Self {
        Self {
            direction,
            length,
            fixed_scale: true,
            snap_value: 0.0,
        }
    }

    pub fn fixed_scale(mut self, fixed_scale: bool) -> Self {
        self.fixed_scale = fixed_scale;
        self
    }

    pub fn snap_value(mut self, snap_value: f32) -> Self {
        self.snap_value = snap_value;
        self
    }
}

/// Coordinate frame a slider is evaluated in, supplied by its parent handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFrame {
    pub origin: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl SliderFrame {
    pub fn at(origin: Vec3) -> Self {
        Self {
            origin,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Default for SliderFrame {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        reference: f32,
        origin: Vec3,
        axis: Vec3,
    },
}

#[derive(Clone, Debug)]
pub struct LineSlider {
    parent: Option<HandleId>,
    direction: Vec3,
    length: f32,
    fixed_scale: bool,
    snap_value: f32,
    state: DragState,
    delta: f32,
    new_position: Vec3,
    origin: Vec3,
    axis: Vec3,
    hovered: bool,
    distance_scale: f32,
}

/// Round `raw` to the nearest multiple of `snap`; `snap <= 0` disables snapping.
#[inline]
pub fn snap_delta(raw: f32, snap: f32) -> f32 {
    if snap > 0.0 {
        (raw / snap).round() * snap
    } else {
        raw
    }
}

impl LineSlider {
    pub fn new(
        direction: Vec3,
        length: f32,
        fixed_scale: bool,
        snap_value: f32,
    ) -> Result<Self, SliderError> {
        if !direction.is_finite() {
            return Err(SliderError::InvalidAxis);
        }
        // rescale first so huge or tiny components neither overflow nor underflow length()
        let largest = direction.abs().max_element();
        if largest == 0.0 {
            return Err(SliderError::InvalidAxis);
        }
        let direction = (direction / largest)
            .try_normalize()
            .ok_or(SliderError::InvalidAxis)?;

        // max() also maps NaN to zero
        let clamped_length = length.max(0.0);
        if clamped_length != length {
            log::warn!("[slider] length {} clamped to {}", length, clamped_length);
        }
        let clamped_snap = snap_value.max(0.0);
        if clamped_snap != snap_value {
            log::warn!("[slider] snap value {} disables snapping", snap_value);
        }

        Ok(Self {
            parent: None,
            direction,
            length: clamped_length,
            fixed_scale,
            snap_value: clamped_snap,
            state: DragState::Idle,
            delta: 0.0,
            new_position: Vec3::ZERO,
            origin: Vec3::ZERO,
            axis: direction,
            hovered: false,
            distance_scale: 1.0,
        })
    }

    pub fn from_desc(desc: &LineSliderDesc) -> Result<Self, SliderError> {
        Self::new(desc.direction, desc.length, desc.fixed_scale, desc.snap_value)
    }

    pub(crate) fn attach(&mut self, parent: HandleId, frame: &SliderFrame) {
        self.parent = Some(parent);
        self.origin = frame.origin;
        self.axis = self.world_axis(frame);
        self.new_position = frame.origin;
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn parent(&self) -> Option<HandleId> {
        self.parent
    }
    /// Unit axis in the parent's local space.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }
    /// World-space axis used by the most recent drag.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }
    /// World-space anchor used by the most recent drag.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }
    pub fn length(&self) -> f32 {
        self.length
    }
    pub fn fixed_scale(&self) -> bool {
        self.fixed_scale
    }
    pub fn snap_value(&self) -> f32 {
        self.snap_value
    }
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
    /// World units per fixed screen size from the last hit-test or drag start.
    pub fn distance_scale(&self) -> f32 {
        self.distance_scale
    }
    /// Signed, snapped distance along the axis since the drag started.
    pub fn delta(&self) -> f32 {
        self.delta
    }
    /// `origin + axis * delta` for the current or last drag.
    pub fn new_position(&self) -> Vec3 {
        self.new_position
    }

    fn world_axis(&self, frame: &SliderFrame) -> Vec3 {
        (frame.rotation * self.direction).normalize_or_zero()
    }

    fn refresh_distance_scale(&mut self, frame: &SliderFrame, camera: &Camera, settings: &HandleSettings) {
        self.distance_scale = if self.fixed_scale {
            handle_size(camera, frame.origin, settings)
        } else {
            1.0
        };
    }

    /// Test the pointer ray against the pick region: a capsule around the
    /// segment plus a sphere at its tip. Returns the ray parameter of the hit.
    ///
    /// Only sizes change with `fixed_scale`; drag math never reads them.
    pub fn hit_test(
        &mut self,
        frame: &SliderFrame,
        ray: &Ray,
        camera: &Camera,
        settings: &HandleSettings,
    ) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }
        self.refresh_distance_scale(frame, camera, settings);
        let axis = self.world_axis(frame);
        // max() also maps a NaN or negative parent scale to an empty segment
        let extent = (self.length * frame.scale * self.distance_scale).max(0.0);
        let pick_radius = settings.pick_radius * self.distance_scale;
        let tip_radius = settings.tip_radius * self.distance_scale;

        let tip = ray_sphere(ray, frame.origin + axis * extent, tip_radius);
        let (t, distance) = ray_segment_closest(ray, frame.origin, axis, extent);
        let body = (distance <= pick_radius).then_some(t);

        match (tip, body) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Start a drag from the parent's current frame.
    ///
    /// The closest-point parameter of `ray` becomes the zero reference, so the
    /// first readout after a successful start is always `delta == 0`.
    pub fn begin_drag(&mut self, frame: &SliderFrame, ray: &Ray) -> Result<(), SliderError> {
        let axis = self.world_axis(frame);
        let reference = closest_line_parameter(frame.origin, axis, ray)?;
        self.state = DragState::Dragging {
            reference,
            origin: frame.origin,
            axis,
        };
        self.origin = frame.origin;
        self.axis = axis;
        self.delta = 0.0;
        self.new_position = frame.origin;
        log::debug!(
            "[slider] begin drag at ({:.3},{:.3},{:.3}) reference={:.4}",
            frame.origin.x,
            frame.origin.y,
            frame.origin.z,
            reference
        );
        Ok(())
    }

    /// Same as [`LineSlider::begin_drag`], also refreshing the fixed-scale size.
    pub fn begin_drag_with_camera(
        &mut self,
        frame: &SliderFrame,
        ray: &Ray,
        camera: &Camera,
        settings: &HandleSettings,
    ) -> Result<(), SliderError> {
        self.refresh_distance_scale(frame, camera, settings);
        self.begin_drag(frame, ray)
    }

    /// Advance an active drag with the current pointer ray and return the new delta.
    ///
    /// On `NoIntersection` the previous delta and position are kept. Idle
    /// sliders ignore the call and report their stored delta.
    pub fn drag(&mut self, ray: &Ray) -> Result<f32, SliderError> {
        let DragState::Dragging {
            reference,
            origin,
            axis,
        } = self.state
        else {
            return Ok(self.delta);
        };

        let current = match closest_line_parameter(origin, axis, ray) {
            Ok(current) => current,
            Err(err) => {
                log::debug!("[slider] holding delta {:.4}: {}", self.delta, err);
                return Err(err);
            }
        };

        self.delta = snap_delta(current - reference, self.snap_value);
        self.new_position = origin + axis * self.delta;
        log::trace!("[slider] raw={:.4} delta={:.4}", current - reference, self.delta);
        Ok(self.delta)
    }

    /// Finish the drag. Outputs keep their last values. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.stop("end")
    }

    /// Abort the drag. Outputs keep their last values. Returns whether a drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        self.stop("cancel")
    }

    fn stop(&mut self, reason: &str) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = DragState::Idle;
        log::debug!("[slider] {} drag with delta={:.4}", reason, self.delta);
        true
    }
}
