use glam::Vec2;

use crate::camera::screen_to_world_ray;
use crate::ray::Ray;
use crate::state::{Camera, Viewport};

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub down: bool,
}

/// Drag-gesture signal delivered by the input layer for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSignal {
    Start,
    Continue,
    End,
    Cancel,
}

impl DragSignal {
    /// Derive the signal from two consecutive pointer samples.
    ///
    /// A press yields `Start`, a held button `Continue`, a release `End`.
    /// `cancel` overrides everything while the button is or was down.
    pub fn from_pointer(previous: &PointerState, current: &PointerState, cancel: bool) -> Option<Self> {
        match (previous.down, current.down) {
            (true, _) | (_, true) if cancel => Some(DragSignal::Cancel),
            (false, true) => Some(DragSignal::Start),
            (true, true) => Some(DragSignal::Continue),
            (true, false) => Some(DragSignal::End),
            (false, false) => None,
        }
    }
}

/// Everything the handle pass needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameInput {
    pub ray: Ray,
    pub camera: Camera,
    pub signal: Option<DragSignal>,
}

impl FrameInput {
    pub fn new(ray: Ray, camera: Camera, signal: Option<DragSignal>) -> Self {
        Self { ray, camera, signal }
    }

    /// Build the frame input from a pointer sample in viewport pixels.
    pub fn from_pointer(
        camera: &Camera,
        viewport: &Viewport,
        pointer: &PointerState,
        signal: Option<DragSignal>,
    ) -> Self {
        Self {
            ray: screen_to_world_ray(camera, viewport, pointer.position),
            camera: camera.clone(),
            signal,
        }
    }
}
