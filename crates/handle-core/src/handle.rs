//! Parent handles and the registry that drives their sliders each frame.

use fnv::FnvHashMap;
use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::constants::HandleSettings;
use crate::error::HandleError;
use crate::input::{DragSignal, FrameInput};
use crate::slider::{LineSlider, LineSliderDesc, SliderFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(pub u32);

/// Transform and bookkeeping shared by the sliders registered to it.
#[derive(Clone, Debug)]
pub struct Handle {
    pub position: Vec3,
    pub rotation: Quat,
    /// Uniform scale applied to slider pick regions.
    pub scale: f32,
    enabled: bool,
    sliders: SmallVec<[SliderId; 4]>,
}

impl Handle {
    fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
            enabled: true,
            sliders: SmallVec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sliders registered to this handle, in creation order.
    pub fn slider_ids(&self) -> &[SliderId] {
        &self.sliders
    }

    pub fn frame(&self) -> SliderFrame {
        SliderFrame {
            origin: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

/// Result of one [`HandleManager::update`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutput {
    pub hovered: Option<SliderId>,
    pub active: Option<SliderId>,
}

/// Owns handles and their sliders, runs picking and routes drag signals.
#[derive(Debug, Default)]
pub struct HandleManager {
    settings: HandleSettings,
    handles: FnvHashMap<HandleId, Handle>,
    sliders: FnvHashMap<SliderId, LineSlider>,
    next_handle: u32,
    next_slider: u32,
    hovered: Option<SliderId>,
    active: Option<SliderId>,
}

impl HandleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: HandleSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &HandleSettings {
        &self.settings
    }

    pub fn create_handle(&mut self, position: Vec3, rotation: Quat) -> HandleId {
        let id = HandleId(self.next_handle);
        self.next_handle += 1;
        self.handles.insert(id, Handle::new(position, rotation));
        id
    }

    pub fn handle(&self, id: HandleId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    pub fn handle_mut(&mut self, id: HandleId) -> Option<&mut Handle> {
        self.handles.get_mut(&id)
    }

    /// Enable or disable a handle. Disabling cancels a drag on any of its sliders.
    pub fn set_handle_enabled(&mut self, id: HandleId, enabled: bool) -> Result<(), HandleError> {
        let handle = self
            .handles
            .get_mut(&id)
            .ok_or(HandleError::UnknownHandle(id))?;
        handle.enabled = enabled;
        if !enabled {
            let owned = handle.sliders.clone();
            for slider_id in &owned {
                if let Some(slider) = self.sliders.get_mut(slider_id) {
                    slider.set_hovered(false);
                }
            }
            if self.hovered.is_some_and(|h| owned.contains(&h)) {
                self.hovered = None;
            }
            if self.active.is_some_and(|a| owned.contains(&a)) {
                self.cancel_drag();
            }
        }
        Ok(())
    }

    /// Remove a handle together with its sliders.
    pub fn remove_handle(&mut self, id: HandleId) -> Result<(), HandleError> {
        let handle = self
            .handles
            .remove(&id)
            .ok_or(HandleError::UnknownHandle(id))?;
        for slider_id in handle.sliders {
            self.forget_slider(slider_id);
        }
        Ok(())
    }

    /// Construct a slider and register it with `handle`.
    pub fn create_line_slider(
        &mut self,
        handle: HandleId,
        desc: &LineSliderDesc,
    ) -> Result<SliderId, HandleError> {
        let parent = self
            .handles
            .get_mut(&handle)
            .ok_or(HandleError::UnknownHandle(handle))?;
        let mut slider = LineSlider::from_desc(desc)?;
        slider.attach(handle, &parent.frame());

        let id = SliderId(self.next_slider);
        self.next_slider += 1;
        parent.sliders.push(id);
        self.sliders.insert(id, slider);
        log::debug!("[handle] registered slider {:?} on {:?}", id, handle);
        Ok(id)
    }

    pub fn remove_slider(&mut self, id: SliderId) -> Result<(), HandleError> {
        let slider = self.sliders.get(&id).ok_or(HandleError::UnknownSlider(id))?;
        if let Some(parent) = slider.parent().and_then(|p| self.handles.get_mut(&p)) {
            parent.sliders.retain(|s| *s != id);
        }
        self.forget_slider(id);
        Ok(())
    }

    fn forget_slider(&mut self, id: SliderId) {
        self.sliders.remove(&id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn slider(&self, id: SliderId) -> Option<&LineSlider> {
        self.sliders.get(&id)
    }

    pub fn delta(&self, id: SliderId) -> Result<f32, HandleError> {
        self.slider(id)
            .map(LineSlider::delta)
            .ok_or(HandleError::UnknownSlider(id))
    }

    pub fn new_position(&self, id: SliderId) -> Result<Vec3, HandleError> {
        self.slider(id)
            .map(LineSlider::new_position)
            .ok_or(HandleError::UnknownSlider(id))
    }

    pub fn hovered_slider(&self) -> Option<SliderId> {
        self.hovered
    }

    pub fn active_slider(&self) -> Option<SliderId> {
        self.active
    }

    /// Abort the active drag, if any. Outputs keep their last values.
    pub fn cancel_drag(&mut self) {
        if let Some(id) = self.active.take() {
            if let Some(slider) = self.sliders.get_mut(&id) {
                slider.cancel_drag();
            }
        }
    }

    /// Per-frame pass: advance the active drag, or hit-test and maybe start one.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutput {
        match self.active {
            Some(id) => self.update_active(id, input.signal, input),
            None => self.update_idle(input),
        }
        FrameOutput {
            hovered: self.hovered,
            active: self.active,
        }
    }

    fn update_active(&mut self, id: SliderId, signal: Option<DragSignal>, input: &FrameInput) {
        let Some(slider) = self.sliders.get_mut(&id) else {
            self.active = None;
            return;
        };
        match signal {
            None | Some(DragSignal::Continue) => {
                // NoIntersection keeps the previous frame's outputs
                let _ = slider.drag(&input.ray);
            }
            Some(DragSignal::End) => {
                slider.end_drag();
                self.active = None;
            }
            Some(DragSignal::Cancel) => {
                slider.cancel_drag();
                self.active = None;
            }
            Some(DragSignal::Start) => {
                log::debug!("[handle] start ignored, slider {:?} already dragging", id);
            }
        }
    }

    fn update_idle(&mut self, input: &FrameInput) {
        let mut best: Option<(f32, SliderId)> = None;
        for (id, slider) in self.sliders.iter_mut() {
            slider.set_hovered(false);
            let Some(parent) = slider.parent().and_then(|p| self.handles.get(&p)) else {
                continue;
            };
            if !parent.enabled {
                continue;
            }
            if let Some(t) = slider.hit_test(&parent.frame(), &input.ray, &input.camera, &self.settings) {
                match best {
                    Some((bt, bid)) if t > bt || (t == bt && *id > bid) => {}
                    _ => best = Some((t, *id)),
                }
            }
        }

        self.hovered = best.map(|(_, id)| id);
        let Some(id) = self.hovered else {
            return;
        };
        let Some(slider) = self.sliders.get_mut(&id) else {
            return;
        };
        slider.set_hovered(true);

        if input.signal != Some(DragSignal::Start) {
            return;
        }
        let Some(frame) = slider.parent().and_then(|p| self.handles.get(&p)).map(Handle::frame) else {
            return;
        };
        match slider.begin_drag_with_camera(&frame, &input.ray, &input.camera, &self.settings) {
            Ok(()) => self.active = Some(id),
            Err(err) => log::debug!("[handle] slider {:?} could not start drag: {}", id, err),
        }
    }
}
