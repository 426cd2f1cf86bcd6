use anyhow::{bail, Context};
use glam::{Quat, Vec2, Vec3};
use handle_core::{
    world_to_screen, Camera, DragSignal, FrameInput, HandleId, HandleManager, LineSliderDesc,
    PointerState, SliderId, Viewport,
};
use rand::prelude::*;

const VIEWPORT_SIZE: [f32; 2] = [1280.0, 720.0];
const DRAG_FRAMES: usize = 24;
const POINTER_JITTER_PX: f32 = 1.5;
const AXIS_SNAP: f32 = 0.25;

struct Session {
    camera: Camera,
    viewport: Viewport,
    manager: HandleManager,
    handle: HandleId,
    sliders: [SliderId; 3],
    pointer: PointerState,
    rng: StdRng,
}

impl Session {
    fn new(seed: u64) -> anyhow::Result<Self> {
        let viewport = Viewport::new(VIEWPORT_SIZE[0], VIEWPORT_SIZE[1]);
        let camera = Camera {
            eye: Vec3::new(4.0, 3.0, 6.0),
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        let mut manager = HandleManager::new();
        let handle = manager.create_handle(Vec3::ZERO, Quat::IDENTITY);
        let x = manager.create_line_slider(handle, &LineSliderDesc::new(Vec3::X, 1.0))?;
        let y = manager.create_line_slider(handle, &LineSliderDesc::new(Vec3::Y, 1.0))?;
        let z = manager.create_line_slider(
            handle,
            &LineSliderDesc::new(Vec3::Z, 1.0).snap_value(AXIS_SNAP),
        )?;
        Ok(Self {
            camera,
            viewport,
            manager,
            handle,
            sliders: [x, y, z],
            pointer: PointerState::default(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn step(&mut self, position: Vec2, down: bool) -> handle_core::FrameOutput {
        let jitter = Vec2::new(
            self.rng.gen_range(-POINTER_JITTER_PX..=POINTER_JITTER_PX),
            self.rng.gen_range(-POINTER_JITTER_PX..=POINTER_JITTER_PX),
        );
        let next = PointerState {
            position: position + jitter,
            down,
        };
        let signal = DragSignal::from_pointer(&self.pointer, &next, false);
        self.pointer = next;
        let input = FrameInput::from_pointer(&self.camera, &self.viewport, &next, signal);
        self.manager.update(&input)
    }

    fn screen_of(&self, world: Vec3) -> anyhow::Result<Vec2> {
        world_to_screen(&self.camera, &self.viewport, world)
            .with_context(|| format!("point {world:?} is behind the camera"))
    }

    /// Press on the middle of `axis_index`, drag `distance` world units along it, release.
    fn drag_axis(&mut self, axis_index: usize, distance: f32) -> anyhow::Result<()> {
        let slider_id = self.sliders[axis_index];
        let (origin, axis) = {
            let handle = self
                .manager
                .handle(self.handle)
                .context("session handle missing")?;
            let slider = self
                .manager
                .slider(slider_id)
                .context("session slider missing")?;
            (handle.position, handle.rotation * slider.direction())
        };

        let grab = origin + axis * 0.5;
        let grab_px = self.screen_of(grab)?;
        let release_px = self.screen_of(grab + axis * distance)?;

        let hover = self.step(grab_px, false);
        log::info!("[hover] axis={} hovered={:?}", axis_index, hover.hovered);
        let start = self.step(grab_px, true);
        if start.active != Some(slider_id) {
            bail!("axis {axis_index} did not start a drag (got {:?})", start.active);
        }

        for frame in 1..=DRAG_FRAMES {
            let f = frame as f32 / DRAG_FRAMES as f32;
            self.step(grab_px.lerp(release_px, f), true);
            let p = self.manager.new_position(slider_id)?;
            log::info!(
                "[drag] axis={} frame={:02} delta={:+.3} pos=({:.3},{:.3},{:.3})",
                axis_index,
                frame,
                self.manager.delta(slider_id)?,
                p.x,
                p.y,
                p.z
            );
        }
        self.step(release_px, false);

        let end = self.manager.new_position(slider_id)?;
        log::info!(
            "[release] axis={} delta={:+.3} handle -> ({:.3},{:.3},{:.3})",
            axis_index,
            self.manager.delta(slider_id)?,
            end.x,
            end.y,
            end.z
        );
        if let Some(handle) = self.manager.handle_mut(self.handle) {
            handle.position = end;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut session = Session::new(42)?;
    session.drag_axis(0, 1.5)?;
    session.drag_axis(1, -0.75)?;
    session.drag_axis(2, 0.6)?;

    let final_pos = session
        .manager
        .handle(session.handle)
        .map(|h| h.position)
        .context("session handle missing")?;
    log::info!(
        "[session] final handle position ({:.3},{:.3},{:.3})",
        final_pos.x,
        final_pos.y,
        final_pos.z
    );
    Ok(())
}
