//! Interaction-handle engine: pointer rays in, axis-constrained deltas out.
//!
//! A [`HandleManager`] owns parent [`Handle`]s and the [`LineSlider`]s
//! registered to them. Once per frame the front-end feeds it a [`FrameInput`]
//! (pointer ray, camera, drag signal); sliders then expose `delta()` and
//! `new_position()` as plain reads until the next update.

pub mod camera;
pub mod constants;
pub mod error;
pub mod handle;
pub mod input;
pub mod ray;
pub mod slider;
pub mod state;

pub use camera::*;
pub use constants::*;
pub use error::*;
pub use handle::*;
pub use input::*;
pub use ray::*;
pub use slider::*;
pub use state::*;
