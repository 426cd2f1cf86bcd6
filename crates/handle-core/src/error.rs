use thiserror::Error;

use crate::handle::{HandleId, SliderId};

/// Failures of a single slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The slider direction has zero length or is not finite.
    #[error("slider direction must be a finite, non-zero vector")]
    InvalidAxis,
    /// The pointer ray is parallel to the slider axis, so no closest point exists.
    #[error("pointer ray has no closest point on the slider axis")]
    NoIntersection,
}

/// Failures of the handle registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("unknown handle {0:?}")]
    UnknownHandle(HandleId),
    #[error("unknown slider {0:?}")]
    UnknownSlider(SliderId),
    #[error(transparent)]
    Slider(#[from] SliderError),
}
