use crate::gfx::anim::sub_progress;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FADE_IN_START: f32 = 0.0;
pub const DEFAULT_FADE_OUT_END: f32 = 1.0;

pub const DEFAULT_BASE_RING_FADE_IN_END: f32 = 0.1;
pub const DEFAULT_BASE_RING_FADE_OUT_START: f32 = 0.3;

pub const DEFAULT_SPARKLE_RING_FADE_IN_END: f32 = 0.1;
pub const DEFAULT_SPARKLE_RING_FADE_OUT_START: f32 = 0.4;

pub const DEFAULT_CENTER_FILL_FADE_IN_END: f32 = 0.0;
pub const DEFAULT_CENTER_FILL_FADE_OUT_START: f32 = 0.0;
pub const DEFAULT_CENTER_FILL_FADE_OUT_END: f32 = 0.6;

/// Trapezoidal opacity profile over raw progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeWindow {
    pub fade_in_start: f32,
    pub fade_in_end: f32,
    pub fade_out_start: f32,
    pub fade_out_end: f32,
}

impl FadeWindow {
    pub const fn new(fade_in_start: f32, fade_in_end: f32, fade_out_start: f32, fade_out_end: f32) -> Self {
        Self {
            fade_in_start,
            fade_in_end,
            fade_out_start,
            fade_out_end,
        }
    }

    pub const fn sparkle_ring() -> Self {
        Self::new(
            DEFAULT_FADE_IN_START,
            DEFAULT_SPARKLE_RING_FADE_IN_END,
            DEFAULT_SPARKLE_RING_FADE_OUT_START,
            DEFAULT_FADE_OUT_END,
        )
    }

    /// The sparkle ring is drawn on top of this one.
    pub const fn base_ring() -> Self {
        Self::new(
            DEFAULT_FADE_IN_START,
            DEFAULT_BASE_RING_FADE_IN_END,
            DEFAULT_BASE_RING_FADE_OUT_START,
            DEFAULT_FADE_OUT_END,
        )
    }

    pub const fn center_fill() -> Self {
        Self::new(
            DEFAULT_FADE_IN_START,
            DEFAULT_CENTER_FILL_FADE_IN_END,
            DEFAULT_CENTER_FILL_FADE_OUT_START,
            DEFAULT_CENTER_FILL_FADE_OUT_END,
        )
    }

    pub fn weight(&self, progress: f32) -> f32 {
        fade_weight(self, progress)
    }
}

pub fn fade_weight(window: &FadeWindow, progress: f32) -> f32 {
    let fade_in = sub_progress(window.fade_in_start, window.fade_in_end, progress);
    let fade_out = 1.0 - sub_progress(window.fade_out_start, window.fade_out_end, progress);
    fade_in.min(fade_out).clamp(0.0, 1.0)
}

/// The three fade windows a ripple evaluates every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadeSet {
    pub sparkle_ring: FadeWindow,
    pub base_ring: FadeWindow,
    pub center_fill: FadeWindow,
}

impl Default for FadeSet {
    fn default() -> Self {
        Self {
            sparkle_ring: FadeWindow::sparkle_ring(),
            base_ring: FadeWindow::base_ring(),
            center_fill: FadeWindow::center_fill(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeWeights {
    pub sparkle: f32,
    pub ring: f32,
    pub fill: f32,
}

impl FadeSet {
    pub fn evaluate(&self, raw_progress: f32) -> FadeWeights {
        FadeWeights {
            sparkle: self.sparkle_ring.weight(raw_progress),
            ring: self.base_ring.weight(raw_progress),
            fill: self.center_fill.weight(raw_progress),
        }
    }
}
