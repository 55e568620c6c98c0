pub mod border;
pub mod fade;
pub mod size;

use crate::gfx::anim::{ease_standard, lerp};
use crate::gfx::math::{Color, Vec2};
use border::{battery_color, BorderGeometry};
use fade::{FadeSet, FadeWeights};
use log::debug;
use size::{Keyframe, KeyframeTable, SizeInterpolation};

pub const DEFAULT_BORDER_THICKNESS_RATIO: f32 = 0.07;
pub const DEFAULT_BLUR_START: f32 = 1.25;
pub const DEFAULT_BLUR_END: f32 = 0.5;
pub const DISTORTION_SCALE: f32 = 75.0;

pub const RIPPLE_SPARKLE_STRENGTH: f32 = 0.3;
pub const RIPPLE_DEFAULT_COLOR: u32 = 0xffff_ffff;

/// Shapes a ripple can take.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RippleShape {
    #[default]
    Circle,
    RoundedBox,
    Ellipse,
    /// Fixed-size battery outline; thickness is a fraction of its width.
    Border { thickness_ratio: f32 },
}

impl RippleShape {
    pub fn border() -> Self {
        RippleShape::Border {
            thickness_ratio: DEFAULT_BORDER_THICKNESS_RATIO,
        }
    }

    pub fn is_border(&self) -> bool {
        matches!(self, RippleShape::Border { .. })
    }
}

/// Values supplied by the frame clock and host every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    /// Linear progress in [0, 1], no curve applied.
    pub raw_progress: f32,
    /// Play time since the start of the effect, in milliseconds.
    pub time: f32,
    pub center: Vec2,
    pub pixel_density: f32,
    /// `0xAARRGGBB`
    pub color: u32,
    pub sparkle_strength: f32,
    pub distortion_strength: f32,
    /// Only read by the border shape.
    pub battery_fraction: f32,
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self {
            raw_progress: 0.0,
            time: 0.0,
            center: Vec2::ZERO,
            pixel_density: 1.0,
            color: RIPPLE_DEFAULT_COLOR,
            sparkle_strength: 0.0,
            distortion_strength: 0.0,
            battery_fraction: 0.0,
        }
    }
}

/// Everything a renderer binds for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectOutputs {
    pub center: Vec2,
    pub size: Vec2,
    pub corner_radius: f32,
    pub thickness: f32,
    pub blur: f32,
    pub time: f32,
    pub fade_sparkle: f32,
    pub fade_ring: f32,
    pub fade_fill: f32,
    pub color: Color,
    pub sparkle_strength: f32,
    pub distort_radial: f32,
    pub distort_xy: f32,
    pub pixel_density: f32,
    pub battery: Option<f32>,
}

impl EffectOutputs {
    /// Outline geometry for per-point border queries.
    pub fn border_geometry(&self) -> Option<BorderGeometry> {
        self.battery
            .map(|_| BorderGeometry::new(self.size.x, self.size.y, self.thickness))
    }
}

/// Per-instance state, advanced once per frame by [`EffectState::update`].
#[derive(Debug, Clone)]
pub struct EffectState {
    shape: RippleShape,
    pub fades: FadeSet,
    sizes: KeyframeTable,
    pub blur_start: f32,
    pub blur_end: f32,
    raw_progress: f32,
    progress: f32,
    time: f32,
    battery_fraction: f32,
}

impl EffectState {
    pub fn new(shape: RippleShape) -> Self {
        Self::with_interpolation(shape, SizeInterpolation::default())
    }

    pub fn with_interpolation(shape: RippleShape, interpolation: SizeInterpolation) -> Self {
        Self {
            shape,
            fades: FadeSet::default(),
            sizes: KeyframeTable::new(interpolation),
            blur_start: DEFAULT_BLUR_START,
            blur_end: DEFAULT_BLUR_END,
            raw_progress: 0.0,
            progress: 0.0,
            time: 0.0,
            battery_fraction: 0.0,
        }
    }

    pub fn shape(&self) -> RippleShape {
        self.shape
    }

    pub fn set_keyframes(&mut self, keyframes: impl IntoIterator<Item = Keyframe>) {
        self.sizes.set_keyframes(keyframes);
    }

    pub fn set_max_size(&mut self, width: f32, height: f32) {
        self.sizes.set_max_size(width, height);
    }

    pub fn sizes(&self) -> &KeyframeTable {
        &self.sizes
    }

    pub fn raw_progress(&self) -> f32 {
        self.raw_progress
    }

    /// Progress with the standard curve applied.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn battery_fraction(&self) -> f32 {
        self.battery_fraction
    }

    pub fn update(&mut self, inputs: &FrameInputs) -> EffectOutputs {
        self.raw_progress = inputs.raw_progress.clamp(0.0, 1.0);
        self.progress = ease_standard(self.raw_progress);
        self.time = inputs.time;
        self.battery_fraction = inputs.battery_fraction.clamp(0.0, 1.0);

        let FadeWeights { sparkle, ring, fill } = self.fades.evaluate(self.raw_progress);
        let blur = lerp(self.blur_start, self.blur_end, self.progress);
        let distortion = inputs.distortion_strength.clamp(0.0, 1.0);

        let (size, corner_radius, thickness, color, battery) = match self.shape {
            // The outline's radius is its thickness; blur is emitted for every shape.
            RippleShape::Border { thickness_ratio } => {
                let max = match self.sizes.last().copied() {
                    Some(k) => k,
                    None => {
                        self.sizes.update(self.raw_progress);
                        Keyframe::ZERO
                    }
                };
                let thickness = max.width * thickness_ratio;
                (
                    Vec2::new(max.width, max.height),
                    thickness,
                    thickness,
                    battery_color(self.battery_fraction),
                    Some(self.battery_fraction),
                )
            }
            RippleShape::Circle | RippleShape::RoundedBox | RippleShape::Ellipse => {
                let (width, height) = self.sizes.update(self.progress);
                (
                    Vec2::new(width, height),
                    width.min(height),
                    height * 0.5,
                    Color::from_argb(inputs.color),
                    None,
                )
            }
        };

        let outputs = EffectOutputs {
            center: inputs.center,
            size,
            corner_radius,
            thickness,
            blur,
            time: self.time,
            fade_sparkle: sparkle,
            fade_ring: ring,
            fade_fill: fill,
            color,
            sparkle_strength: inputs.sparkle_strength.clamp(0.0, 1.0),
            distort_radial: DISTORTION_SCALE * self.raw_progress * distortion,
            distort_xy: DISTORTION_SCALE * distortion,
            pixel_density: inputs.pixel_density,
            battery,
        };
        debug!(
            "{:?} raw={:.3} eased={:.3} size={:?} fades=({:.2}, {:.2}, {:.2})",
            self.shape, self.raw_progress, self.progress, size, sparkle, ring, fill
        );
        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(raw_progress: f32) -> FrameInputs {
        FrameInputs {
            raw_progress,
            time: raw_progress * 1000.0,
            center: Vec2::new(200.0, 100.0),
            distortion_strength: 0.5,
            ..FrameInputs::default()
        }
    }

    #[test]
    fn circle_grows_on_eased_progress() {
        let mut state = EffectState::new(RippleShape::Circle);
        state.set_max_size(400.0, 200.0);

        let out = state.update(&inputs(0.3));
        let eased = ease_standard(0.3);
        assert!((out.size.x - 400.0 * eased).abs() < 1e-3);
        assert!((out.size.y - 200.0 * eased).abs() < 1e-3);
        assert_eq!(out.thickness, out.size.y * 0.5);
        assert_eq!(out.corner_radius, out.size.y);
        assert!((out.blur - lerp(1.25, 0.5, eased)).abs() < 1e-6);
        assert_eq!(out.battery, None);
        assert_eq!(out.center, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn fades_use_raw_progress() {
        let mut state = EffectState::new(RippleShape::Ellipse);
        state.set_max_size(100.0, 100.0);
        let out = state.update(&inputs(0.35));
        // Base ring fades out over [0.3, 1] on raw progress.
        assert!((out.fade_ring - (1.0 - 0.05 / 0.7)).abs() < 1e-5);
        assert_eq!(out.fade_sparkle, 1.0);
    }

    #[test]
    fn distortion_scales_with_progress() {
        let mut state = EffectState::new(RippleShape::RoundedBox);
        state.set_max_size(100.0, 50.0);
        let out = state.update(&inputs(0.5));
        assert!((out.distort_radial - 75.0 * 0.5 * 0.5).abs() < 1e-5);
        assert!((out.distort_xy - 37.5).abs() < 1e-5);
    }

    #[test]
    fn border_uses_final_size() {
        let mut state = EffectState::new(RippleShape::border());
        state.set_keyframes([
            Keyframe::new(0.0, 0.0, 0.0),
            Keyframe::new(0.5, 100.0, 50.0),
            Keyframe::new(1.0, 200.0, 100.0),
        ]);

        for raw in [0.0, 0.2, 0.9] {
            let out = state.update(&FrameInputs {
                raw_progress: raw,
                battery_fraction: 0.25,
                ..FrameInputs::default()
            });
            assert_eq!(out.size, Vec2::new(200.0, 100.0));
            assert!((out.thickness - 14.0).abs() < 1e-4);
            assert_eq!(out.battery, Some(0.25));
            assert!((out.color.r - 0.75).abs() < 1e-6);
        }
        assert_eq!(state.sizes().cursor(), 0);
    }

    #[test]
    fn border_without_keyframes_is_empty() {
        let mut state = EffectState::new(RippleShape::border());
        let out = state.update(&FrameInputs {
            raw_progress: 0.5,
            battery_fraction: 1.0,
            ..FrameInputs::default()
        });
        assert_eq!(out.size, Vec2::ZERO);
        assert_eq!(out.thickness, 0.0);
    }

    #[test]
    fn inputs_are_clamped() {
        let mut state = EffectState::new(RippleShape::border());
        state.set_max_size(100.0, 60.0);
        let out = state.update(&FrameInputs {
            raw_progress: 1.7,
            battery_fraction: -0.2,
            ..FrameInputs::default()
        });
        assert_eq!(state.raw_progress(), 1.0);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(out.battery, Some(0.0));
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let run = || {
            let mut state = EffectState::new(RippleShape::Circle);
            state.set_max_size(320.0, 320.0);
            (0..=60)
                .map(|i| state.update(&inputs(i as f32 / 60.0)))
                .collect::<Vec<_>>()
        };
        let a = run();
        let b = run();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.size.x.to_bits(), y.size.x.to_bits());
            assert_eq!(x.blur.to_bits(), y.blur.to_bits());
        }
    }
}
