use crate::config::Config;
use crate::effect::{EffectOutputs, EffectState, FrameInputs};
use crate::gfx::anim::Timeline;
use anyhow::Result;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackMode {
    Idle,
    Playing,
    Finished,
}

/// Plays one effect instance on an external frame clock.
pub struct App {
    pub config: Config,
    pub mode: PlaybackMode,
    pub effect: EffectState,
    pub timeline: Timeline,
    /// Seconds since the app was created.
    pub time: f32,
    pub frames: u32,
    color: u32,
    last_outputs: Option<EffectOutputs>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let color = config.color_argb()?;

        let mut effect = EffectState::with_interpolation(config.ripple_shape(), config.interpolation);
        effect.fades.sparkle_ring = config.sparkle_ring;
        effect.fades.base_ring = config.base_ring;
        effect.fades.center_fill = config.center_fill;
        effect.blur_start = config.blur_start;
        effect.blur_end = config.blur_end;
        effect.set_keyframes(config.keyframes.iter().copied());

        let timeline = Timeline::new(config.duration_ms as f32 / 1000.0);

        Ok(Self {
            config,
            mode: PlaybackMode::Idle,
            effect,
            timeline,
            time: 0.0,
            frames: 0,
            color,
            last_outputs: None,
        })
    }

    pub fn play(&mut self) {
        self.timeline.start(self.time);
        self.frames = 0;
        self.mode = PlaybackMode::Playing;
        info!(
            "Playing {:?} for {}ms",
            self.effect.shape(),
            self.config.duration_ms
        );
    }

    /// Seconds between frames at the configured cap.
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.config.fps_cap.max(1) as f32
    }

    pub fn frame_inputs(&self) -> FrameInputs {
        FrameInputs {
            raw_progress: self.timeline.progress(),
            time: self.timeline.elapsed() * 1000.0,
            center: self.config.center,
            pixel_density: self.config.pixel_density,
            color: self.color,
            sparkle_strength: self.config.sparkle_strength,
            distortion_strength: self.config.distortion_strength,
            battery_fraction: self.config.battery_fraction,
        }
    }

    pub fn update(&mut self, dt: f32) -> Option<EffectOutputs> {
        self.time += dt;

        if !matches!(self.mode, PlaybackMode::Playing) {
            return None;
        }

        self.timeline.update(self.time);
        let outputs = self.effect.update(&self.frame_inputs());
        self.frames += 1;
        self.last_outputs = Some(outputs);

        if self.timeline.is_complete() {
            self.mode = PlaybackMode::Finished;
            info!("Effect finished after {} frames", self.frames);
        }
        Some(outputs)
    }

    pub fn last_outputs(&self) -> Option<&EffectOutputs> {
        self.last_outputs.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.mode, PlaybackMode::Finished)
    }
}
