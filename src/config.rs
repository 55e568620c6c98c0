use crate::effect::fade::FadeWindow;
use crate::effect::size::{Keyframe, SizeInterpolation};
use crate::effect::{
    RippleShape, DEFAULT_BLUR_END, DEFAULT_BLUR_START, DEFAULT_BORDER_THICKNESS_RATIO,
    RIPPLE_SPARKLE_STRENGTH,
};
use crate::gfx::math::{parse_argb, Vec2};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shape: Shape,

    #[serde(default = "default_thickness_ratio")]
    pub thickness_ratio: f32,

    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,

    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,

    #[serde(default = "default_keyframes")]
    pub keyframes: Vec<Keyframe>,

    #[serde(default)]
    pub interpolation: SizeInterpolation,

    #[serde(default = "FadeWindow::sparkle_ring")]
    pub sparkle_ring: FadeWindow,

    #[serde(default = "FadeWindow::base_ring")]
    pub base_ring: FadeWindow,

    #[serde(default = "FadeWindow::center_fill")]
    pub center_fill: FadeWindow,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_sparkle_strength")]
    pub sparkle_strength: f32,

    #[serde(default)]
    pub distortion_strength: f32,

    #[serde(default = "default_pixel_density")]
    pub pixel_density: f32,

    #[serde(default = "default_blur_start")]
    pub blur_start: f32,

    #[serde(default = "default_blur_end")]
    pub blur_end: f32,

    #[serde(default = "default_center")]
    pub center: Vec2,

    #[serde(default = "default_battery_fraction")]
    pub battery_fraction: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Circle,
    RoundedBox,
    Ellipse,
    Border,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            thickness_ratio: default_thickness_ratio(),
            duration_ms: default_duration_ms(),
            fps_cap: default_fps_cap(),
            keyframes: default_keyframes(),
            interpolation: SizeInterpolation::default(),
            sparkle_ring: FadeWindow::sparkle_ring(),
            base_ring: FadeWindow::base_ring(),
            center_fill: FadeWindow::center_fill(),
            color: default_color(),
            sparkle_strength: default_sparkle_strength(),
            distortion_strength: 0.0,
            pixel_density: default_pixel_density(),
            blur_start: default_blur_start(),
            blur_end: default_blur_end(),
            center: default_center(),
            battery_fraction: default_battery_fraction(),
        }
    }
}

fn default_thickness_ratio() -> f32 {
    DEFAULT_BORDER_THICKNESS_RATIO
}

fn default_duration_ms() -> u32 {
    1500
}

fn default_fps_cap() -> u32 {
    60
}

fn default_keyframes() -> Vec<Keyframe> {
    vec![Keyframe::ZERO, Keyframe::new(1.0, 400.0, 400.0)]
}

fn default_color() -> String {
    "#ffffffff".to_string()
}

fn default_sparkle_strength() -> f32 {
    RIPPLE_SPARKLE_STRENGTH
}

fn default_pixel_density() -> f32 {
    1.0
}

fn default_blur_start() -> f32 {
    DEFAULT_BLUR_START
}

fn default_blur_end() -> f32 {
    DEFAULT_BLUR_END
}

fn default_center() -> Vec2 {
    Vec2::new(200.0, 200.0)
}

fn default_battery_fraction() -> f32 {
    0.5
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("ripplefx").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::path()?;
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        parse_argb(&self.color)?;
        if self.fps_cap == 0 {
            anyhow::bail!("fps_cap must be at least 1");
        }
        if self.pixel_density <= 0.0 {
            anyhow::bail!("pixel_density must be positive, got {}", self.pixel_density);
        }
        if let Some(k) = self.keyframes.iter().find(|k| !k.t.is_finite()) {
            anyhow::bail!("keyframe has a non-finite t: {:?}", k);
        }
        let windows = [
            ("sparkle_ring", &self.sparkle_ring),
            ("base_ring", &self.base_ring),
            ("center_fill", &self.center_fill),
        ];
        for (name, w) in windows {
            let bounds = [w.fade_in_start, w.fade_in_end, w.fade_out_start, w.fade_out_end];
            if !bounds.iter().all(|v| v.is_finite()) {
                anyhow::bail!("{} fade window has a non-finite bound: {:?}", name, w);
            }
        }
        Ok(())
    }

    pub fn ripple_shape(&self) -> RippleShape {
        match self.shape {
            Shape::Circle => RippleShape::Circle,
            Shape::RoundedBox => RippleShape::RoundedBox,
            Shape::Ellipse => RippleShape::Ellipse,
            Shape::Border => RippleShape::Border {
                thickness_ratio: self.thickness_ratio,
            },
        }
    }

    pub fn color_argb(&self) -> Result<u32> {
        parse_argb(&self.color)
    }
}
