//! Shader uniforms produced by the effect each frame.

use crate::effect::EffectOutputs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
}

/// Named uniforms in binding order. Names never change between frames;
/// `in_battery` is only present for the border shape.
pub fn named_uniforms(out: &EffectOutputs) -> Vec<(&'static str, UniformValue)> {
    use UniformValue::*;

    let mut uniforms = vec![
        ("in_center", Vec2(out.center.to_array())),
        ("in_size", Vec2(out.size.to_array())),
        ("in_cornerRadius", Float(out.corner_radius)),
        ("in_thickness", Float(out.thickness)),
        ("in_time", Float(out.time)),
    ];
    if let Some(battery) = out.battery {
        uniforms.push(("in_battery", Float(battery)));
    }
    uniforms.extend([
        ("in_distort_radial", Float(out.distort_radial)),
        ("in_distort_xy", Float(out.distort_xy)),
        ("in_fadeSparkle", Float(out.fade_sparkle)),
        ("in_fadeFill", Float(out.fade_fill)),
        ("in_fadeRing", Float(out.fade_ring)),
        ("in_blur", Float(out.blur)),
        ("in_pixelDensity", Float(out.pixel_density)),
        ("in_color", Vec4(out.color.to_array())),
        ("in_sparkle_strength", Float(out.sparkle_strength)),
    ]);
    uniforms
}

/// Uniform buffer layout. vec2 fields sit on 8-byte and vec4 on 16-byte
/// boundaries so the struct can be uploaded as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBlock {
    pub center: [f32; 2],           // offset 0
    pub size: [f32; 2],             // offset 8
    pub corner_radius: f32,         // offset 16
    pub thickness: f32,             // offset 20
    pub time: f32,                  // offset 24
    /// -1.0 when the shape has no battery
    pub battery: f32,               // offset 28
    pub distort_radial: f32,        // offset 32
    pub distort_xy: f32,            // offset 36
    pub fade_sparkle: f32,          // offset 40
    pub fade_fill: f32,             // offset 44
    pub fade_ring: f32,             // offset 48
    pub blur: f32,                  // offset 52
    pub pixel_density: f32,         // offset 56
    pub sparkle_strength: f32,      // offset 60
    pub color: [f32; 4],            // offset 64
}

impl From<&EffectOutputs> for UniformBlock {
    fn from(out: &EffectOutputs) -> Self {
        Self {
            center: out.center.to_array(),
            size: out.size.to_array(),
            corner_radius: out.corner_radius,
            thickness: out.thickness,
            time: out.time,
            battery: out.battery.unwrap_or(-1.0),
            distort_radial: out.distort_radial,
            distort_xy: out.distort_xy,
            fade_sparkle: out.fade_sparkle,
            fade_fill: out.fade_fill,
            fade_ring: out.fade_ring,
            blur: out.blur,
            pixel_density: out.pixel_density,
            sparkle_strength: out.sparkle_strength,
            color: out.color.to_array(),
        }
    }
}

impl UniformBlock {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
