use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise maximum.
    pub fn max(self, other: Vec2) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn max_element(self) -> f32 {
        self.x.max(self.y)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Linear RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Unpacks a `0xAARRGGBB` integer.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::rgba(r, g, b, a)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            super::anim::lerp(self.r, other.r, t),
            super::anim::lerp(self.g, other.g, t),
            super::anim::lerp(self.b, other.b, t),
            super::anim::lerp(self.a, other.a, t),
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Parses `#AARRGGBB` or `#RRGGBB` (opaque) into a packed ARGB integer.
pub fn parse_argb(hex: &str) -> anyhow::Result<u32> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Invalid color {:?}: expected hex digits", hex);
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| anyhow::anyhow!("Invalid color {:?}: {}", hex, e))?;
    match digits.len() {
        8 => Ok(value),
        6 => Ok(0xff00_0000 | value),
        _ => anyhow::bail!("Color {:?} must be #RRGGBB or #AARRGGBB", hex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_argb() {
        let c = Color::from_argb(0x80ff0000);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_argb("#ffffffff").unwrap(), 0xffffffff);
        assert_eq!(parse_argb("#4a9eff").unwrap(), 0xff4a9eff);
        assert!(parse_argb("#fff").is_err());
        assert!(parse_argb("#zzzzzz").is_err());
        assert!(parse_argb("#+fffff").is_err());
    }
}
