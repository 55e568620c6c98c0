//! Battery border: a rounded-rectangle outline that fills clockwise from the
//! top-left in proportion to the battery level.

use crate::gfx::math::{Color, Vec2};
use crate::gfx::sdf::{box_sdf, rounded_rect_sdf, smoothstep};
use std::f32::consts::FRAC_PI_2;

/// Returned by [`BorderGeometry::perimeter_position`] for points off the band.
pub const OFF_BORDER: f32 = -1.0;

pub const LOW_BATTERY_COLOR: Color = Color::RED;
pub const FULL_BATTERY_COLOR: Color = Color::GREEN;

/// Rounded rectangle in local coordinates: origin at the top-left corner,
/// y growing downward. The corner radius doubles as the band thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderGeometry {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

/// Per-point shading terms for the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSample {
    pub position: f32,
    pub fill: f32,
    pub aa: f32,
    pub inner_mask: f32,
    pub alpha: f32,
}

impl BorderGeometry {
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        let radius = radius.clamp(0.0, 0.5 * width.min(height).max(0.0));
        Self { width, height, radius }
    }

    pub fn top_len(&self) -> f32 {
        self.width - 2.0 * self.radius
    }

    pub fn side_len(&self) -> f32 {
        self.height - 2.0 * self.radius
    }

    pub fn arc_len(&self) -> f32 {
        FRAC_PI_2 * self.radius
    }

    pub fn total_perimeter(&self) -> f32 {
        2.0 * (self.top_len() + self.side_len()) + 4.0 * self.arc_len()
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    fn inner_half_size(&self) -> Vec2 {
        Vec2::new(self.width * 0.5 - self.radius, self.height * 0.5 - self.radius)
    }

    /// Arc-length along the border, clockwise from the start of the top edge,
    /// or [`OFF_BORDER`].
    pub fn perimeter_position(&self, p: Vec2) -> f32 {
        let (w, h, r) = (self.width, self.height, self.radius);
        if r <= 0.0 || p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
            return OFF_BORDER;
        }

        let top = self.top_len();
        let side = self.side_len();
        let arc = self.arc_len();
        let arc_at = |angle: f32| angle.clamp(0.0, FRAC_PI_2) * r;

        let left = p.x < r;
        let right = p.x > w - r;
        let upper = p.y < r;
        let lower = p.y > h - r;

        let t = if upper && !left && !right {
            p.x - r
        } else if upper && right {
            let d = p - Vec2::new(w - r, r);
            top + arc_at(d.x.atan2(-d.y))
        } else if right && !upper && !lower {
            top + arc + (p.y - r)
        } else if lower && right {
            let d = p - Vec2::new(w - r, h - r);
            top + arc + side + arc_at(d.y.atan2(d.x))
        } else if lower && !left && !right {
            top + arc + side + arc + ((w - r) - p.x)
        } else if lower && left {
            let d = p - Vec2::new(r, h - r);
            2.0 * top + side + 2.0 * arc + arc_at((-d.x).atan2(d.y))
        } else if left && !upper && !lower {
            2.0 * top + side + 3.0 * arc + ((h - r) - p.y)
        } else if upper && left {
            let d = p - Vec2::new(r, r);
            2.0 * top + 2.0 * side + 3.0 * arc + arc_at((-d.y).atan2(-d.x))
        } else {
            return OFF_BORDER;
        };

        let total = self.total_perimeter();
        if t >= total {
            t - total
        } else {
            t
        }
    }

    /// 1 where the border is lit for `battery`, 0 elsewhere.
    pub fn fill_fraction(&self, p: Vec2, battery: f32) -> f32 {
        let battery = battery.clamp(0.0, 1.0);
        let t = self.perimeter_position(p);
        if t < 0.0 || battery <= 0.0 {
            return 0.0;
        }
        if t <= battery * self.total_perimeter() {
            1.0
        } else {
            0.0
        }
    }

    pub fn sample(&self, p: Vec2, battery: f32) -> BorderSample {
        let position = self.perimeter_position(p);
        let fill = self.fill_fraction(p, battery);

        let local = p - self.center();
        let inner = self.inner_half_size();
        let aa = 1.0 - smoothstep(0.0, self.radius, box_sdf(local, inner));
        let inner_mask = smoothstep(0.0, 1.0, rounded_rect_sdf(local, inner, self.radius));

        BorderSample {
            position,
            fill,
            aa,
            inner_mask,
            alpha: fill * aa * inner_mask,
        }
    }
}

pub fn battery_color(battery: f32) -> Color {
    LOW_BATTERY_COLOR.lerp(FULL_BATTERY_COLOR, battery)
}
