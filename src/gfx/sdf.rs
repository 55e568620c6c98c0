use super::math::Vec2;

/// Hermite smoothstep, matching the shader builtin.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Signed distance from `p` to a rectangle centered at the origin whose
/// corners are rounded with radius `r`. `half_size` is the half extent of
/// the rectangle boundary. Negative inside, positive outside.
pub fn rounded_rect_sdf(p: Vec2, half_size: Vec2, r: f32) -> f32 {
    let d = p.abs() - half_size + Vec2::splat(r);
    let outside = d.max(Vec2::ZERO).length();
    let inside = d.max_element().min(0.0);
    outside + inside - r
}

/// Distance past an axis-aligned box centered at the origin; zero or
/// negative inside.
pub fn box_sdf(p: Vec2, half_size: Vec2) -> f32 {
    let d = p.abs() - half_size;
    d.max(Vec2::ZERO).length() + d.max_element().min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_inside() {
        let d = rounded_rect_sdf(Vec2::ZERO, Vec2::new(50.0, 30.0), 10.0);
        assert!(d < 0.0);
        assert!((d + 30.0).abs() < 1e-4);
    }

    #[test]
    fn far_point_is_euclidean() {
        let half = Vec2::new(50.0, 30.0);
        let d = rounded_rect_sdf(Vec2::new(1000.0, 0.0), half, 10.0);
        assert!((d - 950.0).abs() < 1e-3);

        let d = rounded_rect_sdf(Vec2::new(0.0, -530.0), half, 10.0);
        assert!((d - 500.0).abs() < 1e-3);
    }

    #[test]
    fn corner_follows_the_arc() {
        // The arc center sits at (40, 20); a point 10 units past it along the
        // diagonal lies exactly on the boundary.
        let offset = 10.0 / 2.0f32.sqrt();
        let p = Vec2::new(40.0 + offset, 20.0 + offset);
        let d = rounded_rect_sdf(p, Vec2::new(50.0, 30.0), 10.0);
        assert!(d.abs() < 1e-3);
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(smoothstep(1.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn box_distance() {
        assert!((box_sdf(Vec2::new(60.0, 0.0), Vec2::new(50.0, 30.0)) - 10.0).abs() < 1e-5);
        assert!(box_sdf(Vec2::ZERO, Vec2::new(50.0, 30.0)) < 0.0);
    }
}
