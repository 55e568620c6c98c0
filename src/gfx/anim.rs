/// Control points of the standard curve, `cubic-bezier(0.2, 0, 0, 1)`.
const STANDARD_X1: f64 = 0.2;
const STANDARD_Y1: f64 = 0.0;
const STANDARD_X2: f64 = 0.0;
const STANDARD_Y2: f64 = 1.0;

const BISECT_STEPS: u32 = 40;

fn bezier_axis(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Standard easing: slow start, fast middle, slow end.
///
/// The x polynomial of the curve is strictly increasing on [0, 1], so a
/// fixed number of bisection steps finds the curve parameter for `t`
/// without any data-dependent iteration count.
pub fn ease_standard(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = t as f64;
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    for _ in 0..BISECT_STEPS {
        let mid = 0.5 * (lo + hi);
        if bezier_axis(mid, STANDARD_X1, STANDARD_X2) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let s = 0.5 * (lo + hi);
    (bezier_axis(s, STANDARD_Y1, STANDARD_Y2) as f32).clamp(0.0, 1.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `progress` inside `[start, end]`, clamped to [0, 1].
///
/// A zero-width window is a step: 0 below `start`, 1 at or above it.
pub fn sub_progress(start: f32, end: f32, progress: f32) -> f32 {
    if start == end {
        return if progress >= start { 1.0 } else { 0.0 };
    }
    let min = start.min(end);
    let max = start.max(end);
    // f32::clamp panics on NaN bounds; max/min just propagate or drop them.
    let sub = progress.max(min).min(max);
    ((sub - start) / (end - start)).max(0.0).min(1.0)
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub start_time: f32,
    pub duration: f32,
    pub current_time: f32,
}

impl Timeline {
    pub fn new(duration: f32) -> Self {
        Self {
            start_time: 0.0,
            duration,
            current_time: 0.0,
        }
    }

    pub fn start(&mut self, now: f32) {
        self.start_time = now;
        self.current_time = now;
    }

    pub fn update(&mut self, now: f32) {
        self.current_time = now;
    }

    pub fn elapsed(&self) -> f32 {
        (self.current_time - self.start_time).max(0.0)
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed() / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn eased_progress(&self) -> f32 {
        ease_standard(self.progress())
    }
}
