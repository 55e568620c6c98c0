use crate::gfx::anim::{lerp, sub_progress};
use log::warn;
use serde::{Deserialize, Serialize};

/// Desired size of the effect at progress `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub t: f32,
    pub width: f32,
    pub height: f32,
}

impl Keyframe {
    pub const ZERO: Keyframe = Keyframe::new(0.0, 0.0, 0.0);

    pub const fn new(t: f32, width: f32, height: f32) -> Self {
        Self { t, width, height }
    }
}

/// How a size is blended between two neighbouring keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeInterpolation {
    /// `prev + (target - prev) * t`
    #[default]
    Linear,
    /// `target * t + prev`; only matches `Linear` when `prev` is zero.
    Accumulate,
}

impl SizeInterpolation {
    fn blend(self, prev: f32, target: f32, t: f32) -> f32 {
        match self {
            SizeInterpolation::Linear => lerp(prev, target, t),
            SizeInterpolation::Accumulate => target * t + prev,
        }
    }
}

/// Sorted keyframes plus a cursor that only moves forward during playback.
#[derive(Debug, Clone, Default)]
pub struct KeyframeTable {
    keyframes: Vec<Keyframe>,
    cursor: usize,
    interpolation: SizeInterpolation,
    width: f32,
    height: f32,
}

impl KeyframeTable {
    pub fn new(interpolation: SizeInterpolation) -> Self {
        Self {
            interpolation,
            ..Self::default()
        }
    }

    /// Replaces every keyframe and rewinds the cursor.
    pub fn set_keyframes(&mut self, keyframes: impl IntoIterator<Item = Keyframe>) {
        self.keyframes.clear();
        self.keyframes.extend(keyframes);
        self.keyframes.sort_by(|a, b| a.t.total_cmp(&b.t));
        self.cursor = 0;
    }

    /// Linear growth from nothing to `width` x `height`.
    pub fn set_max_size(&mut self, width: f32, height: f32) {
        self.set_keyframes([Keyframe::ZERO, Keyframe::new(1.0, width, height)]);
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn interpolation(&self) -> SizeInterpolation {
        self.interpolation
    }

    pub fn current_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn update(&mut self, progress: f32) -> (f32, f32) {
        let target_index = self.advance_cursor(progress);
        let prev_index = target_index.saturating_sub(1);

        let target = self.keyframes[target_index];
        let prev = self.keyframes[prev_index];

        if prev_index == target_index {
            self.width = target.width;
            self.height = target.height;
            return (self.width, self.height);
        }

        let t = sub_progress(prev.t, target.t, progress);
        self.width = self.interpolation.blend(prev.width, target.width, t);
        self.height = self.interpolation.blend(prev.height, target.height, t);
        (self.width, self.height)
    }

    fn advance_cursor(&mut self, progress: f32) -> usize {
        if self.keyframes.is_empty() {
            if progress > 0.0 {
                warn!("Effect size was never set; call set_max_size or set_keyframes before playback");
            }
            self.set_keyframes([Keyframe::ZERO]);
            return self.cursor;
        }

        let last = self.keyframes.len() - 1;
        while self.cursor < last && progress > self.keyframes[self.cursor].t {
            self.cursor += 1;
        }
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[(f32, f32, f32)], interpolation: SizeInterpolation) -> KeyframeTable {
        let mut table = KeyframeTable::new(interpolation);
        table.set_keyframes(keys.iter().map(|&(t, w, h)| Keyframe::new(t, w, h)));
        table
    }

    #[test]
    fn two_keyframes_from_zero() {
        for mode in [SizeInterpolation::Linear, SizeInterpolation::Accumulate] {
            let mut t = table(&[(0.0, 0.0, 0.0), (1.0, 100.0, 50.0)], mode);
            assert_eq!(t.update(0.0), (0.0, 0.0));
            assert_eq!(t.update(0.5), (50.0, 25.0));
            assert_eq!(t.update(1.0), (100.0, 50.0));
        }
    }

    #[test]
    fn formulas_diverge_when_previous_size_is_nonzero() {
        let keys = [(0.0, 0.0, 0.0), (0.5, 40.0, 20.0), (1.0, 100.0, 60.0)];

        let mut linear = table(&keys, SizeInterpolation::Linear);
        linear.update(0.5);
        assert_eq!(linear.update(0.75), (70.0, 40.0));

        let mut accumulate = table(&keys, SizeInterpolation::Accumulate);
        accumulate.update(0.5);
        assert_eq!(accumulate.update(0.75), (90.0, 50.0));
    }

    #[test]
    fn keyframes_are_sorted() {
        let t = table(&[(1.0, 10.0, 10.0), (0.0, 0.0, 0.0), (0.5, 5.0, 5.0)], SizeInterpolation::Linear);
        let ts: Vec<f32> = t.keyframes().iter().map(|k| k.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn single_keyframe_is_constant() {
        for mode in [SizeInterpolation::Linear, SizeInterpolation::Accumulate] {
            let mut t = table(&[(0.0, 30.0, 20.0)], mode);
            assert_eq!(t.update(0.0), (30.0, 20.0));
            assert_eq!(t.update(0.4), (30.0, 20.0));
            assert_eq!(t.update(1.0), (30.0, 20.0));
        }
    }

    #[test]
    fn clamps_outside_the_table() {
        let mut t = table(&[(0.2, 10.0, 10.0), (0.8, 70.0, 40.0)], SizeInterpolation::Linear);
        assert_eq!(t.update(0.0), (10.0, 10.0));
        assert_eq!(t.update(1.0), (70.0, 40.0));
        assert_eq!(t.update(5.0), (70.0, 40.0));

        let mut t = table(&[(0.2, 10.0, 10.0), (0.8, 70.0, 40.0)], SizeInterpolation::Accumulate);
        assert_eq!(t.update(0.0), (10.0, 10.0));
        assert_eq!(t.update(0.2), (10.0, 10.0));
    }

    #[test]
    fn first_keyframe_is_not_doubled() {
        let mut t = table(&[(0.0, 10.0, 10.0), (1.0, 100.0, 100.0)], SizeInterpolation::Accumulate);
        assert_eq!(t.update(0.0), (10.0, 10.0));
    }

    #[test]
    fn cursor_only_moves_forward() {
        let mut t = table(
            &[(0.0, 0.0, 0.0), (0.25, 10.0, 10.0), (0.5, 20.0, 20.0), (0.75, 30.0, 30.0), (1.0, 40.0, 40.0)],
            SizeInterpolation::Linear,
        );
        let mut last_cursor = 0;
        for i in 0..=100 {
            t.update(i as f32 / 100.0);
            assert!(t.cursor() >= last_cursor);
            last_cursor = t.cursor();
        }
        assert_eq!(last_cursor, 4);

        // A late query for an earlier progress does not rewind.
        t.update(0.1);
        assert_eq!(t.cursor(), 4);
    }

    #[test]
    fn replacing_keyframes_rewinds() {
        let mut t = table(&[(0.0, 0.0, 0.0), (1.0, 10.0, 10.0)], SizeInterpolation::Linear);
        t.update(1.0);
        assert_eq!(t.cursor(), 1);
        t.set_max_size(20.0, 20.0);
        assert_eq!(t.cursor(), 0);
        assert_eq!(t.update(0.5), (10.0, 10.0));
    }

    #[test]
    fn empty_table_yields_zero_size() {
        let mut t = KeyframeTable::new(SizeInterpolation::Linear);
        assert_eq!(t.update(0.5), (0.0, 0.0));
        assert_eq!(t.keyframes(), &[Keyframe::ZERO]);
    }
}
