//! Stroke-draw timeline for hero line art.
//!
//! Each path is drawn by animating its dash offset from its full length to
//! zero, while a mask slides up to reveal the fill. Paths are animated in
//! groups that start at fixed delays, so a logo draws left to right.

use crate::util::easing::EasingFunction;

/// Default mask height the reveal slides up to.
pub const MASK_REVEAL_HEIGHT: f32 = 500.0;

/// Paths that start drawing together.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGroup {
    /// Indices into the path length list.
    pub paths: Vec<usize>,
    /// Start time in seconds.
    pub delay: f32,
}

/// Animated attributes of one path at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeFrame {
    /// Dash array; the full path length.
    pub dash_array: f32,
    /// Dash offset; `dash_array` when hidden, 0 when fully drawn.
    pub dash_offset: f32,
    /// Fill opacity.
    pub fill_opacity: f32,
    /// Stroke opacity.
    pub stroke_opacity: f32,
    /// Height of the reveal mask.
    pub mask_height: f32,
}

/// Stroke-draw animation over a set of paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDraw {
    lengths: Vec<f32>,
    groups: Vec<StrokeGroup>,
    duration: f32,
    mask_height: f32,
}

/// Group delays of the wordmark: left letter, top row, then the bottom row
/// letter by letter.
const WORDMARK_GROUPS: [(usize, f32); 7] = [
    (1, 0.0),
    (0, 0.08),
    (2, 0.24),
    (3, 0.36),
    (4, 0.44),
    (5, 0.52),
    (6, 0.60),
];

/// Stroke opacity after the fill morph, before the final fade.
const STROKE_MORPH_TARGET: f32 = 0.3;

impl StrokeDraw {
    /// Timeline over paths of the given lengths. Each path draws for
    /// `duration` seconds after its group's delay; paths in no group stay
    /// hidden.
    #[must_use]
    pub fn new(lengths: Vec<f32>, groups: Vec<StrokeGroup>, duration: f32) -> Self {
        Self {
            lengths,
            groups,
            duration: duration.max(0.0),
            mask_height: MASK_REVEAL_HEIGHT,
        }
    }

    /// One group per path, started `stagger` seconds apart.
    #[must_use]
    pub fn staggered(lengths: Vec<f32>, stagger: f32, duration: f32) -> Self {
        let groups = (0..lengths.len())
            .map(|i| StrokeGroup {
                paths: vec![i],
                delay: i as f32 * stagger.max(0.0),
            })
            .collect();
        Self::new(lengths, groups, duration)
    }

    /// The seven-path wordmark sequence (0.5 s per path).
    #[must_use]
    pub fn wordmark(lengths: Vec<f32>) -> Self {
        let groups = WORDMARK_GROUPS
            .iter()
            .map(|&(path, delay)| StrokeGroup {
                paths: vec![path],
                delay,
            })
            .collect();
        Self::new(lengths, groups, 0.5)
    }

    /// Override the mask height the reveal ends at.
    #[must_use]
    pub fn with_mask_height(mut self, height: f32) -> Self {
        self.mask_height = height;
        self
    }

    /// Per-path draw duration.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Start time of `path`, if any group animates it.
    #[must_use]
    pub fn start_of(&self, path: usize) -> Option<f32> {
        self.groups
            .iter()
            .find(|g| g.paths.contains(&path))
            .map(|g| g.delay)
    }

    /// Time at which every path has finished.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.groups
            .iter()
            .filter(|g| !g.paths.is_empty())
            .map(|g| g.delay + self.duration)
            .fold(0.0, f32::max)
    }

    /// Whether the whole timeline has finished at `t` seconds.
    #[must_use]
    pub fn is_complete(&self, t: f32) -> bool {
        t >= self.total_duration()
    }

    /// Attributes of `path` at `t` seconds. `None` for unknown paths.
    #[must_use]
    pub fn sample(&self, path: usize, t: f32) -> Option<StrokeFrame> {
        let length = *self.lengths.get(path)?;
        let Some(start) = self.start_of(path) else {
            return Some(StrokeFrame {
                dash_array: length,
                dash_offset: length,
                fill_opacity: 0.0,
                stroke_opacity: 1.0,
                mask_height: 0.0,
            });
        };

        let d = self.duration;
        let local = t - start;
        let draw = EasingFunction::CubicInOut.evaluate(span_progress(local, 0.0, d));
        let mask = EasingFunction::CubicOut.evaluate(span_progress(local, 0.0, d * 0.9));
        let morph = EasingFunction::QuadraticInOut
            .evaluate(span_progress(local, d * 0.3, d * 0.6));

        Some(StrokeFrame {
            dash_array: length,
            dash_offset: length * (1.0 - draw),
            fill_opacity: morph,
            stroke_opacity: stroke_opacity(local, d),
            mask_height: self.mask_height * mask,
        })
    }
}

/// Progress of `local` through a tween starting at `start` lasting `span`.
/// Zero-length tweens jump at their start.
fn span_progress(local: f32, start: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return if local >= start { 1.0 } else { 0.0 };
    }
    (local - start) / span
}

/// Stroke opacity: 1 → 0.3 alongside the fill morph, then a fade to 0 that
/// starts at 70% of the duration from wherever the morph had reached.
fn stroke_opacity(local: f32, d: f32) -> f32 {
    let morph = |at: f32| {
        let p = EasingFunction::QuadraticInOut.evaluate(span_progress(at, d * 0.3, d * 0.6));
        1.0 + (STROKE_MORPH_TARGET - 1.0) * p
    };
    let fade_start = d * 0.7;
    if local < fade_start {
        return morph(local);
    }
    let from = morph(fade_start);
    let fade = EasingFunction::QuadraticOut.evaluate(span_progress(local, fade_start, d * 0.3));
    from * (1.0 - fade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wordmark() -> StrokeDraw {
        StrokeDraw::wordmark(vec![900.0, 400.0, 1200.0, 600.0, 300.0, 800.0, 700.0])
    }

    #[test]
    fn paths_start_hidden_and_end_drawn() {
        let draw = wordmark();
        let before = draw.sample(2, 0.0).unwrap();
        assert_eq!(before.dash_offset, 1200.0);
        assert_eq!(before.fill_opacity, 0.0);
        assert_eq!(before.stroke_opacity, 1.0);
        assert_eq!(before.mask_height, 0.0);

        let after = draw.sample(2, 5.0).unwrap();
        assert_eq!(after.dash_offset, 0.0);
        assert_eq!(after.fill_opacity, 1.0);
        assert_eq!(after.stroke_opacity, 0.0);
        assert_eq!(after.mask_height, MASK_REVEAL_HEIGHT);
    }

    #[test]
    fn groups_start_at_their_delay() {
        let draw = wordmark();
        assert_eq!(draw.start_of(1), Some(0.0));
        assert_eq!(draw.start_of(6), Some(0.60));
        // path 6 has not started while path 1 is half drawn
        assert_eq!(draw.sample(6, 0.25).unwrap().dash_offset, 700.0);
        let half = draw.sample(1, 0.25).unwrap();
        assert!((half.dash_offset - 200.0).abs() < 1e-3);
    }

    #[test]
    fn stroke_fades_after_morph() {
        let draw = StrokeDraw::staggered(vec![100.0], 0.0, 1.0);
        let at = |t: f32| draw.sample(0, t).unwrap().stroke_opacity;
        assert_eq!(at(0.2), 1.0);
        let at_fade = at(0.7);
        assert!(at_fade < 1.0 && at_fade > STROKE_MORPH_TARGET);
        assert!(at(0.85) < at_fade);
        assert_eq!(at(1.5), 0.0);
    }

    #[test]
    fn completion_waits_for_last_group() {
        let draw = wordmark();
        assert!((draw.total_duration() - 1.1).abs() < 1e-6);
        assert!(!draw.is_complete(1.0));
        assert!(draw.is_complete(1.2));
    }

    #[test]
    fn unknown_and_ungrouped_paths() {
        let draw = StrokeDraw::new(vec![10.0, 20.0], vec![], 0.5);
        assert!(draw.sample(5, 0.0).is_none());
        assert_eq!(draw.sample(1, 10.0).unwrap().dash_offset, 20.0);
        assert!(draw.is_complete(0.0));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let draw = StrokeDraw::staggered(vec![50.0], 0.1, 0.0);
        assert_eq!(draw.sample(0, 0.0).unwrap().dash_offset, 0.0);
        assert_eq!(draw.sample(0, 0.0).unwrap().stroke_opacity, 0.0);
    }
}
