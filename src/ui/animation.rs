//! Eased bar animation.
//!
//! Each bar keeps the percentage it currently shows and the percentage it
//! is heading to. Every animation frame moves the shown value a fraction of
//! the remaining gap closer, snapping onto the target once the gap is
//! smaller than [`MIN_STEP`].

use crate::metrics::MetricId;

/// Fraction of the remaining gap covered per frame.
pub const EASE_FACTOR: f64 = 0.18;

/// Smallest movement per frame; also the snap distance.
pub const MIN_STEP: f64 = 0.002;

/// Next displayed value on the way from `displayed` to `target`.
///
/// Moves strictly toward `target` without passing it, and returns `target`
/// unchanged once reached.
pub fn ease_step(displayed: f64, target: f64) -> f64 {
    let gap = target - displayed;
    if gap.abs() <= MIN_STEP {
        return target;
    }
    let step = (gap.abs() * EASE_FACTOR).max(MIN_STEP);
    displayed + step.copysign(gap)
}

/// Animation record for one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAnimation {
    /// Percentage the bar is heading to.
    pub target: f64,
    /// Percentage the bar shows right now.
    pub displayed: f64,
    /// Movement applied by the most recent frame.
    pub velocity: f64,
}

impl BarAnimation {
    /// A bar resting at `p`.
    pub fn at_rest(p: f64) -> Self {
        Self {
            target: p,
            displayed: p,
            velocity: 0.0,
        }
    }

    /// Starts a new animation from wherever the bar is toward `target`.
    pub fn retarget(self, target: f64) -> Self {
        Self {
            target,
            displayed: self.displayed,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.target
    }

    /// Advances one frame.
    pub fn step(self) -> Self {
        let displayed = ease_step(self.displayed, self.target);
        Self {
            target: self.target,
            displayed,
            velocity: displayed - self.displayed,
        }
    }
}

/// Animation records for all six bars, keyed by metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Animations {
    bars: [BarAnimation; 6],
}

impl Animations {
    /// Every bar resting at zero.
    pub fn new() -> Self {
        Self {
            bars: [BarAnimation::at_rest(0.0); 6],
        }
    }

    pub fn get(&self, id: MetricId) -> BarAnimation {
        self.bars[id.index()]
    }

    pub fn displayed(&self, id: MetricId) -> f64 {
        self.get(id).displayed
    }

    /// Points a bar at a new percentage. A bar already heading there keeps
    /// its progress.
    pub fn set_target(&mut self, id: MetricId, target: f64) {
        let bar = &mut self.bars[id.index()];
        if bar.target != target {
            *bar = bar.retarget(target);
        }
    }

    /// True while at least one bar still has frames to play.
    pub fn is_animating(&self) -> bool {
        self.bars.iter().any(|bar| !bar.is_settled())
    }

    /// Plays one frame on every unsettled bar.
    pub fn step_all(&mut self) {
        for bar in &mut self.bars {
            if !bar.is_settled() {
                *bar = bar.step();
            }
        }
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self::new()
    }
}
