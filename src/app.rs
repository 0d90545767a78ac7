//! Application state and logic.
//!
//! This module owns the metric store, the bar animations and everything the
//! footer shows, and applies ticks and user actions to them.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::event::Action;
use crate::metrics::{Counter, MetricId, MetricSet};
use crate::ui::animation::Animations;
use crate::variant::Variant;

/// What the event loop should do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep going with the pending tick
    Continue,
    /// Replace the pending tick with a fresh one
    RestartTimer,
    /// Stop the timer and leave
    Quit,
}

/// Main application state.
pub struct App {
    /// Presentation mode
    pub variant: Variant,
    /// The six counters
    pub metrics: MetricSet,
    /// Bar animations (only moved in the eased variant)
    pub animations: Animations,
    /// Time of the most recent tick (startup time before the first one)
    pub last_update: DateTime<Local>,
    /// Last known terminal width
    pub width: u16,
    /// Last known terminal height
    pub height: u16,
    running: bool,
}

impl App {
    /// Creates the dashboard with the variant's startup seeds.
    pub fn new(variant: Variant, width: u16, height: u16, now: DateTime<Local>) -> Self {
        let mut app = Self {
            variant,
            metrics: MetricSet::new(variant.initial_seeds(), variant.reset_seeds()),
            animations: Animations::new(),
            last_update: now,
            width,
            height,
            running: true,
        };
        // Eased bars grow in from empty on launch.
        app.retarget(&MetricId::ALL);
        app
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles an action and tells the event loop what to do with the timer.
    pub fn handle_action(&mut self, action: Action) -> Transition {
        match action {
            Action::Quit => {
                info!("quit requested");
                self.running = false;
                Transition::Quit
            }
            Action::Reset => {
                self.reset();
                Transition::RestartTimer
            }
            Action::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.width = width;
                self.height = height;
                Transition::Continue
            }
        }
    }

    /// Applies one timer firing.
    pub fn on_tick(&mut self, at: DateTime<Local>) {
        self.last_update = at;
        let changed = self.metrics.advance();
        debug!(changed = changed.len(), "tick");
        if !changed.is_empty() && self.metrics.is_complete() {
            info!("every goal reached");
        }
        self.retarget(&changed);
    }

    /// Plays one animation frame.
    pub fn on_frame(&mut self) {
        self.animations.step_all();
    }

    /// True while an eased bar has frames left to play.
    pub fn is_animating(&self) -> bool {
        self.variant.is_animated() && self.animations.is_animating()
    }

    pub fn counter(&self, id: MetricId) -> Counter {
        self.metrics.get(id)
    }

    /// Percentage a bar should show right now.
    pub fn bar_percentage(&self, id: MetricId) -> f64 {
        if self.variant.is_animated() {
            self.animations.displayed(id)
        } else {
            self.counter(id).percentage()
        }
    }

    fn reset(&mut self) {
        self.metrics.reset();
        info!(variant = %self.variant, "counters reset");
        self.retarget(&MetricId::ALL);
    }

    fn retarget(&mut self, ids: &[MetricId]) {
        if !self.variant.is_animated() {
            return;
        }
        for &id in ids {
            let target = self.counter(id).percentage();
            self.animations.set_target(id, target);
        }
    }
}
