//! Self-rearming tick timer.
//!
//! The scheduler holds at most one pending deadline. Each firing is consumed
//! by the event loop, which arms the next one only after its own work is
//! done, so slow cycles delay later ticks instead of piling them up.

use std::time::Duration;

use tokio::time::Instant;

/// Lifecycle of the tick chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// A single tick is pending at `deadline`.
    Running { deadline: Instant },
    /// Terminal: no tick will ever fire again.
    Stopped,
}

/// Single-shot timer that is re-armed after each firing.
#[derive(Debug)]
pub struct TickScheduler {
    period: Duration,
    state: SchedulerState,
}

impl TickScheduler {
    /// Creates a scheduler whose first tick fires one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            state: SchedulerState::Running {
                deadline: now + period,
            },
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the pending tick fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Running { deadline } => Some(deadline),
            SchedulerState::Stopped => None,
        }
    }

    /// Replaces the pending tick with one a full period after `now`.
    ///
    /// Used both after a tick has been handled and when a reset restarts
    /// the chain. Does nothing once stopped.
    pub fn rearm(&mut self, now: Instant) {
        if let SchedulerState::Running { deadline } = &mut self.state {
            *deadline = now + self.period;
        }
    }

    /// Ends the tick chain for good.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }
}

/// Resolves at `deadline`, or never when there is none.
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
