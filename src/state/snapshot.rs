//! Read model published to presentation layers

use super::interval_timer::{IntervalTimer, Phase};

/// Point-in-time view of the timer for display purposes
///
/// Published on the snapshot watch channel after every mutation so consumers
/// (the status line, or anything else) never poll or lock the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub current_round: u32,
    pub total_rounds: u32,
    pub running: bool,
    pub at_boundary: bool,
    /// Elapsed fraction of the current phase, 1.0 during the boundary hold
    pub progress: f64,
}

impl TimerSnapshot {
    /// Capture the current state of the machine
    pub fn of(timer: &IntervalTimer) -> Self {
        Self {
            phase: timer.phase(),
            remaining_seconds: timer.remaining_seconds(),
            current_round: timer.current_round(),
            total_rounds: timer.config().total_rounds,
            running: timer.running(),
            at_boundary: timer.at_boundary(),
            progress: timer.progress_fraction(),
        }
    }
}
