//! Interval timer state machine
//!
//! The machine is pure and synchronous: it advances only through `tick`,
//! `toggle_running`, `reset`, and `on_config_changed`. Any environment can
//! drive it (a tokio interval, a thread sleep loop, a test calling `tick`
//! directly) because it owns no scheduling primitive of its own.

/// The two alternating timer phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    /// Display label for the phase
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Rest => "REST",
        }
    }
}

/// Durations and round count for a session
///
/// All fields must be positive. Validation is the caller's job (clap range
/// parsers and the command-loop parser); the machine treats this as a
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub work_seconds: u32,
    pub rest_seconds: u32,
    pub total_rounds: u32,
}

impl TimerConfig {
    /// Full duration of the given phase under this config
    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Rest => self.rest_seconds,
        }
    }

    fn is_valid(&self) -> bool {
        self.work_seconds > 0 && self.rest_seconds > 0 && self.total_rounds > 0
    }
}

/// The interval timer state machine
///
/// Counts a Work phase down to zero, holds at 00:00 for one tick so the
/// boundary is visible, then switches to Rest; after the Rest phase of the
/// final round it returns to its initial idle state and stops itself.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    config: TimerConfig,
    /// Config change received while running; adopted at the next phase
    /// boundary or reset so an in-flight countdown is never altered.
    pending_config: Option<TimerConfig>,
    phase: Phase,
    remaining_seconds: u32,
    current_round: u32,
    running: bool,
    at_boundary: bool,
}

impl IntervalTimer {
    /// Create an idle timer for the given config
    pub fn new(config: TimerConfig) -> Self {
        debug_assert!(config.is_valid());
        Self {
            config,
            pending_config: None,
            phase: Phase::Work,
            remaining_seconds: config.work_seconds,
            current_round: 1,
            running: false,
            at_boundary: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn at_boundary(&self) -> bool {
        self.at_boundary
    }

    /// The config governing the phase currently in flight
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// The config the next phase will use: a pending change if one was
    /// received while running, the active config otherwise.
    pub fn effective_config(&self) -> TimerConfig {
        self.pending_config.unwrap_or(self.config)
    }

    /// Flip the running flag. Phase, remaining time, and round are untouched,
    /// so pausing mid-countdown resumes exactly where it left off.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Return to the idle initial state for the current config. Safe to call
    /// from any state; a pending config change takes effect here.
    pub fn reset(&mut self) {
        if let Some(config) = self.pending_config.take() {
            self.config = config;
        }
        self.phase = Phase::Work;
        self.remaining_seconds = self.config.work_seconds;
        self.current_round = 1;
        self.running = false;
        self.at_boundary = false;
    }

    /// Adopt a new config. Idle: applies immediately, recomputing the
    /// remaining time for the current phase. Running (boundary hold
    /// included): held until the next phase boundary or reset, so the active
    /// phase keeps the duration it started with.
    pub fn on_config_changed(&mut self, new_config: TimerConfig) {
        debug_assert!(new_config.is_valid());
        if self.running {
            self.pending_config = Some(new_config);
        } else {
            self.config = new_config;
            self.pending_config = None;
            self.remaining_seconds = self.config.duration_of(self.phase);
            self.at_boundary = false;
        }
    }

    /// Advance the countdown by one second. Called once per second while
    /// running; a no-op otherwise, so a straggling driver tick after an
    /// internal stop cannot corrupt the state.
    ///
    /// The hold-at-zero step and the phase transition are never applied in
    /// the same tick: reaching zero sets `at_boundary` and returns, and only
    /// the following tick applies the transition.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.at_boundary {
            // The one-tick hold at 00:00 has elapsed.
            self.advance_phase();
            return;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            if self.remaining_seconds == 0 {
                self.at_boundary = true;
            }
        }
    }

    /// Fraction of the current phase already elapsed, in `[0.0, 1.0]`.
    /// Reads 1.0 during the boundary hold. Pure derived value, never stored.
    pub fn progress_fraction(&self) -> f64 {
        if self.at_boundary {
            return 1.0;
        }
        let total = self.config.duration_of(self.phase);
        f64::from(total - self.remaining_seconds) / f64::from(total)
    }

    fn advance_phase(&mut self) {
        if let Some(config) = self.pending_config.take() {
            self.config = config;
        }
        match self.phase {
            Phase::Work => {
                self.phase = Phase::Rest;
                self.remaining_seconds = self.config.rest_seconds;
                self.at_boundary = false;
            }
            Phase::Rest if self.current_round < self.config.total_rounds => {
                self.phase = Phase::Work;
                self.remaining_seconds = self.config.work_seconds;
                self.current_round += 1;
                self.at_boundary = false;
            }
            Phase::Rest => {
                // Rest phase of the final round: session complete, back to
                // idle. The internal stop must reach the running observer,
                // which the state layer handles by diffing `running`.
                self.running = false;
                self.phase = Phase::Work;
                self.remaining_seconds = self.config.work_seconds;
                self.current_round = 1;
                self.at_boundary = false;
            }
        }
    }
}
