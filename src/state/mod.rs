//! State management module
//!
//! This module contains the timer state machine, its read model, and the
//! shared wrapper that publishes state changes to the rest of the app.

pub mod app_state;
pub mod interval_timer;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use interval_timer::{IntervalTimer, Phase, TimerConfig};
pub use snapshot::TimerSnapshot;
