//! Roundbell - a terminal interval timer for work/rest training rounds
//!
//! This library provides the timer state machine, the shared state and
//! observer channels around it, and the background tasks that drive and
//! display the countdown.

pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, IntervalTimer, Phase, TimerConfig, TimerSnapshot};
pub use utils::signals::shutdown_signal;
