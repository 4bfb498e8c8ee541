//! Terminal status line rendering

use std::{
    io::{self, Write},
    sync::Arc,
};

use tracing::info;

use crate::state::{AppState, TimerSnapshot};

const BAR_WIDTH: usize = 24;

/// Format a second count as MM:SS
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render a fixed-width progress bar for an elapsed fraction in `[0, 1]`
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Render the one-line status view of a snapshot
pub fn render_line(snapshot: &TimerSnapshot) -> String {
    let label = if snapshot.running {
        snapshot.phase.label()
    } else {
        "IDLE"
    };
    format!(
        "{:<4}  {}  {}  Round {}/{}",
        label,
        format_time(snapshot.remaining_seconds),
        progress_bar(snapshot.progress, BAR_WIDTH),
        snapshot.current_round,
        snapshot.total_rounds,
    )
}

/// Background task that redraws the status line on every snapshot change
///
/// Owns stdout for the status line (logs go to stderr); rewrites in place
/// with a carriage return so the countdown stays on one line.
pub async fn display_task(state: Arc<AppState>) {
    info!("Starting display task");

    let mut snapshot_rx = state.subscribe_snapshot();

    loop {
        let line = render_line(&snapshot_rx.borrow_and_update());

        let mut stdout = io::stdout();
        let drawn = write!(stdout, "\r\x1b[2K{}", line).and_then(|_| stdout.flush());
        if drawn.is_err() {
            break;
        }

        if snapshot_rx.changed().await.is_err() {
            break;
        }
    }
}
