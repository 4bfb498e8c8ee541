//! Tick driver background task

use std::{sync::Arc, time::Duration};

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::state::AppState;

/// Background task that drives the countdown while the timer is running
///
/// Waits on the running-flag channel; when the timer starts, runs a
/// one-second interval that advances the machine on every tick. The interval
/// exists only while the timer runs: it is dropped the moment the flag turns
/// false, whether from a user pause, a reset, or the machine stopping itself
/// at session completion. No tick can fire while the timer is stopped.
pub async fn tick_driver_task(state: Arc<AppState>) {
    info!("Starting tick driver task");

    let mut running_rx = state.subscribe_running();

    loop {
        // Wait for the timer to start
        match running_rx.recv().await {
            Ok(true) => {
                debug!("Timer running, starting one-second tick interval");

                let mut ticker = interval(Duration::from_secs(1));
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first interval tick completes immediately; the countdown
                // must not advance until a full second has passed.
                ticker.tick().await;

                loop {
                    tokio::select! {
                        _ = ticker.tick() => {
                            if let Err(e) = state.tick() {
                                error!("Failed to advance timer: {}", e);
                                break;
                            }
                        }

                        // Running-flag change while ticking
                        Ok(running) = running_rx.recv() => {
                            if !running {
                                debug!("Timer stopped, cancelling tick interval");
                                break;
                            }
                        }
                    }
                }
                // The interval is dropped here; nothing ticks while stopped.
            }
            Ok(false) => {
                // Already idle, keep waiting
            }
            Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Tick driver lagged behind {} running-flag changes", skipped);
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                info!("Running-flag channel closed, stopping tick driver");
                break;
            }
        }
    }
}
