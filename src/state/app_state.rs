//! Shared application state and observer channels

use std::sync::Mutex;

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{IntervalTimer, TimerConfig, TimerSnapshot};

/// Shared wrapper around the interval timer
///
/// Owns the state machine behind a mutex and publishes two outputs: every
/// change of the running flag on a broadcast channel (the start/stop
/// observer, fired for user toggles and for the internal stop at session
/// completion alike), and a full [`TimerSnapshot`] on a watch channel after
/// every mutation (the read model for presentation layers).
#[derive(Debug)]
pub struct AppState {
    timer: Mutex<IntervalTimer>,
    /// Running-flag change notifications
    running_tx: broadcast::Sender<bool>,
    /// Latest snapshot for display consumers
    snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create shared state for an idle timer under the given config
    pub fn new(config: TimerConfig) -> Self {
        let timer = IntervalTimer::new(config);
        let (running_tx, _) = broadcast::channel(16);
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::of(&timer));

        Self {
            timer: Mutex::new(timer),
            running_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Subscribe to running-flag changes
    pub fn subscribe_running(&self) -> broadcast::Receiver<bool> {
        self.running_tx.subscribe()
    }

    /// Subscribe to timer snapshots
    pub fn subscribe_snapshot(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Apply a mutation to the timer and publish the results
    ///
    /// Locks the machine, runs the mutation, then notifies: the running
    /// observer only if the flag actually changed, the snapshot channel
    /// always. The mutation is atomic from any observer's point of view.
    fn with_timer<F>(&self, action: &str, mutate: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut IntervalTimer),
    {
        let mut timer = self
            .timer
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let was_running = timer.running();
        mutate(&mut timer);
        let now_running = timer.running();
        let snapshot = TimerSnapshot::of(&timer);
        drop(timer); // Release the lock before notifying

        if now_running != was_running {
            debug!("Running changed to {} ({})", now_running, action);
            if let Err(e) = self.running_tx.send(now_running) {
                warn!("Failed to send running change for {}: {}", action, e);
            }
        }
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to send snapshot for {}: {}", action, e);
        }

        Ok(snapshot)
    }

    /// Start the timer if paused, pause it if running
    pub fn toggle_running(&self) -> Result<TimerSnapshot, String> {
        info!("Toggling running state");
        self.with_timer("toggle", IntervalTimer::toggle_running)
    }

    /// Return the timer to its idle initial state
    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        info!("Resetting timer");
        self.with_timer("reset", IntervalTimer::reset)
    }

    /// Advance the countdown by one second
    pub fn tick(&self) -> Result<TimerSnapshot, String> {
        self.with_timer("tick", IntervalTimer::tick)
    }

    /// Apply a config change; deferred internally if a session is running
    pub fn apply_config(&self, config: TimerConfig) -> Result<TimerSnapshot, String> {
        info!(
            "Applying config: work={}s, rest={}s, rounds={}",
            config.work_seconds, config.rest_seconds, config.total_rounds
        );
        self.with_timer("config", |timer| timer.on_config_changed(config))
    }

    /// Get the current snapshot without mutating anything
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer
            .lock()
            .map(|timer| TimerSnapshot::of(&timer))
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// The config the next edit should build on: pending changes included
    pub fn effective_config(&self) -> Result<TimerConfig, String> {
        self.timer
            .lock()
            .map(|timer| timer.effective_config())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }
}
