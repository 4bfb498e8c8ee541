//! Roundbell - a terminal interval timer
//!
//! This is the main entry point: it wires the state machine to its tick
//! driver, the status display, and the stdin command loop.

use std::sync::Arc;

use tracing::info;

use roundbell::{
    config::Config,
    state::AppState,
    tasks::{command_loop, tick_driver_task},
    ui::display_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the status line.
    tracing_subscriber::fmt()
        .with_env_filter(format!("roundbell={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting roundbell");
    info!(
        "Configuration: work={}s, rest={}s, rounds={}",
        config.work, config.rest, config.rounds
    );

    // Create application state
    let state = Arc::new(AppState::new(config.timer_config()));

    // Start the tick driver and the status display
    let driver_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_driver_task(driver_state).await;
    });

    let display_state = Arc::clone(&state);
    tokio::spawn(async move {
        display_task(display_state).await;
    });

    info!("Commands: s (start/pause), r (reset), work <s>, rest <s>, rounds <n>, q (quit), h (help)");

    // Run the command loop until quit, EOF, or a shutdown signal
    tokio::select! {
        result = command_loop(Arc::clone(&state)) => {
            if let Err(e) = result {
                tracing::error!("Command loop error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    println!();
    info!("Timer shutdown complete");
    Ok(())
}
