//! End-to-end session tests against the public library API

use std::{sync::Arc, time::Duration};

use roundbell::{
    tasks::tick_driver_task, AppState, IntervalTimer, Phase, TimerConfig,
};

fn config(work: u32, rest: u32, rounds: u32) -> TimerConfig {
    TimerConfig {
        work_seconds: work,
        rest_seconds: rest,
        total_rounds: rounds,
    }
}

/// Drive a full multi-round session by hand and check every boundary.
#[test]
fn synchronous_session_walkthrough() {
    let mut timer = IntervalTimer::new(config(3, 2, 3));
    timer.toggle_running();

    for round in 1..=3 {
        assert_eq!(timer.current_round(), round);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_seconds(), 3);

        for _ in 0..3 {
            timer.tick();
        }
        assert!(timer.at_boundary());
        timer.tick();
        assert_eq!(timer.phase(), Phase::Rest);
        assert_eq!(timer.remaining_seconds(), 2);

        for _ in 0..2 {
            timer.tick();
        }
        assert!(timer.at_boundary());
        timer.tick();
    }

    // The final rest boundary put the machine back to idle.
    assert!(!timer.running());
    assert_eq!(timer.phase(), Phase::Work);
    assert_eq!(timer.current_round(), 1);
    assert_eq!(timer.remaining_seconds(), 3);
}

/// A config edit mid-session reshapes every later round but not the phase
/// already counting.
#[test]
fn mid_session_config_edit_lands_at_the_boundary() {
    let mut timer = IntervalTimer::new(config(4, 2, 2));
    timer.toggle_running();
    timer.tick();
    timer.on_config_changed(config(4, 6, 2));

    for _ in 0..3 {
        timer.tick();
    }
    assert!(timer.at_boundary());
    timer.tick();
    assert_eq!(timer.phase(), Phase::Rest);
    assert_eq!(timer.remaining_seconds(), 6);
}

/// The driver, the observer channel, and the machine together under virtual
/// time: a whole session runs to completion and stops itself.
#[tokio::test(start_paused = true)]
async fn driven_session_completes_and_auto_stops() {
    let state = Arc::new(AppState::new(config(2, 1, 2)));
    let mut running_rx = state.subscribe_running();

    tokio::spawn(tick_driver_task(Arc::clone(&state)));
    tokio::time::sleep(Duration::from_millis(100)).await;

    state.toggle_running().unwrap();
    assert!(running_rx.recv().await.unwrap());

    // Per round: 2s work + 1s hold + 1s rest + 1s hold = 5s; two rounds.
    tokio::time::sleep(Duration::from_millis(10_500)).await;

    assert!(!running_rx.recv().await.unwrap());
    let snapshot = state.snapshot().unwrap();
    assert!(!snapshot.running);
    assert_eq!(snapshot.phase, Phase::Work);
    assert_eq!(snapshot.current_round, 1);
    assert_eq!(snapshot.remaining_seconds, 2);
}
