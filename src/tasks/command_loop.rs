//! Interactive command loop

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::state::{AppState, TimerConfig};

/// A parsed control command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Toggle,
    Reset,
    SetWork(u32),
    SetRest(u32),
    SetRounds(u32),
    Help,
    Quit,
}

/// Read control commands from stdin until EOF or `q`
///
/// This is the stand-in for the buttons and number fields of a richer front
/// end: it validates input, then hands plain operations to the shared state.
pub async fn command_loop(state: Arc<AppState>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Ignoring command '{}': {}", line, e);
                continue;
            }
        };

        match command {
            Command::Toggle => {
                if let Err(e) = state.toggle_running() {
                    warn!("Failed to toggle timer: {}", e);
                }
            }
            Command::Reset => {
                if let Err(e) = state.reset() {
                    warn!("Failed to reset timer: {}", e);
                }
            }
            Command::SetWork(seconds) => {
                apply_config_edit(&state, |config| config.work_seconds = seconds);
            }
            Command::SetRest(seconds) => {
                apply_config_edit(&state, |config| config.rest_seconds = seconds);
            }
            Command::SetRounds(rounds) => {
                apply_config_edit(&state, |config| config.total_rounds = rounds);
            }
            Command::Help => print_help(),
            Command::Quit => {
                info!("Quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Edit one field of the config and apply the result
///
/// Edits build on the effective config so that two edits made during the
/// same running phase stack instead of the second discarding the first.
fn apply_config_edit<F>(state: &Arc<AppState>, edit: F)
where
    F: FnOnce(&mut TimerConfig),
{
    let mut config = match state.effective_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to read config: {}", e);
            return;
        }
    };
    edit(&mut config);

    match state.apply_config(config) {
        Ok(snapshot) if snapshot.running => {
            info!("Timer is running; change takes effect at the next phase");
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to apply config: {}", e),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_lowercase();
    let argument = parts.next();

    if parts.next().is_some() {
        return Err("too many arguments".to_string());
    }

    let command = match keyword.as_str() {
        "s" | "start" | "pause" => Command::Toggle,
        "r" | "reset" => Command::Reset,
        "work" => Command::SetWork(parse_positive(argument, "work duration in seconds")?),
        "rest" => Command::SetRest(parse_positive(argument, "rest duration in seconds")?),
        "rounds" => Command::SetRounds(parse_positive(argument, "round count")?),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}'", other)),
    };

    if argument.is_some() && !matches!(command, Command::SetWork(_) | Command::SetRest(_) | Command::SetRounds(_)) {
        return Err("unexpected argument".to_string());
    }

    Ok(command)
}

fn parse_positive(argument: Option<&str>, what: &str) -> Result<u32, String> {
    let raw = argument.ok_or_else(|| format!("missing {}", what))?;
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("{} must be a number, got '{}'", what, raw))?;
    if value == 0 {
        return Err(format!("{} must be at least 1", what));
    }
    Ok(value)
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  s | start | pause   toggle the timer");
    println!("  r | reset           back to the idle initial state");
    println!("  work <seconds>      set the work phase duration");
    println!("  rest <seconds>      set the rest phase duration");
    println!("  rounds <n>          set the number of rounds");
    println!("  q | quit            exit");
    println!();
}
