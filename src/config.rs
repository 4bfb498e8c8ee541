//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::TimerConfig;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "roundbell")]
#[command(about = "An interval timer alternating work and rest phases across rounds")]
#[command(version)]
pub struct Config {
    /// Work phase duration in seconds
    #[arg(short, long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..))]
    pub work: u32,

    /// Rest phase duration in seconds
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub rest: u32,

    /// Number of work/rest rounds in a session
    #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Initial timer config from the CLI values
    ///
    /// The clap range parsers already rejected zero, so this always satisfies
    /// the state machine's positive-duration precondition.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            work_seconds: self.work,
            rest_seconds: self.rest,
            total_rounds: self.rounds,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_form_a_valid_timer_config() {
        let config = Config::try_parse_from(["roundbell"]).unwrap();
        let timer_config = config.timer_config();
        assert_eq!(timer_config.work_seconds, 30);
        assert_eq!(timer_config.rest_seconds, 10);
        assert_eq!(timer_config.total_rounds, 5);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn rejects_zero_durations() {
        assert!(Config::try_parse_from(["roundbell", "--work", "0"]).is_err());
        assert!(Config::try_parse_from(["roundbell", "--rounds", "0"]).is_err());
    }

    #[test]
    fn verbose_selects_debug_logging() {
        let config = Config::try_parse_from(["roundbell", "-v"]).unwrap();
        assert_eq!(config.log_level(), "debug");
    }
}
