//! Runtime configuration
//!
//! Settings come from the command line, with environment variable
//! fallbacks, and are validated into a [`GameConfig`].

use crate::error::ConfigError;
use clap::Parser;
use std::time::Duration;

/// Default pause before the opponent answers a move
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 500;
pub const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 750.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "gomoku",
    about = "Five-in-a-row against a heuristic opponent",
    version
)]
pub struct Cli {
    /// Milliseconds the opponent waits before answering
    #[arg(long, env = "GOMOKU_OPPONENT_DELAY_MS", default_value_t = DEFAULT_OPPONENT_DELAY_MS)]
    pub opponent_delay_ms: u64,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE[0])]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE[1])]
    pub height: f32,

    /// Log filter, e.g. `info` or `gomoku=debug` (RUST_LOG takes precedence)
    #[arg(long, env = "GOMOKU_LOG", default_value = "info")]
    pub log: String,

    /// Play the engine against itself in the terminal instead of opening a window
    #[arg(long)]
    pub self_play: bool,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cosmetic pause before the opponent's reply is applied
    pub opponent_delay: Duration,
    pub window_size: [f32; 2],
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(DEFAULT_OPPONENT_DELAY_MS),
            window_size: DEFAULT_WINDOW_SIZE,
            log_filter: "info".to_string(),
        }
    }
}

impl TryFrom<&Cli> for GameConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(ConfigError::DelayTooLong(cli.opponent_delay_ms));
        }
        if cli.width < MIN_WINDOW_SIZE[0] || cli.height < MIN_WINDOW_SIZE[1] {
            return Err(ConfigError::WindowTooSmall {
                width: cli.width,
                height: cli.height,
                min_width: MIN_WINDOW_SIZE[0],
                min_height: MIN_WINDOW_SIZE[1],
            });
        }

        Ok(Self {
            opponent_delay: Duration::from_millis(cli.opponent_delay_ms),
            window_size: [cli.width, cli.height],
            log_filter: cli.log.clone(),
        })
    }
}
