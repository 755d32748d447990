//! Error types for the interactive layer and configuration
//!
//! The game core reports rejection through return values. These errors are
//! what the front end derives from those rejections, plus configuration
//! validation failures.

use thiserror::Error;

/// Why a click on the board did not place a stone
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,

    #[error("Game is paused")]
    Paused,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Opponent is thinking")]
    OpponentThinking,

    #[error("Position is off the board")]
    OutOfBounds,

    #[error("Position already occupied")]
    Occupied,
}

/// Invalid configuration values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("opponent delay of {0} ms exceeds the {max} ms maximum", max = crate::config::MAX_OPPONENT_DELAY_MS)]
    DelayTooLong(u64),

    #[error("window size {width}x{height} is smaller than {min_width}x{min_height}")]
    WindowTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}
