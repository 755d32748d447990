//! Gomoku against a heuristic opponent
//!
//! Free-style five in a row on a 15x15 board:
//! - Black (the human) moves first, White is the computer
//! - Five or more in a row on any axis wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Line runs and pattern scores for one cell
//! - [`search`]: One-ply greedy move selection
//! - [`engine`]: Heuristic opponent wrapping the selector
//! - [`session`]: One game: board, history, clock and status
//! - [`config`]: Command-line settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Session, GameStatus, Stone};
//!
//! let mut session = Session::new();
//!
//! // Human plays the center as Black, x = column and y = row
//! let outcome = session.place_stone(7, 7, Stone::Black);
//! assert!(outcome.applied);
//!
//! // Computer answers as White
//! if let Some(pos) = session.request_opponent_move() {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```
//!
//! # Move Selection
//!
//! Every empty cell is scored twice, once for the mover and once for the
//! opponent, and the cell maximizing `own + 0.8 * block` is played. Ties go
//! to the first cell in row-major order.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveKind, MoveResult};
pub use error::{ConfigError, GameError};
pub use session::{GameStatus, PlaceOutcome, Session};
