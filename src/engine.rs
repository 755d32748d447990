//! Main AI engine
//!
//! Wraps the one-ply selector with timing, statistics and logging. The
//! engine always answers the same way for the same board: there is no
//! randomness and no search state carried between moves.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Kind: {:?}", result.kind);
//! println!("Time: {}ms", result.time_ms);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::PatternScore;
use crate::search::{select_move_counted, Candidate};
use std::time::Instant;
use tracing::debug;

/// What the chosen move mainly does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Completes five for the mover
    ImmediateWin,
    /// Takes the cell where the opponent would complete five
    Defense,
    /// Best blended score, no five involved
    Heuristic,
}

impl MoveKind {
    fn classify(candidate: &Candidate) -> Self {
        if candidate.own >= PatternScore::FIVE {
            MoveKind::ImmediateWin
        } else if candidate.block >= PatternScore::FIVE {
            MoveKind::Defense
        } else {
            MoveKind::Heuristic
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Mover's own score at the chosen cell
    pub own_score: i32,
    /// Opponent's score at the chosen cell
    pub block_score: i32,
    /// `own + 0.8 * block`
    pub score: f64,
    pub kind: MoveKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of cells scored
    pub nodes: u64,
}

impl MoveResult {
    fn from_candidate(candidate: Candidate, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(candidate.pos),
            own_score: candidate.own,
            block_score: candidate.block,
            score: candidate.combined_f64(),
            kind: MoveKind::classify(&candidate),
            time_ms,
            nodes,
        }
    }

    /// No empty cell left
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            own_score: 0,
            block_score: 0,
            score: 0.0,
            kind: MoveKind::Heuristic,
            time_ms,
            nodes: 0,
        }
    }
}

/// Running totals across searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub searches: u64,
    pub nodes: u64,
}

/// Heuristic opponent.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Stone, Pos};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// for col in 3..7 {
///     board.place_stone(Pos::new(9, col), Stone::White);
/// }
/// // White completes the five at one end
/// let pos = engine.get_move(&board, Stone::White).unwrap();
/// assert!(pos == Pos::new(9, 2) || pos == Pos::new(9, 7));
/// ```
#[derive(Debug, Default)]
pub struct AIEngine {
    stats: EngineStats,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best move for `color`, or `None` on a full board.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// Never mutates `board`, so the same call serves both real moves and hints.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let (best, nodes) = select_move_counted(board, color);
        let time_ms = start.elapsed().as_millis() as u64;

        self.stats.searches += 1;
        self.stats.nodes += nodes;

        match best {
            Some(candidate) => {
                let result = MoveResult::from_candidate(candidate, time_ms, nodes);
                debug!(
                    color = color.name(),
                    row = candidate.pos.row,
                    col = candidate.pos.col,
                    own = candidate.own,
                    block = candidate.block,
                    kind = ?result.kind,
                    nodes,
                    "engine selected move"
                );
                result
            }
            None => {
                debug!(color = color.name(), "engine found no empty cell");
                MoveResult::no_move(time_ms)
            }
        }
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }
}
