//! Game session: the board, its history and the clock
//!
//! `Session` is the single owner of all mutable game state. The human plays
//! Black and moves first; the heuristic opponent plays White. Every
//! operation is synchronous and reports rejection through its return value
//! instead of an error: an illegal placement or an impossible undo simply
//! leaves the session unchanged.
//!
//! # Example
//!
//! ```
//! use gomoku::session::{Session, OPPONENT, PLAYER};
//!
//! let mut session = Session::new();
//! let outcome = session.place_stone(7, 7, PLAYER);
//! assert!(outcome.applied && !outcome.won);
//!
//! let reply = session.request_opponent_move().unwrap();
//! assert_eq!(session.board().get(reply), OPPONENT);
//! assert_eq!(session.moves_remaining(), 110);
//! ```

pub mod clock;
pub mod history;

pub use clock::SessionClock;
pub use history::{Move, MoveHistory};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{find_winning_line, has_five_at_pos, is_draw};
use tracing::{debug, info};

/// Color of the human player, who moves first
pub const PLAYER: Stone = Stone::Black;
/// Color of the heuristic opponent
pub const OPPONENT: Stone = Stone::White;
/// Move budget shown by the counter: half the board, rounded down
pub const MOVE_LIMIT: usize = 112;

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceOutcome {
    /// The stone was put on the board
    pub applied: bool,
    /// The stone completed five in a row
    pub won: bool,
}

impl PlaceOutcome {
    const REJECTED: Self = Self { applied: false, won: false };
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    /// The board filled up without a five
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One game against the heuristic opponent
#[derive(Debug)]
pub struct Session {
    board: Board,
    history: MoveHistory,
    clock: SessionClock,
    status: GameStatus,
    winning_line: Option<Vec<Pos>>,
    engine: AIEngine,
    last_ai_result: Option<MoveResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            clock: SessionClock::default(),
            status: GameStatus::InProgress,
            winning_line: None,
            engine: AIEngine::new(),
            last_ai_result: None,
        }
    }

    /// Clear the board and history and restart the clock
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.clock.restart();
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_ai_result = None;
        info!("session reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Stones of the winning run, once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|m| m.pos)
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Black moves on even history lengths, White on odd ones
    pub fn next_to_move(&self) -> Stone {
        if self.history.len() % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Place `color` at `(x, y)`.
    ///
    /// Rejected (nothing changes) when the cell is off the board or occupied,
    /// when `color` is `Empty`, or when the game is already over. A full
    /// board without a five ends the game as a draw.
    pub fn place_stone(&mut self, x: i32, y: i32, color: Stone) -> PlaceOutcome {
        if color == Stone::Empty || self.status.is_over() {
            return PlaceOutcome::REJECTED;
        }
        let Some(pos) = Pos::from_xy(x, y) else {
            debug!(x, y, "placement off the board");
            return PlaceOutcome::REJECTED;
        };
        if !crate::rules::is_valid_move(&self.board, pos) {
            debug!(x, y, "placement on an occupied cell");
            return PlaceOutcome::REJECTED;
        }

        self.commit(pos, color)
    }

    fn commit(&mut self, pos: Pos, color: Stone) -> PlaceOutcome {
        self.board.place_stone(pos, color);
        self.history.push(Move::new(pos, color));

        let won = has_five_at_pos(&self.board, pos, color);
        if won {
            self.status = GameStatus::Won(color);
            self.winning_line = find_winning_line(&self.board, pos, color);
            info!(winner = color.name(), moves = self.history.len(), "game won");
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "board full, game drawn");
        }

        PlaceOutcome { applied: true, won }
    }

    /// Let the engine play `color` and commit its choice.
    ///
    /// Returns `None` when the game is over or the board has no empty cell;
    /// the latter also ends the game as a draw.
    pub fn play_engine_move(&mut self, color: Stone) -> Option<Pos> {
        if color == Stone::Empty || self.status.is_over() {
            return None;
        }

        let result = self.engine.get_move_with_stats(&self.board, color);
        let chosen = result.best_move;
        self.last_ai_result = Some(result);

        match chosen {
            Some(pos) => {
                self.commit(pos, color);
                Some(pos)
            }
            None => {
                self.status = GameStatus::Draw;
                info!("no empty cell for the engine, game drawn");
                None
            }
        }
    }

    /// Opponent's turn: choose, place and win-check a White stone
    pub fn request_opponent_move(&mut self) -> Option<Pos> {
        self.play_engine_move(OPPONENT)
    }

    /// The cell the opponent would pick right now. Does not touch the board.
    ///
    /// `None` once the game is over, like [`Session::request_opponent_move`].
    pub fn request_hint(&mut self) -> Option<Pos> {
        if self.status.is_over() {
            return None;
        }
        self.engine.get_move(&self.board, OPPONENT)
    }

    /// Take back the last round (two moves).
    ///
    /// Returns `false` without changing anything if fewer than two moves
    /// exist or the game is over.
    pub fn undo_last_round(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        let Some(round) = self.history.pop_round() else {
            return false;
        };
        for mv in round {
            self.board.remove_stone(mv.pos);
        }
        self.last_ai_result = None;
        info!(moves = self.history.len(), "round undone");
        true
    }

    /// Moves left on the counter, never below zero
    pub fn moves_remaining(&self) -> usize {
        MOVE_LIMIT.saturating_sub(self.history.len())
    }

    /// Whole seconds of unpaused play since the session started
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Flip the pause state and return the new one
    pub fn toggle_pause(&mut self) -> bool {
        if self.clock.is_paused() {
            self.clock.resume();
        } else {
            self.clock.pause();
        }
        debug!(paused = self.clock.is_paused(), "pause toggled");
        self.clock.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    #[test]
    fn test_place_rejects_off_board() {
        let mut session = Session::new();
        for (x, y) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
            assert_eq!(session.place_stone(x, y, PLAYER), PlaceOutcome::default());
        }
        assert!(session.history().is_empty());
        assert!(session.board().is_board_empty());
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut session = Session::new();
        assert!(session.place_stone(3, 4, PLAYER).applied);
        let before = session.board().clone();
        assert!(!session.place_stone(3, 4, OPPONENT).applied);
        assert_eq!(session.board(), &before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_place_rejects_empty_color() {
        let mut session = Session::new();
        assert!(!session.place_stone(3, 4, Stone::Empty).applied);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_matches_board() {
        let mut session = Session::new();
        session.place_stone(7, 7, PLAYER);
        session.request_opponent_move();
        session.place_stone(8, 8, PLAYER);
        session.request_opponent_move();
        assert_eq!(session.history().len(), session.board().stone_count() as usize);
        for mv in session.history() {
            assert_eq!(session.board().get(mv.pos), mv.stone);
        }
    }

    #[test]
    fn test_next_to_move_alternates() {
        let mut session = Session::new();
        assert_eq!(session.next_to_move(), Stone::Black);
        session.place_stone(0, 0, PLAYER);
        assert_eq!(session.next_to_move(), Stone::White);
        session.request_opponent_move();
        assert_eq!(session.next_to_move(), Stone::Black);
    }

    #[test]
    fn test_win_ends_game() {
        let mut session = Session::new();
        for y in 7..11 {
            session.place_stone(7, y, PLAYER);
        }
        let outcome = session.place_stone(7, 11, PLAYER);
        assert_eq!(outcome, PlaceOutcome { applied: true, won: true });
        assert_eq!(session.status(), GameStatus::Won(PLAYER));
        assert_eq!(session.winning_line().map(<[Pos]>::len), Some(5));

        // Nothing more can be played until reset
        assert!(!session.place_stone(0, 0, PLAYER).applied);
        assert!(session.request_opponent_move().is_none());
        assert!(!session.undo_last_round());
    }

    #[test]
    fn test_opponent_win_is_reported() {
        let mut session = Session::new();
        for x in 2..6 {
            session.place_stone(x, 0, OPPONENT);
        }
        let pos = session.request_opponent_move().unwrap();
        assert!(pos == Pos::new(0, 6) || pos == Pos::new(0, 1));
        assert_eq!(session.status(), GameStatus::Won(OPPONENT));
    }

    #[test]
    fn test_hint_matches_opponent_move_and_does_not_mutate() {
        let mut session = Session::new();
        session.place_stone(7, 7, PLAYER);
        session.place_stone(8, 7, OPPONENT);
        session.place_stone(7, 8, PLAYER);

        let board_before = session.board().clone();
        let hint = session.request_hint();
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.history().len(), 3);

        let played = session.request_opponent_move();
        assert_eq!(hint, played);
    }

    #[test]
    fn test_undo_requires_two_moves() {
        let mut session = Session::new();
        assert!(!session.undo_last_round());
        session.place_stone(5, 5, PLAYER);
        assert!(!session.undo_last_round());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_undo_clears_round() {
        let mut session = Session::new();
        session.place_stone(5, 5, PLAYER);
        session.request_opponent_move();
        session.place_stone(6, 6, PLAYER);
        let reply = session.request_opponent_move().unwrap();

        assert!(session.undo_last_round());
        assert_eq!(session.history().len(), 2);
        assert!(session.board().is_empty(Pos::new(6, 6)));
        assert!(session.board().is_empty(reply));
        assert_eq!(session.board().stone_count(), 2);
    }

    #[test]
    fn test_moves_remaining_saturates() {
        let mut session = Session::new();
        assert_eq!(session.moves_remaining(), MOVE_LIMIT);
        session.place_stone(0, 0, PLAYER);
        assert_eq!(session.moves_remaining(), MOVE_LIMIT - 1);

        // Fill well past the limit without making five
        for idx in 1..200 {
            let pos = Pos::from_index(idx);
            let band = (pos.col as usize / 2 + pos.row as usize) % 2;
            let color = if band == 0 { Stone::Black } else { Stone::White };
            session.place_stone(pos.x(), pos.y(), color);
        }
        assert_eq!(session.moves_remaining(), 0);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut session = Session::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let band = (pos.col as usize / 2 + pos.row as usize) % 2;
            let color = if band == 0 { Stone::Black } else { Stone::White };
            let outcome = session.place_stone(pos.x(), pos.y(), color);
            assert!(outcome.applied && !outcome.won);
        }
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(session.request_opponent_move().is_none());
        assert!(session.request_hint().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::new();
        session.place_stone(1, 1, PLAYER);
        session.request_opponent_move();
        session.toggle_pause();

        session.reset();
        assert!(session.board().is_board_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_paused());
        assert!(session.last_ai_result().is_none());
        assert_eq!(session.moves_remaining(), MOVE_LIMIT);
    }

    #[test]
    fn test_toggle_pause() {
        let mut session = Session::new();
        assert!(session.toggle_pause());
        assert!(session.is_paused());
        assert!(!session.toggle_pause());
        assert!(!session.is_paused());
    }
}
