//! Game state management for the Gomoku GUI
//!
//! Wraps a [`Session`] with the bits only the interactive front end needs:
//! turn gating, the delayed opponent reply, the current hint and the status
//! message.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::session::{PlaceOutcome, Session, PLAYER};
use crate::Pos;
use std::time::{Duration, Instant};
use tracing::debug;

/// Front-end game state
pub struct GameState {
    pub session: Session,
    /// Cell suggested by the last hint request, cleared by the next placement
    pub hint: Option<Pos>,
    pub message: Option<String>,
    /// When the opponent's reply is due
    opponent_due: Option<Instant>,
    /// Wait left on the reply while paused
    frozen_wait: Option<Duration>,
    opponent_delay: Duration,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: Session::new(),
            hint: None,
            message: None,
            opponent_due: None,
            frozen_wait: None,
            opponent_delay: config.opponent_delay,
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.hint = None;
        self.message = None;
        self.opponent_due = None;
        self.frozen_wait = None;
    }

    /// The opponent's reply is scheduled but not played yet
    pub fn is_opponent_pending(&self) -> bool {
        self.opponent_due.is_some() || self.frozen_wait.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_opponent_pending()
            && !self.session.status().is_over()
            && self.session.next_to_move() == PLAYER
    }

    /// Place the player's stone at `pos`
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<PlaceOutcome, GameError> {
        self.try_place_xy(pos.x(), pos.y(), Instant::now())
    }

    /// Place the player's stone at `(x, y)` and schedule the reply from `now`
    pub fn try_place_xy(&mut self, x: i32, y: i32, now: Instant) -> Result<PlaceOutcome, GameError> {
        if self.session.status().is_over() {
            return Err(GameError::GameOver);
        }
        if self.session.is_paused() {
            return Err(GameError::Paused);
        }
        if self.is_opponent_pending() {
            return Err(GameError::OpponentThinking);
        }
        if self.session.next_to_move() != PLAYER {
            return Err(GameError::NotYourTurn);
        }
        let pos = Pos::from_xy(x, y).ok_or(GameError::OutOfBounds)?;
        if !self.session.board().is_empty(pos) {
            return Err(GameError::Occupied);
        }

        let outcome = self.session.place_stone(x, y, PLAYER);
        self.hint = None;
        self.message = None;

        if outcome.applied && !self.session.status().is_over() {
            self.opponent_due = Some(now + self.opponent_delay);
        }
        Ok(outcome)
    }

    /// Play the opponent's reply if it is due at `now`.
    ///
    /// The countdown does not run while the game is paused.
    pub fn tick(&mut self, now: Instant) -> Option<Pos> {
        if self.session.is_paused() {
            return None;
        }
        let due = self.opponent_due?;
        if now < due {
            return None;
        }

        self.opponent_due = None;
        let pos = self.session.request_opponent_move();
        debug!(?pos, "opponent replied");
        pos
    }

    /// Time left before the reply is due, for scheduling a repaint
    pub fn opponent_wait(&self, now: Instant) -> Option<Duration> {
        self.opponent_due.map(|due| due.saturating_duration_since(now))
    }

    /// Ask the engine where it would play. Does not change the board.
    pub fn request_hint(&mut self) {
        if self.session.status().is_over() || self.session.is_paused() || self.is_opponent_pending() {
            return;
        }
        self.hint = self.session.request_hint();
    }

    /// Take back the last round
    pub fn undo(&mut self) {
        if self.is_opponent_pending() || self.session.is_paused() {
            return;
        }
        if self.session.status().is_over() {
            self.message = Some(GameError::GameOver.to_string());
            return;
        }
        if self.session.undo_last_round() {
            self.hint = None;
            self.message = None;
        } else {
            self.message = Some("Nothing to undo".to_string());
        }
    }

    pub fn toggle_pause(&mut self) {
        self.toggle_pause_at(Instant::now());
    }

    /// Pause or resume; a scheduled reply freezes with the clock
    pub fn toggle_pause_at(&mut self, now: Instant) {
        if self.session.status().is_over() {
            return;
        }
        if self.session.toggle_pause() {
            if let Some(due) = self.opponent_due.take() {
                self.frozen_wait = Some(due.saturating_duration_since(now));
            }
        } else if let Some(wait) = self.frozen_wait.take() {
            self.opponent_due = Some(now + wait);
        }
    }
}
