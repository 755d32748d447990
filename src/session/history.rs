//! Ordered record of placed stones

use crate::board::{Pos, Stone};

/// A placed stone. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

impl Move {
    pub fn new(pos: Pos, stone: Stone) -> Self {
        Self { pos, stone }
    }
}

/// Moves in play order.
///
/// Entries are only ever appended, or removed from the end a full round
/// (two moves) at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(crate::board::TOTAL_CELLS),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove the last two moves, most recent first.
    ///
    /// Leaves the history untouched and returns `None` if fewer than two exist.
    pub fn pop_round(&mut self) -> Option<[Move; 2]> {
        if self.moves.len() < 2 {
            return None;
        }
        let last = self.moves.pop()?;
        let previous = self.moves.pop()?;
        Some([last, previous])
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
