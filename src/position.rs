//! Position representation and move execution.
//!
//! This module provides the core game logic:
//! - Mapping of the 14-slot sowing ring onto hollows and stores
//! - Sowing, capture, and extra-turn resolution
//! - Legal move enumeration and terminal detection
//!
//! Sowing is a single walk over logical ring positions modulo [`RING_LEN`],
//! so a hollow holding more than a lap's worth of seeds needs no special
//! handling. Only the slot that receives the last seed decides whether the
//! mover keeps the turn or captures.

use tracing::trace;

use crate::board::{Board, Side};
use crate::constants::{HOLLOWS, RING_LEN, SIDE_SLOTS};
use crate::rules::Rules;

/// A move is the index (0-5) of the hollow to sow from.
pub type Move = usize;

/// Rejection of a move by the transition engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("Illegal move: hollow {0} is out of range (0-5)")]
    OutOfRange(Move),
    #[error("Illegal move: hollow {0} is empty")]
    EmptyHollow(Move),
}

/// A concrete location on the sowing ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Hollow(Side, usize),
    Store(Side),
}

/// Map a logical ring position to a slot.
///
/// Ring order is `First.h0..h5, First.store, Second.h0..h5, Second.store`.
pub fn slot(i: usize) -> Slot {
    let i = i % RING_LEN;
    let side = Side::from_index(i / SIDE_SLOTS);
    match i % SIDE_SLOTS {
        HOLLOWS => Slot::Store(side),
        idx => Slot::Hollow(side, idx),
    }
}

/// Inverse of [`slot`].
pub fn ring_index(s: Slot) -> usize {
    match s {
        Slot::Hollow(side, idx) => side.index() * SIDE_SLOTS + idx,
        Slot::Store(side) => side.index() * SIDE_SLOTS + HOLLOWS,
    }
}

impl Rules {
    /// Sow from `mv` on `side`'s row and resolve captures and extra turns.
    ///
    /// Returns the new board and the side to move next. The input board is
    /// left untouched.
    ///
    /// # Errors
    /// - [`InvalidMove::OutOfRange`] if `mv` is not a hollow index
    /// - [`InvalidMove::EmptyHollow`] if the hollow holds no seeds
    pub fn apply_move(&self, board: &Board, mv: Move, side: Side) -> Result<(Board, Side), InvalidMove> {
        if mv >= HOLLOWS {
            return Err(InvalidMove::OutOfRange(mv));
        }
        let mut seeds = board.hollow(side, mv);
        if seeds == 0 {
            return Err(InvalidMove::EmptyHollow(mv));
        }

        let mut next = *board;
        *next.hollow_mut(side, mv) = 0;

        let mut pos = ring_index(Slot::Hollow(side, mv));
        let mut last = Slot::Hollow(side, mv);
        while seeds > 0 {
            pos = (pos + 1) % RING_LEN;
            let s = slot(pos);
            match s {
                Slot::Store(owner) if owner != side && !self.sow_opponent_store => continue,
                Slot::Store(owner) => *next.store_mut(owner) += 1,
                Slot::Hollow(owner, idx) => *next.hollow_mut(owner, idx) += 1,
            }
            seeds -= 1;
            last = s;
        }

        let to_move = match last {
            Slot::Store(_) => {
                trace!(side = %side, mv, "extra turn");
                side
            }
            Slot::Hollow(owner, idx) => {
                self.capture(&mut next, side, owner, idx);
                side.opponent()
            }
        };

        debug_assert_eq!(
            next.total_seeds(),
            board.total_seeds(),
            "seed conservation violated"
        );
        Ok((next, to_move))
    }

    /// Resolve a possible capture after the last seed landed in `owner`'s
    /// hollow `idx`. Returns true if seeds were taken.
    fn capture(&self, board: &mut Board, mover: Side, owner: Side, idx: usize) -> bool {
        if board.hollow(owner, idx) != 1 {
            return false;
        }
        if owner != mover && !self.capture_on_opponent_side {
            return false;
        }

        let opposite = owner.opponent();
        let mirror = HOLLOWS - 1 - idx;
        let taken = board.hollow(opposite, mirror);
        if taken == 0 && !self.capture_empty_opposite {
            return false;
        }

        *board.hollow_mut(opposite, mirror) = 0;
        *board.hollow_mut(owner, idx) = 0;
        *board.store_mut(owner) += taken + 1;
        trace!(side = %owner, hollow = idx, taken, "capture");
        true
    }
}

/// Apply a move under the default rules. See [`Rules::apply_move`].
pub fn apply_move(board: &Board, mv: Move, side: Side) -> Result<(Board, Side), InvalidMove> {
    Rules::default().apply_move(board, mv, side)
}

/// Hollow indices `side` may sow from, in ascending order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .hollows(side)
        .iter()
        .enumerate()
        .filter(|&(_, &seeds)| seeds != 0)
        .map(|(i, _)| i)
        .collect()
}

/// True when `side` has no seeds left in its hollows.
///
/// Only the row of the side about to move is checked.
pub fn is_terminal(board: &Board, side: Side) -> bool {
    board.hollows(side).iter().all(|&seeds| seeds == 0)
}

/// A board together with the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard start with First to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::First,
        }
    }

    /// Play `mv` for the side to move, returning the following position.
    pub fn play(&self, rules: &Rules, mv: Move) -> Result<Position, InvalidMove> {
        let (board, to_move) = rules.apply_move(&self.board, mv, self.to_move)?;
        Ok(Position { board, to_move })
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.board, self.to_move)
    }
}
