use std::fmt;

use crate::constants::{HOLLOWS, INITIAL_SEEDS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub(crate) fn from_index(i: usize) -> Side {
        if i == 0 { Side::First } else { Side::Second }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "one"),
            Side::Second => write!(f, "two"),
        }
    }
}

/// A board snapshot: six hollows and one store per side.
///
/// `Board` is `Copy`; every transition builds a fresh value, so positions
/// held by a caller are never changed behind its back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    hollows: [[u32; HOLLOWS]; 2],
    stores: [u32; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard start: three seeds in every hollow, empty stores.
    pub fn new() -> Self {
        Self::with_seeds(INITIAL_SEEDS)
    }

    pub fn with_seeds(seeds: u32) -> Self {
        Self {
            hollows: [[seeds; HOLLOWS]; 2],
            stores: [0; 2],
        }
    }

    pub fn from_parts(first: [u32; HOLLOWS], second: [u32; HOLLOWS], stores: [u32; 2]) -> Self {
        Self {
            hollows: [first, second],
            stores,
        }
    }

    pub fn hollows(&self, side: Side) -> &[u32; HOLLOWS] {
        &self.hollows[side.index()]
    }

    pub fn hollow(&self, side: Side, idx: usize) -> u32 {
        self.hollows[side.index()][idx]
    }

    pub fn store(&self, side: Side) -> u32 {
        self.stores[side.index()]
    }

    pub fn row_sum(&self, side: Side) -> u32 {
        self.hollows[side.index()].iter().sum()
    }

    /// Seeds on the board, hollows and stores together. Constant across moves.
    pub fn total_seeds(&self) -> u32 {
        self.row_sum(Side::First) + self.row_sum(Side::Second) + self.stores.iter().sum::<u32>()
    }

    pub(crate) fn hollow_mut(&mut self, side: Side, idx: usize) -> &mut u32 {
        &mut self.hollows[side.index()][idx]
    }

    pub(crate) fn store_mut(&mut self, side: Side) -> &mut u32 {
        &mut self.stores[side.index()]
    }
}

/// Renders the board as seen from First's seat:
///
/// ```text
///   3 3 3 3 3 3
/// 0             0
///   3 3 3 3 3 3
/// ```
///
/// Second's row runs right to left on top with its store on the left;
/// First's row runs left to right below with its store on the right.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for seeds in self.hollows(Side::Second).iter().rev() {
            write!(f, "{seeds} ")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{}{}{}",
            self.store(Side::Second),
            " ".repeat(2 * HOLLOWS),
            self.store(Side::First)
        )?;
        write!(f, "  ")?;
        for seeds in self.hollows(Side::First) {
            write!(f, "{seeds} ")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_SEEDS;

    #[test]
    fn test_initial_board() {
        let board = Board::new();
        for side in Side::BOTH {
            assert_eq!(board.hollows(side), &[3; HOLLOWS]);
            assert_eq!(board.store(side), 0);
        }
        assert_eq!(board.total_seeds(), TOTAL_SEEDS);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent().opponent(), Side::Second);
        assert_eq!(Side::from_index(Side::Second.index()), Side::Second);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::from_parts([1, 2, 3, 4, 5, 6], [7, 8, 9, 0, 1, 2], [10, 11]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  2 1 0 9 8 7 ");
        assert_eq!(lines[1], "11            10");
        assert_eq!(lines[2], "  1 2 3 4 5 6 ");
    }
}
