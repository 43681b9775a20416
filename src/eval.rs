//! Board scoring from one side's point of view.

use crate::board::{Board, Side};

/// Which scoring formula to apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreKind {
    /// Store difference only.
    Differential,
    /// Store difference plus row difference, as if the game stopped now and
    /// every side banked the seeds left on its row.
    Final,
}

/// Score `board` for `perspective` using the given formula.
pub fn evaluate(board: &Board, perspective: Side, kind: ScoreKind) -> i32 {
    match kind {
        ScoreKind::Differential => score(board, perspective),
        ScoreKind::Final => final_score(board, perspective),
    }
}

pub fn score(board: &Board, perspective: Side) -> i32 {
    board.store(perspective) as i32 - board.store(perspective.opponent()) as i32
}

/// Final score. The search uses this both at terminal positions and at the
/// depth cut-off.
pub fn final_score(board: &Board, perspective: Side) -> i32 {
    let rows = board.row_sum(perspective) as i32 - board.row_sum(perspective.opponent()) as i32;
    score(board, perspective) + rows
}

/// Seeds each side ends the game with: store plus whatever is left in its row.
pub fn final_tally(board: &Board) -> [u32; 2] {
    Side::BOTH.map(|side| board.store(side) + board.row_sum(side))
}

/// Side holding more seeds by [`final_tally`], or `None` on a draw.
pub fn winner(board: &Board) -> Option<Side> {
    let [first, second] = final_tally(board);
    match first.cmp(&second) {
        std::cmp::Ordering::Greater => Some(Side::First),
        std::cmp::Ordering::Less => Some(Side::Second),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn late_game() -> Board {
        Board::from_parts([0, 0, 10, 11, 0, 0], [6, 5, 0, 0, 0, 0], [1, 2])
    }

    #[test]
    fn test_final_score() {
        let board = late_game();
        assert_eq!(evaluate(&board, Side::First, ScoreKind::Final), 9);
        assert_eq!(evaluate(&board, Side::Second, ScoreKind::Final), 13 - 22);
    }

    #[test]
    fn test_differential_score() {
        let board = late_game();
        assert_eq!(evaluate(&board, Side::First, ScoreKind::Differential), -1);
        assert_eq!(evaluate(&board, Side::Second, ScoreKind::Differential), 1);
    }

    #[test]
    fn test_tally_and_winner() {
        let board = late_game();
        assert_eq!(final_tally(&board), [22, 13]);
        assert_eq!(winner(&board), Some(Side::First));
        assert_eq!(winner(&Board::new()), None);
    }
}
